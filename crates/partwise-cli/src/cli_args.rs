//! CLI argument definitions for the partwise command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// partwise - expand nested spec data into part combinations
#[derive(Parser)]
#[command(name = "partwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the built-in sample fixtures
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Expand fixtures and print each combination as it is produced
    Expand {
        /// Fixture name (see `partwise list`)
        #[arg(short, long)]
        fixture: Option<String>,

        /// Expand every built-in fixture
        #[arg(long)]
        all: bool,

        /// Output one JSON document per combination (no colored output)
        #[arg(long)]
        json: bool,
    },
}
