//! partwise CLI - demo driver for the combination expander
//!
//! Provides commands for listing the built-in sample fixtures and expanding
//! them into their concrete part combinations.

use std::process::ExitCode;

use clap::Parser;

mod cli_args;
mod commands;
mod fixtures;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Expand { fixture, all, json } => {
            commands::expand::run(fixture.as_deref(), all, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
