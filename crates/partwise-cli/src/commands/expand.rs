//! Expand command implementation
//!
//! Expands one or more built-in fixtures, printing each combination as it
//! is produced rather than collecting them first.

use std::process::ExitCode;

use anyhow::{bail, Result};
use colored::Colorize;
use partwise_expand::Expander;

use crate::fixtures::{self, Fixture};

/// Run the expand command.
pub fn run(fixture: Option<&str>, all: bool, json: bool) -> Result<ExitCode> {
    let selected: Vec<&Fixture> = if all {
        fixtures::FIXTURES.iter().collect()
    } else {
        match fixture {
            Some(name) => match fixtures::find(name) {
                Some(found) => vec![found],
                None => bail!("unknown fixture: {} (see `partwise list`)", name),
            },
            None => bail!("pass --fixture <name> or --all"),
        }
    };

    for fixture in selected {
        if json {
            expand_json(fixture)?;
        } else {
            expand_human(fixture)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Expand one fixture with human-readable (colored) output.
fn expand_human(fixture: &Fixture) -> Result<()> {
    let tree = fixture.tree();
    println!("{} {}", "Expanding:".cyan().bold(), fixture.name);
    println!("{} {}", "Source:".dimmed(), tree);

    let mut count = 0usize;
    for combo in Expander::new(&tree)? {
        count += 1;
        println!("  {} {}", format!("[{count}]").dimmed(), combo);
    }
    println!("{} {}\n", "Combinations:".green().bold(), count);
    Ok(())
}

/// Expand one fixture as JSON lines, one combination per line.
fn expand_json(fixture: &Fixture) -> Result<()> {
    let tree = fixture.tree();
    for combo in Expander::new(&tree)? {
        println!("{}", serde_json::to_string(&combo)?);
    }
    Ok(())
}
