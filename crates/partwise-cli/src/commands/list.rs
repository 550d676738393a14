//! List command implementation
//!
//! Prints the built-in fixture names and what each one demonstrates.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use crate::fixtures::FIXTURES;

/// Run the list command.
pub fn run(json: bool) -> Result<ExitCode> {
    if json {
        let names: Vec<&str> = FIXTURES.iter().map(|fixture| fixture.name).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(ExitCode::SUCCESS);
    }

    for fixture in FIXTURES {
        println!(
            "  {}  {}",
            format!("{:<8}", fixture.name).cyan().bold(),
            fixture.summary
        );
    }
    println!("\n{} {}", "Fixtures:".dimmed(), FIXTURES.len());
    Ok(ExitCode::SUCCESS)
}
