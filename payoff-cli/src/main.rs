//! ## payoff-cli
//! **Avalanche debt payoff simulator**
//!
//! Reads a JSON list of debts, simulates paying them off month by month with
//! the avalanche method, and prints the period-by-period trace.

use clap::Parser;

mod commands;
mod error;
mod report;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::run_command(cli)?;
    Ok(())
}
