//! Command-line interface orchestration for TOPSIS ranking.
//!
//! The CLI offers a single `run` command that reads a CSV decision table,
//! ranks its alternatives and writes the scored table back out as CSV.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
