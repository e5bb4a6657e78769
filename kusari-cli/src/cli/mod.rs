//! Command-line interface orchestration for kusari.
//!
//! The CLI offers a `chains` command that loads an edge list, optionally
//! applies breakpoint flags from a second file, and prints the resulting chain
//! decomposition.

mod commands;

pub use commands::{
    ChainsCommand, Cli, CliError, Command, ExecutionSummary, StrategyArg, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
