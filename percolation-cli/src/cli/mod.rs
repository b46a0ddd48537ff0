//! Command-line interface orchestration for percolation experiments.
//!
//! The CLI offers a `stats` command that estimates the percolation threshold
//! from Monte Carlo trials, and a `check` command that opens a chosen set of
//! sites and reports whether the grid percolates.

mod commands;

pub use commands::{
    CheckCommand, CheckSummary, Cli, CliError, Command, ExecutionSummary, Site, StatsCommand,
    StatsSummary, Strategy, render_summary, run_cli,
};
