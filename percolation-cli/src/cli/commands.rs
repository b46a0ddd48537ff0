//! Command implementations and argument parsing for the percolation CLI.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use percolation_core::{
    ExecutionStrategy, ExperimentBuilder, GridSnapshot, PercolationError, PercolationGrid,
    PercolationStats, TracingObserver,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SEED: u64 = 0x5EED;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "percolation",
    about = "Estimate percolation thresholds on square grids."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Estimate the percolation threshold with independent random trials.
    Stats(StatsCommand),
    /// Open specific sites and report whether the grid percolates.
    Check(CheckCommand),
}

/// Options accepted by the `stats` command.
#[derive(Debug, Args, Clone)]
pub struct StatsCommand {
    /// Grid dimension N.
    pub side: usize,

    /// Number of independent trials T.
    pub trials: usize,

    /// Base seed for the per-trial random streams.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// How trials are scheduled.
    #[arg(long, value_enum, default_value_t = Strategy::Sequential)]
    pub strategy: Strategy,
}

/// Trial scheduling choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Run trials one after another.
    Sequential,
    /// Run trials on all available cores.
    Parallel,
}

impl From<Strategy> for ExecutionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Sequential => Self::Sequential,
            Strategy::Parallel => Self::Parallel,
        }
    }
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Grid dimension N.
    pub side: usize,

    /// Site to open, as `ROW,COL` (1-indexed). May be repeated.
    #[arg(long = "open", value_name = "ROW,COL")]
    pub open: Vec<Site>,
}

/// A 1-indexed `(row, column)` pair parsed from `ROW,COL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// Row index, starting at 1.
    pub row: usize,
    /// Column index, starting at 1.
    pub column: usize,
}

impl FromStr for Site {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (row, column) = raw
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL but got `{raw}`"))?;
        let parse = |part: &str, axis: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|err| format!("invalid {axis} `{part}`: {err}"))
        };
        Ok(Self {
            row: parse(row, "row")?,
            column: parse(column, "column")?,
        })
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A site passed to `check` could not be opened.
    #[error("cannot open site {site}: {source}")]
    Site {
        /// Site that was rejected.
        site: Site,
        /// Underlying grid error.
        #[source]
        source: PercolationError,
    },
    /// Core validation or execution failed.
    #[error(transparent)]
    Core(#[from] PercolationError),
}

impl CliError {
    /// Returns the core error behind this failure.
    #[must_use]
    pub fn core(&self) -> &PercolationError {
        match self {
            Self::Site { source, .. } => source,
            Self::Core(core) => core,
        }
    }
}

/// Result of the `stats` command.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Grid dimension used by every trial.
    pub side: usize,
    /// Threshold statistics across trials.
    pub stats: PercolationStats,
}

/// Result of the `check` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Final state of every site.
    pub snapshot: GridSnapshot,
    /// Whether the grid percolates after opening the requested sites.
    pub percolates: bool,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionSummary {
    /// Outcome of `stats`.
    Stats(StatsSummary),
    /// Outcome of `check`.
    Check(CheckSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation or execution fails.
///
/// # Examples
/// ```
/// use percolation_cli::cli::{CheckCommand, Cli, Command, ExecutionSummary, Site, run_cli};
///
/// let cli = Cli {
///     command: Command::Check(CheckCommand {
///         side: 2,
///         open: vec![Site { row: 1, column: 1 }, Site { row: 2, column: 1 }],
///     }),
/// };
/// let ExecutionSummary::Check(summary) = run_cli(cli)? else {
///     panic!("check must produce a check summary");
/// };
/// assert!(summary.percolates);
/// # Ok::<(), percolation_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Stats(stats) => {
            Span::current().record("command", field::display("stats"));
            run_stats(stats).map(ExecutionSummary::Stats)
        }
        Command::Check(check) => {
            Span::current().record("command", field::display("check"));
            run_check(check).map(ExecutionSummary::Check)
        }
    }
}

#[instrument(
    name = "cli.stats",
    err,
    skip(command),
    fields(side = command.side, trials = command.trials, seed = command.seed),
)]
pub(super) fn run_stats(command: StatsCommand) -> Result<StatsSummary, CliError> {
    let experiment = ExperimentBuilder::new()
        .with_side(command.side)
        .with_trials(command.trials)
        .with_seed(command.seed)
        .with_execution_strategy(command.strategy.into())
        .build()?;
    let stats = experiment.run()?;
    info!(
        mean = stats.mean(),
        trials = stats.trials(),
        "command completed"
    );
    Ok(StatsSummary {
        side: stats.side(),
        stats,
    })
}

#[instrument(
    name = "cli.check",
    err,
    skip(command),
    fields(side = command.side, sites = command.open.len()),
)]
pub(super) fn run_check(command: CheckCommand) -> Result<CheckSummary, CliError> {
    let mut grid = PercolationGrid::with_observer(command.side, TracingObserver)?;
    for site in command.open {
        grid.open(site.row, site.column)
            .map_err(|source| CliError::Site { site, source })?;
    }
    let percolates = grid.percolates();
    info!(
        open_sites = grid.open_sites(),
        percolates, "command completed"
    );
    Ok(CheckSummary {
        snapshot: grid.snapshot(),
        percolates,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use percolation_cli::cli::{ExecutionSummary, StatsSummary, render_summary};
/// # use percolation_core::PercolationStats;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Stats(StatsSummary {
///     side: 2,
///     stats: PercolationStats::from_thresholds(2, vec![0.5])?,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("mean                    = 0.5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Stats(StatsSummary { stats, .. }) => {
            writeln!(writer, "mean                    = {}", stats.mean())?;
            match stats.stddev() {
                Some(stddev) => writeln!(writer, "stddev                  = {stddev}")?,
                None => writeln!(writer, "stddev                  = undefined")?,
            }
            match stats.confidence_interval() {
                Some(interval) => writeln!(
                    writer,
                    "95% confidence interval = [{}, {}]",
                    interval.lo, interval.hi
                )?,
                None => writeln!(writer, "95% confidence interval = undefined")?,
            }
        }
        ExecutionSummary::Check(CheckSummary {
            snapshot,
            percolates,
        }) => {
            write!(writer, "{snapshot}")?;
            writeln!(writer, "percolates: {percolates}")?;
        }
    }
    Ok(())
}
