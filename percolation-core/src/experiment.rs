//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random sites of a fresh grid until it
//! percolates and records the fraction of sites that had to be opened.

use std::num::NonZeroUsize;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};
#[cfg(not(feature = "parallel"))]
use tracing::warn;

use crate::{
    Result,
    builder::ExecutionStrategy,
    grid::PercolationGrid,
    rng::trial_rng,
    stats::PercolationStats,
};

/// Entry point for running a batch of independent percolation trials.
///
/// # Examples
/// ```
/// use percolation_core::ExperimentBuilder;
///
/// let experiment = ExperimentBuilder::new()
///     .with_side(10)
///     .with_trials(5)
///     .with_seed(11)
///     .build()
///     .expect("builder must succeed");
/// let stats = experiment.run().expect("run must succeed");
/// assert_eq!(stats.side(), 10);
/// assert_eq!(stats.trials(), 5);
/// assert!(stats.thresholds().iter().all(|&t| t > 0.0 && t <= 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    side: NonZeroUsize,
    trials: NonZeroUsize,
    seed: u64,
    execution_strategy: ExecutionStrategy,
}

impl Experiment {
    pub(crate) fn new(
        side: NonZeroUsize,
        trials: NonZeroUsize,
        seed: u64,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            side,
            trials,
            seed,
            execution_strategy,
        }
    }

    /// Returns the grid dimension used by every trial.
    #[must_use]
    pub fn side(&self) -> NonZeroUsize {
        self.side
    }

    /// Returns the number of trials performed by [`Experiment::run`].
    #[must_use]
    pub fn trials(&self) -> NonZeroUsize {
        self.trials
    }

    /// Returns the base seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Runs every trial and summarises the observed thresholds.
    ///
    /// Results depend only on the side, trial count, and seed: the execution
    /// strategy changes scheduling, not outcomes.
    ///
    /// # Errors
    /// Propagates grid construction failures, which the builder's validation
    /// rules out in practice.
    #[instrument(
        name = "experiment.run",
        err,
        skip(self),
        fields(
            side = self.side.get(),
            trials = self.trials.get(),
            seed = self.seed,
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run(&self) -> Result<PercolationStats> {
        let thresholds = match self.execution_strategy {
            ExecutionStrategy::Sequential => self.run_sequential()?,
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => (0..self.trials.get())
                .into_par_iter()
                .map(|trial| self.run_trial(trial))
                .collect::<Result<Vec<_>>>()?,
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => {
                warn!("parallel feature disabled, running trials sequentially");
                self.run_sequential()?
            }
        };

        let stats = PercolationStats::from_thresholds(self.side.get(), thresholds)?;
        info!(
            mean = stats.mean(),
            stddev = stats.stddev(),
            "experiment completed"
        );
        Ok(stats)
    }

    fn run_sequential(&self) -> Result<Vec<f64>> {
        (0..self.trials.get())
            .map(|trial| self.run_trial(trial))
            .collect()
    }

    fn run_trial(&self, trial: usize) -> Result<f64> {
        let side = self.side.get();
        let mut rng = trial_rng(self.seed, trial);
        let mut grid = PercolationGrid::new(side)?;

        while !grid.percolates() {
            let row = rng.gen_range(1..=side);
            let column = rng.gen_range(1..=side);
            if !grid.is_open(row, column)? {
                grid.open(row, column)?;
            }
        }

        let sites = side as f64 * side as f64;
        let threshold = grid.open_sites() as f64 / sites;
        debug!(
            trial,
            opened = grid.open_sites(),
            threshold,
            "trial percolated"
        );
        Ok(threshold)
    }
}
