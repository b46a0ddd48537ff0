//! Builder utilities for configuring Monte Carlo experiments.
//!
//! Exposes the execution strategy selection surface and the validation run
//! before an [`Experiment`] is constructed.

use std::num::NonZeroUsize;

use crate::{Result, error::PercolationError, experiment::Experiment};

/// Indicates how [`Experiment::run`] schedules its independent trials.
///
/// Every trial owns its grid and random stream, so both strategies produce
/// identical thresholds for the same seed.
///
/// # Examples
/// ```
/// use percolation_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert_eq!(strategy, ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Run trials one after another on the calling thread.
    #[default]
    Sequential,
    /// Spread trials across the rayon thread pool. Builds without the
    /// `parallel` feature fall back to sequential execution.
    Parallel,
}

/// Configures and constructs [`Experiment`] instances.
///
/// # Examples
/// ```
/// use percolation_core::{ExecutionStrategy, ExperimentBuilder};
///
/// let experiment = ExperimentBuilder::new()
///     .with_side(20)
///     .with_trials(10)
///     .with_execution_strategy(ExecutionStrategy::Parallel)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(experiment.side().get(), 20);
/// assert_eq!(experiment.trials().get(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentBuilder {
    side: usize,
    trials: usize,
    seed: u64,
    execution_strategy: ExecutionStrategy,
}

impl Default for ExperimentBuilder {
    fn default() -> Self {
        Self {
            side: 200,
            trials: 30,
            seed: 0x5EED,
            execution_strategy: ExecutionStrategy::Sequential,
        }
    }
}

impl ExperimentBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use percolation_core::{ExecutionStrategy, ExperimentBuilder};
    ///
    /// let builder = ExperimentBuilder::new();
    /// assert_eq!(builder.side(), 200);
    /// assert_eq!(builder.trials(), 30);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the grid dimension used by every trial.
    #[must_use]
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Returns the configured grid dimension.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Overrides the number of independent trials.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Returns the configured number of trials.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Overrides the base seed from which every trial derives its random
    /// stream.
    ///
    /// # Examples
    /// ```
    /// use percolation_core::ExperimentBuilder;
    ///
    /// let builder = ExperimentBuilder::new().with_seed(7);
    /// assert_eq!(builder.seed(), 7);
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured base seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets the strategy used to schedule trials.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs an [`Experiment`].
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] when the side or trial
    /// count is zero, or when a `side`-by-`side` grid cannot be addressed.
    ///
    /// # Examples
    /// ```
    /// use percolation_core::{ExperimentBuilder, PercolationError};
    ///
    /// let err = ExperimentBuilder::new().with_trials(0).build().unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     PercolationError::InvalidArgument { parameter: "trials", got: 0 }
    /// ));
    /// ```
    pub fn build(self) -> Result<Experiment> {
        let invalid_side = || PercolationError::InvalidArgument {
            parameter: "side",
            got: self.side,
        };
        let side = NonZeroUsize::new(self.side).ok_or_else(invalid_side)?;
        side.get()
            .checked_mul(side.get())
            .and_then(|sites| sites.checked_add(2))
            .ok_or_else(invalid_side)?;

        let trials =
            NonZeroUsize::new(self.trials).ok_or_else(|| PercolationError::InvalidArgument {
                parameter: "trials",
                got: self.trials,
            })?;

        Ok(Experiment::new(
            side,
            trials,
            self.seed,
            self.execution_strategy,
        ))
    }
}
