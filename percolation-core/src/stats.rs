//! Summary statistics over recorded percolation thresholds.
//!
//! Mean and variance are accumulated with Welford's online algorithm, which
//! avoids the cancellation of the textbook `E[X²] − E[X]²` formula.

use crate::error::{PercolationError, Result};

/// Two-sided z-score for a 95% normal confidence interval.
pub const CONFIDENCE_95_Z: f64 = 1.96;

/// Bounds of a confidence interval around the sample mean.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

/// Sample statistics of the percolation thresholds observed across trials.
///
/// # Examples
/// ```
/// use percolation_core::PercolationStats;
///
/// let stats = PercolationStats::from_thresholds(20, vec![0.5, 0.6, 0.7])?;
/// assert_eq!(stats.side(), 20);
/// assert!((stats.mean() - 0.6).abs() < 1e-12);
/// assert!((stats.stddev().expect("three samples") - 0.1).abs() < 1e-12);
/// # Ok::<(), percolation_core::PercolationError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PercolationStats {
    side: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: Option<f64>,
}

impl PercolationStats {
    /// Summarises `thresholds`, one value per trial on a `side × side` grid.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] when `side` is zero or
    /// `thresholds` is empty.
    pub fn from_thresholds(side: usize, thresholds: Vec<f64>) -> Result<Self> {
        if side == 0 {
            return Err(PercolationError::InvalidArgument {
                parameter: "side",
                got: side,
            });
        }
        if thresholds.is_empty() {
            return Err(PercolationError::InvalidArgument {
                parameter: "thresholds",
                got: 0,
            });
        }

        let mut acc = Welford::default();
        for &threshold in &thresholds {
            acc.update(threshold);
        }

        Ok(Self {
            side,
            mean: acc.mean,
            stddev: acc.sample_variance().map(f64::sqrt),
            thresholds,
        })
    }

    /// Returns the grid dimension the thresholds were measured on.
    #[must_use]
    #[rustfmt::skip]
    pub fn side(&self) -> usize { self.side }

    /// Returns the per-trial thresholds in trial order.
    #[must_use]
    #[rustfmt::skip]
    pub fn thresholds(&self) -> &[f64] { &self.thresholds }

    /// Returns the number of trials summarised.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials(&self) -> usize { self.thresholds.len() }

    /// Returns the sample mean of the thresholds.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean(&self) -> f64 { self.mean }

    /// Returns the sample standard deviation, or `None` for a single trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn stddev(&self) -> Option<f64> { self.stddev }

    /// Returns the 95% confidence interval `mean ± 1.96·s/√T`, or `None` for
    /// a single trial.
    #[must_use]
    pub fn confidence_interval(&self) -> Option<ConfidenceInterval> {
        let stddev = self.stddev?;
        let half_width = CONFIDENCE_95_Z * stddev / (self.trials() as f64).sqrt();
        Some(ConfidenceInterval {
            lo: self.mean - half_width,
            hi: self.mean + half_width,
        })
    }
}

#[derive(Debug, Default)]
struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }
}
