//! Benchmark parameter types.

use std::fmt;

/// Parameters for a union-find benchmark run.
#[derive(Clone, Debug)]
pub struct UnionFindBenchParams {
    /// Number of elements in the partition.
    pub elements: usize,
    /// Number of union operations applied.
    pub unions: usize,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},unions={}", self.elements, self.unions)
    }
}

/// Parameters for a grid or experiment benchmark run.
#[derive(Clone, Debug)]
pub struct GridBenchParams {
    /// Grid dimension.
    pub side: usize,
    /// Number of trials, when the benchmark runs a whole experiment.
    pub trials: Option<usize>,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trials {
            Some(trials) => write!(f, "N={},T={trials}", self.side),
            None => write!(f, "N={}", self.side),
        }
    }
}
