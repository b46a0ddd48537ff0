//! Benchmark support crate for percolation.
//!
//! Provides deterministic workloads and parameter types used by Criterion
//! benchmarks for union-find operations, single grid trials, and whole
//! experiments.

pub mod error;
pub mod params;
pub mod workload;
