//! Percolation core library.
//!
//! Models site percolation on an `N`-by-`N` grid with a weighted union-find
//! and estimates the percolation threshold through Monte Carlo trials.
//!
//! - [`DisjointSet`] partitions dense element indices with union by subtree
//!   size and path compression.
//! - [`PercolationGrid`] maps 1-indexed sites onto a [`DisjointSet`] with two
//!   virtual elements so fullness and percolation are single lookups.
//! - [`ExperimentBuilder`] configures an [`Experiment`] whose run produces
//!   [`PercolationStats`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod error;
mod experiment;
mod grid;
mod rng;
mod stats;

pub use crate::{
    builder::{ExecutionStrategy, ExperimentBuilder},
    disjoint_set::{DisjointSet, NoopObserver, SetObserver, TracingObserver},
    error::{PercolationError, PercolationErrorCode, Result},
    experiment::Experiment,
    grid::{GridSnapshot, PercolationGrid, SiteState},
    stats::{CONFIDENCE_95_Z, ConfidenceInterval, PercolationStats},
};
