//! Observation hooks for union-find activity.
//!
//! Observers receive callbacks from inside [`super::DisjointSet`] without
//! affecting its results, which keeps diagnostics out of the core algorithm.

use tracing::trace;

/// Receives notifications about lookups and merges.
///
/// Both callbacks default to doing nothing so implementors only override the
/// events they care about.
pub trait SetObserver {
    /// Called after `element` has been resolved to `root`.
    fn root_found(&mut self, _element: usize, _root: usize) {}

    /// Called after the set rooted at `absorbed` was attached beneath
    /// `survivor`, whose set now holds `size` elements.
    fn merged(&mut self, _survivor: usize, _absorbed: usize, _size: usize) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoopObserver;

impl SetObserver for NoopObserver {}

/// Observer that forwards notifications as `trace`-level `tracing` events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingObserver;

impl SetObserver for TracingObserver {
    fn root_found(&mut self, element: usize, root: usize) {
        trace!(element, root, "resolved set root");
    }

    fn merged(&mut self, survivor: usize, absorbed: usize, size: usize) {
        trace!(survivor, absorbed, size, "merged disjoint sets");
    }
}
