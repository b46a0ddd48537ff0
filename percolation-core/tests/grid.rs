//! Scenario tests for the public percolation grid API.

use percolation_core::{PercolationError, PercolationGrid, SiteState, TracingObserver};
use percolation_test_support::tracing::CaptureLayer;
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn opening_last_column_percolates_without_filling_first_column() {
    let mut grid = PercolationGrid::new(3).expect("3x3 grid is valid");
    for row in 1..=3 {
        grid.open(row, 3).expect("site is in range");
    }
    assert!(grid.percolates());
    assert!(!grid.is_open(3, 1).expect("site is in range"));
    assert!(!grid.is_full(3, 1).expect("site is in range"));
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(25)]
fn opening_a_full_column_percolates(#[case] side: usize) {
    let mut grid = PercolationGrid::new(side).expect("non-zero side");
    for row in 1..side {
        grid.open(row, 1).expect("site is in range");
        assert!(!grid.percolates());
    }
    grid.open(side, 1).expect("site is in range");
    assert!(grid.percolates());
    assert_eq!(grid.open_sites(), side);
    assert_eq!(grid.snapshot().count(SiteState::Full), side);
}

#[test]
fn snake_path_percolates_only_when_complete() {
    let mut grid = PercolationGrid::new(4).expect("4x4 grid is valid");
    let path = [
        (1, 1),
        (2, 1),
        (2, 2),
        (2, 3),
        (2, 4),
        (3, 4),
        (4, 4),
    ];
    for &(row, column) in &path[..path.len() - 1] {
        grid.open(row, column).expect("site is in range");
    }
    assert!(!grid.percolates());
    assert!(grid.is_full(3, 4).expect("site is in range"));

    grid.open(4, 4).expect("site is in range");
    assert!(grid.percolates());
    assert_eq!(
        grid.snapshot().to_string(),
        "*###\n****\n###*\n###*\n"
    );
}

#[test]
fn failed_open_leaves_grid_usable() {
    let mut grid = PercolationGrid::new(2).expect("2x2 grid is valid");
    let err = grid.open(3, 1).expect_err("row 3 is out of range");
    assert!(matches!(err, PercolationError::OutOfRange { axis: "row", value: 3, .. }));

    grid.open(1, 1).expect("site is in range");
    grid.open(2, 1).expect("site is in range");
    assert!(grid.percolates());
}

#[test]
fn observed_grid_traces_site_merges() {
    let capture = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let percolates = tracing::subscriber::with_default(subscriber, || {
        let mut grid =
            PercolationGrid::with_observer(2, TracingObserver).expect("2x2 grid is valid");
        grid.open(1, 2).expect("site is in range");
        grid.open(2, 2).expect("site is in range");
        grid.percolates()
    });

    assert!(percolates);
    // Top join, then neighbour join plus bottom join for the second site.
    assert_eq!(capture.events_with_message("merged disjoint sets").len(), 3);
}
