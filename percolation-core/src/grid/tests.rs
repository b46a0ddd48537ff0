//! Unit tests for percolation grid connectivity.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rstest::{fixture, rstest};

use percolation_test_support::profile::property_cases;

use super::{PercolationGrid, SiteState};
use crate::error::PercolationError;

#[fixture]
fn grid3() -> PercolationGrid {
    PercolationGrid::new(3).expect("3x3 grid is valid")
}

fn open_all(grid: &mut PercolationGrid, sites: &[(usize, usize)]) {
    for &(row, column) in sites {
        grid.open(row, column).expect("site is in range");
    }
}

/// Flood from the open top-row sites over open orthogonal neighbours,
/// independent of the union-find. Reaching any open bottom-row site also
/// reaches every other open bottom-row site, mirroring the shared virtual
/// bottom element.
fn flood_full(side: usize, open: &[bool]) -> Vec<bool> {
    let bottom_row = (side - 1) * side..side * side;
    let mut full = vec![false; open.len()];
    let mut frontier: Vec<usize> = (0..side).filter(|&site| open[site]).collect();
    for &site in &frontier {
        full[site] = true;
    }
    let mut bottom_reached = false;
    while let Some(site) = frontier.pop() {
        let (row, column) = (site / side, site % side);
        let mut neighbours = Vec::with_capacity(4);
        if column > 0 {
            neighbours.push(site - 1);
        }
        if column + 1 < side {
            neighbours.push(site + 1);
        }
        if row > 0 {
            neighbours.push(site - side);
        }
        if row + 1 < side {
            neighbours.push(site + side);
        }
        if bottom_row.contains(&site) && !bottom_reached {
            bottom_reached = true;
            neighbours.extend(bottom_row.clone());
        }
        for neighbour in neighbours {
            if open[neighbour] && !full[neighbour] {
                full[neighbour] = true;
                frontier.push(neighbour);
            }
        }
    }
    full
}

#[test]
fn rejects_zero_side() {
    let err = PercolationGrid::new(0).expect_err("zero side must be rejected");
    assert_eq!(
        err,
        PercolationError::InvalidArgument {
            parameter: "side",
            got: 0
        }
    );
}

#[test]
fn rejects_side_whose_area_overflows() {
    let err = PercolationGrid::new(usize::MAX).expect_err("overflowing side must be rejected");
    assert!(matches!(
        err,
        PercolationError::InvalidArgument {
            parameter: "side",
            ..
        }
    ));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(17)]
fn blocked_grid_does_not_percolate(#[case] side: usize) {
    let mut grid = PercolationGrid::new(side).expect("non-zero side");
    assert!(!grid.percolates());
    assert_eq!(grid.open_sites(), 0);
    assert_eq!(grid.snapshot().count(SiteState::Blocked), side * side);
}

#[rstest]
#[case::row_zero(0, 1, "row", 0)]
#[case::row_past_end(4, 1, "row", 4)]
#[case::column_zero(2, 0, "column", 0)]
#[case::column_past_end(2, 4, "column", 4)]
fn rejects_out_of_range_sites(
    mut grid3: PercolationGrid,
    #[case] row: usize,
    #[case] column: usize,
    #[case] axis: &'static str,
    #[case] value: usize,
) {
    let expected = PercolationError::OutOfRange {
        axis,
        value,
        lower: 1,
        upper: 3,
    };
    assert_eq!(grid3.is_open(row, column), Err(expected.clone()));
    assert_eq!(grid3.is_full(row, column), Err(expected.clone()));
    assert_eq!(grid3.open(row, column), Err(expected));
    assert_eq!(grid3.open_sites(), 0);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(9)]
fn out_of_range_rows_fail_for_every_side(#[case] side: usize) {
    let grid = PercolationGrid::new(side).expect("non-zero side");
    assert!(matches!(
        grid.is_open(0, 1),
        Err(PercolationError::OutOfRange { axis: "row", .. })
    ));
    assert!(matches!(
        grid.is_open(side + 1, 1),
        Err(PercolationError::OutOfRange { axis: "row", .. })
    ));
}

#[test]
fn single_site_grid_percolates_once_opened() {
    let mut grid = PercolationGrid::new(1).expect("1x1 grid is valid");
    grid.open(1, 1).expect("site is in range");
    assert!(grid.percolates());
    assert!(grid.is_full(1, 1).expect("site is in range"));
}

#[rstest]
fn first_column_path_percolates(mut grid3: PercolationGrid) {
    open_all(&mut grid3, &[(1, 1), (2, 1)]);
    assert!(!grid3.percolates());
    grid3.open(3, 1).expect("site is in range");
    assert!(grid3.percolates());
}

#[rstest]
fn last_column_path_leaves_blocked_bottom_site_empty(mut grid3: PercolationGrid) {
    open_all(&mut grid3, &[(1, 3), (2, 3), (3, 3)]);
    assert!(grid3.percolates());
    assert!(!grid3.is_open(3, 1).expect("site is in range"));
    assert!(!grid3.is_full(3, 1).expect("site is in range"));
}

#[rstest]
fn bottom_row_sites_fill_through_virtual_bottom_once_percolating(mut grid3: PercolationGrid) {
    open_all(&mut grid3, &[(1, 3), (2, 3), (3, 3), (3, 1)]);
    assert!(grid3.is_full(3, 1).expect("site is in range"));
    assert!(!grid3.is_full(2, 2).expect("site is in range"));
}

#[rstest]
fn bottom_row_sites_stay_empty_before_percolation(mut grid3: PercolationGrid) {
    open_all(&mut grid3, &[(3, 1), (3, 3), (2, 3)]);
    assert!(!grid3.percolates());
    assert!(!grid3.is_full(3, 1).expect("site is in range"));
    assert!(!grid3.is_full(2, 3).expect("site is in range"));
}

#[rstest]
fn reopening_a_site_is_a_no_op(mut grid3: PercolationGrid) {
    grid3.open(2, 2).expect("site is in range");
    let before = grid3.snapshot();
    grid3.open(2, 2).expect("site is in range");
    assert_eq!(grid3.open_sites(), 1);
    assert_eq!(grid3.snapshot(), before);
}

#[rstest]
fn top_row_sites_are_full_without_neighbours(mut grid3: PercolationGrid) {
    grid3.open(1, 2).expect("site is in range");
    assert!(grid3.is_full(1, 2).expect("site is in range"));
    assert!(!grid3.is_full(1, 1).expect("site is in range"));
}

#[rstest]
fn diagonal_sites_do_not_connect(mut grid3: PercolationGrid) {
    open_all(&mut grid3, &[(1, 1), (2, 2), (3, 3)]);
    assert!(!grid3.percolates());
    assert!(!grid3.is_full(2, 2).expect("site is in range"));
}

#[rstest]
fn snapshot_renders_site_states(mut grid3: PercolationGrid) {
    open_all(&mut grid3, &[(1, 1), (2, 1), (3, 3)]);
    let snapshot = grid3.snapshot();
    assert_eq!(snapshot.to_string(), "*##\n*##\n##o\n");
    assert_eq!(snapshot.count(SiteState::Full), 2);
    assert_eq!(snapshot.count(SiteState::Open), 1);
    assert_eq!(snapshot.state(0, 1), None);
    assert_eq!(snapshot.state(3, 3), Some(SiteState::Open));
}

fn open_sequence_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..10).prop_flat_map(|side| {
        let site = (1..=side, 1..=side);
        (Just(side), prop::collection::vec(site, 0..(side * side * 2)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(property_cases(128)))]

    #[test]
    fn full_sites_match_flood_fill((side, sequence) in open_sequence_strategy()) {
        let mut grid = PercolationGrid::new(side).expect("non-zero side");
        let mut open = vec![false; side * side];
        for &(row, column) in &sequence {
            grid.open(row, column).expect("site is in range");
            open[(row - 1) * side + (column - 1)] = true;
        }

        let full = flood_full(side, &open);
        for row in 1..=side {
            for column in 1..=side {
                let site = (row - 1) * side + (column - 1);
                prop_assert_eq!(grid.is_open(row, column).expect("in range"), open[site]);
                prop_assert_eq!(grid.is_full(row, column).expect("in range"), full[site]);
            }
        }
        let bottom_full = full[(side - 1) * side..].iter().any(|&site| site);
        prop_assert_eq!(grid.percolates(), bottom_full);
        prop_assert_eq!(grid.open_sites(), open.iter().filter(|&&site| site).count());
    }

    #[test]
    fn full_and_percolating_states_never_revert((side, sequence) in open_sequence_strategy()) {
        let mut grid = PercolationGrid::new(side).expect("non-zero side");
        let mut previous = grid.snapshot();
        let mut percolated = false;
        for &(row, column) in &sequence {
            grid.open(row, column).expect("site is in range");
            let current = grid.snapshot();
            for r in 1..=side {
                for c in 1..=side {
                    let before = previous.state(r, c);
                    let after = current.state(r, c);
                    if before == Some(SiteState::Full) {
                        prop_assert_eq!(after, Some(SiteState::Full));
                    }
                    if before == Some(SiteState::Open) {
                        prop_assert_ne!(after, Some(SiteState::Blocked));
                    }
                }
            }
            let percolates = grid.percolates();
            prop_assert!(percolates || !percolated);
            percolated = percolates;
            previous = current;
        }
    }
}
