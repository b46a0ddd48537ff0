//! Percolation on an `N`-by-`N` grid of sites.
//!
//! Sites are addressed by 1-indexed `(row, column)` pairs and stored row-major
//! at index `(row - 1) * N + (column - 1)`. Two extra union-find elements sit
//! after the sites: a virtual top joined to every opened row-1 site and a
//! virtual bottom joined to every opened row-`N` site, so "is this site full"
//! and "does the grid percolate" are single connectivity queries.

mod snapshot;

pub use self::snapshot::{GridSnapshot, SiteState};

use crate::{
    disjoint_set::{DisjointSet, NoopObserver, SetObserver},
    error::{PercolationError, Result},
};

/// An `N`-by-`N` grid whose sites start blocked and can be opened one at a
/// time.
///
/// # Examples
/// ```
/// use percolation_core::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(3)?;
/// grid.open(1, 3)?;
/// grid.open(2, 3)?;
/// assert!(!grid.percolates());
/// grid.open(3, 3)?;
/// assert!(grid.percolates());
/// assert!(!grid.is_full(3, 1)?);
/// # Ok::<(), percolation_core::PercolationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PercolationGrid<O = NoopObserver> {
    side: usize,
    opened: Vec<bool>,
    open_sites: usize,
    sets: DisjointSet<O>,
    top: usize,
    bottom: usize,
}

impl PercolationGrid {
    /// Creates a `side`-by-`side` grid with every site blocked.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] when `side` is zero or
    /// `side * side + 2` does not fit in `usize`.
    pub fn new(side: usize) -> Result<Self> {
        Self::with_observer(side, NoopObserver)
    }
}

impl<O: SetObserver> PercolationGrid<O> {
    /// Creates a blocked grid whose connectivity structure reports to
    /// `observer`.
    ///
    /// # Errors
    /// Same conditions as [`PercolationGrid::new`].
    pub fn with_observer(side: usize, observer: O) -> Result<Self> {
        let invalid = || PercolationError::InvalidArgument {
            parameter: "side",
            got: side,
        };
        if side == 0 {
            return Err(invalid());
        }
        let sites = side.checked_mul(side).ok_or_else(invalid)?;
        let elements = sites.checked_add(2).ok_or_else(invalid)?;

        Ok(Self {
            side,
            opened: vec![false; sites],
            open_sites: 0,
            sets: DisjointSet::with_observer(elements, observer)?,
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Returns the grid dimension `N`.
    #[must_use]
    #[rustfmt::skip]
    pub fn side(&self) -> usize { self.side }

    /// Returns how many sites have been opened.
    #[must_use]
    #[rustfmt::skip]
    pub fn open_sites(&self) -> usize { self.open_sites }

    /// Returns whether the site at `(row, column)` is open.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when either coordinate lies
    /// outside `1..=N`.
    pub fn is_open(&self, row: usize, column: usize) -> Result<bool> {
        let site = self.index(row, column)?;
        Ok(self.opened[site])
    }

    /// Returns whether the site at `(row, column)` is open and connected to
    /// the top row through open sites.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when either coordinate lies
    /// outside `1..=N`.
    pub fn is_full(&mut self, row: usize, column: usize) -> Result<bool> {
        let site = self.index(row, column)?;
        Ok(self.site_is_full(site))
    }

    /// Opens the site at `(row, column)` and joins it to its open orthogonal
    /// neighbours. Opening an already open site does nothing.
    ///
    /// Row-1 sites are always joined to the virtual top and row-`N` sites to
    /// the virtual bottom, regardless of their neighbours.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when either coordinate lies
    /// outside `1..=N`; the grid is unchanged in that case.
    pub fn open(&mut self, row: usize, column: usize) -> Result<()> {
        let site = self.index(row, column)?;
        if self.opened[site] {
            return Ok(());
        }
        self.opened[site] = true;
        self.open_sites += 1;

        let n = self.side;
        let neighbours = [
            (column > 1).then(|| site - 1),
            (column < n).then(|| site + 1),
            (row > 1).then(|| site - n),
            (row < n).then(|| site + n),
        ];
        for neighbour in neighbours.into_iter().flatten() {
            if self.opened[neighbour] {
                self.sets.merge(site, neighbour);
            }
        }

        if row == 1 {
            self.sets.merge(self.top, site);
        }
        if row == n {
            self.sets.merge(self.bottom, site);
        }
        Ok(())
    }

    /// Returns whether an open path links the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.sets.same_set(self.top, self.bottom)
    }

    /// Captures the state of every site for rendering or inspection.
    ///
    /// # Examples
    /// ```
    /// use percolation_core::{PercolationGrid, SiteState};
    ///
    /// let mut grid = PercolationGrid::new(2)?;
    /// grid.open(2, 1)?;
    /// grid.open(1, 2)?;
    /// let snapshot = grid.snapshot();
    /// assert_eq!(snapshot.state(1, 2), Some(SiteState::Full));
    /// assert_eq!(snapshot.state(2, 1), Some(SiteState::Open));
    /// assert_eq!(snapshot.to_string(), "#*\no#\n");
    /// # Ok::<(), percolation_core::PercolationError>(())
    /// ```
    pub fn snapshot(&mut self) -> GridSnapshot {
        let states = (0..self.opened.len())
            .map(|site| {
                if !self.opened[site] {
                    SiteState::Blocked
                } else if self.site_is_full(site) {
                    SiteState::Full
                } else {
                    SiteState::Open
                }
            })
            .collect();
        GridSnapshot::new(self.side, states)
    }

    /// Returns the installed union-find observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        self.sets.observer()
    }

    fn site_is_full(&mut self, site: usize) -> bool {
        self.opened[site] && self.sets.same_set(site, self.top)
    }

    fn index(&self, row: usize, column: usize) -> Result<usize> {
        self.check_axis("row", row)?;
        self.check_axis("column", column)?;
        Ok((row - 1) * self.side + (column - 1))
    }

    fn check_axis(&self, axis: &'static str, value: usize) -> Result<()> {
        if (1..=self.side).contains(&value) {
            return Ok(());
        }
        Err(PercolationError::OutOfRange {
            axis,
            value,
            lower: 1,
            upper: self.side,
        })
    }
}

#[cfg(test)]
mod tests;
