//! Point-in-time view of a grid's sites.

use std::fmt;

/// Observable state of one site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SiteState {
    /// The site cannot conduct.
    Blocked,
    /// The site is open but not connected to the top row.
    Open,
    /// The site is open and connected to the top row.
    Full,
}

impl SiteState {
    const fn glyph(self) -> char {
        match self {
            Self::Blocked => '#',
            Self::Open => 'o',
            Self::Full => '*',
        }
    }
}

/// Row-major copy of every site state, rendered one grid row per line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridSnapshot {
    side: usize,
    states: Vec<SiteState>,
}

impl GridSnapshot {
    pub(super) fn new(side: usize, states: Vec<SiteState>) -> Self {
        Self { side, states }
    }

    /// Returns the grid dimension `N`.
    #[must_use]
    #[rustfmt::skip]
    pub fn side(&self) -> usize { self.side }

    /// Returns the state at the 1-indexed `(row, column)`, or `None` when the
    /// coordinates fall outside the grid.
    #[must_use]
    pub fn state(&self, row: usize, column: usize) -> Option<SiteState> {
        if !(1..=self.side).contains(&row) || !(1..=self.side).contains(&column) {
            return None;
        }
        self.states
            .get((row - 1) * self.side + (column - 1))
            .copied()
    }

    /// Counts sites in the given state.
    #[must_use]
    pub fn count(&self, state: SiteState) -> usize {
        self.states.iter().filter(|&&site| site == state).count()
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.states.chunks(self.side) {
            for state in row {
                write!(f, "{}", state.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
