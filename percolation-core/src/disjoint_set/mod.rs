//! Weighted union-find with aggressive path compression.
//!
//! Elements are dense indices `0..len`. Each set is a tree stored in a parent
//! array; a self-parented element is the root and canonical identifier of its
//! set. Unions attach the smaller tree beneath the larger one and lookups
//! shorten the paths they traverse, keeping both operations amortised
//! near-constant.

mod observer;

pub use self::observer::{NoopObserver, SetObserver, TracingObserver};

use crate::error::{PercolationError, Result};

/// Partition of `len` elements into disjoint sets.
///
/// # Examples
/// ```
/// use percolation_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4)?;
/// assert!(sets.union(0, 1)?);
/// assert!(sets.connected(1, 0)?);
/// assert!(!sets.connected(0, 3)?);
/// assert_eq!(sets.components(), 3);
/// # Ok::<(), percolation_core::PercolationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<O = NoopObserver> {
    parent: Vec<usize>,
    /// Subtree size, meaningful only at roots.
    size: Vec<usize>,
    components: usize,
    observer: O,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        Self::with_observer(len, NoopObserver)
    }
}

impl<O: SetObserver> DisjointSet<O> {
    /// Creates `len` singleton sets reporting to `observer`.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidArgument`] when `len` is zero.
    ///
    /// # Examples
    /// ```
    /// use percolation_core::{DisjointSet, TracingObserver};
    ///
    /// let mut sets = DisjointSet::with_observer(3, TracingObserver)?;
    /// sets.union(0, 2)?;
    /// assert_eq!(sets.find(2)?, 0);
    /// # Ok::<(), percolation_core::PercolationError>(())
    /// ```
    pub fn with_observer(len: usize, observer: O) -> Result<Self> {
        if len == 0 {
            return Err(PercolationError::InvalidArgument {
                parameter: "len",
                got: len,
            });
        }

        Ok(Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
            observer,
        })
    }

    /// Returns the number of elements partitioned by this structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `false`; construction rejects empty structures.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently present.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the installed observer.
    #[must_use]
    #[rustfmt::skip]
    pub fn observer(&self) -> &O { &self.observer }

    /// Consumes the structure and returns its observer.
    #[must_use]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Returns the root of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.check(element)?;
        Ok(self.root(element))
    }

    /// Merges the sets containing `p` and `q`.
    ///
    /// The root of the smaller tree is attached beneath the root of the larger
    /// one; ties keep `p`'s root. Returns `true` when two distinct sets were
    /// merged and `false` when `p` and `q` were already connected.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when either element is invalid.
    /// The partition is left untouched in that case.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.merge(p, q))
    }

    /// Returns `true` when `p` and `q` belong to the same set.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when either element is invalid.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.same_set(p, q))
    }

    /// Returns the number of elements in the set containing `element`.
    ///
    /// # Errors
    /// Returns [`PercolationError::OutOfRange`] when `element >= len`.
    pub fn set_size(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }

    pub(crate) fn same_set(&mut self, p: usize, q: usize) -> bool {
        self.root(p) == self.root(q)
    }

    pub(crate) fn merge(&mut self, p: usize, q: usize) -> bool {
        let p_root = self.root(p);
        let q_root = self.root(q);
        if p_root == q_root {
            return false;
        }

        let (survivor, absorbed) = if self.size[p_root] >= self.size[q_root] {
            (p_root, q_root)
        } else {
            (q_root, p_root)
        };

        self.parent[absorbed] = survivor;
        self.size[survivor] += self.size[absorbed];
        self.components -= 1;
        self.observer.merged(survivor, absorbed, self.size[survivor]);
        true
    }

    /// Walks to the root, pointing every visited element at the element three
    /// links above it (clamped at the root).
    pub(crate) fn root(&mut self, element: usize) -> usize {
        let mut current = element;
        loop {
            let parent = self.parent[current];
            if parent == current {
                self.observer.root_found(element, current);
                return current;
            }

            let skip = self.parent[self.parent[parent]];
            self.parent[current] = skip;
            current = parent;
        }
    }

    fn check(&self, element: usize) -> Result<()> {
        if element < self.parent.len() {
            return Ok(());
        }
        Err(PercolationError::OutOfRange {
            axis: "element",
            value: element,
            lower: 0,
            upper: self.parent.len() - 1,
        })
    }
}
