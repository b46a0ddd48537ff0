//! Deterministic workloads shared by the benchmarks.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Random element pairs for union-find benchmarks.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `elements` is zero.
///
/// # Examples
/// ```
/// use percolation_benches::workload::union_pairs;
///
/// let pairs = union_pairs(10, 5, 42).expect("non-zero element count");
/// assert_eq!(pairs.len(), 5);
/// assert!(pairs.iter().all(|&(p, q)| p < 10 && q < 10));
/// ```
pub fn union_pairs(
    elements: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if elements == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "union-find element count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| (rng.gen_range(0..elements), rng.gen_range(0..elements)))
        .collect())
}

/// Every site of a `side`-by-`side` grid as 1-indexed `(row, column)` pairs in
/// a seeded random order.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `side` is zero.
pub fn shuffled_sites(side: usize, seed: u64) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if side == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "grid side",
        });
    }
    let mut sites: Vec<(usize, usize)> = (1..=side)
        .flat_map(|row| (1..=side).map(move |column| (row, column)))
        .collect();
    sites.shuffle(&mut SmallRng::seed_from_u64(seed));
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(7)]
    fn shuffled_sites_cover_the_grid(#[case] side: usize) {
        let mut sites = shuffled_sites(side, 3).expect("non-zero side");
        assert_eq!(sites.len(), side * side);
        sites.sort_unstable();
        sites.dedup();
        assert_eq!(sites.len(), side * side);
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(union_pairs(0, 3, 1).is_err());
        assert!(shuffled_sites(0, 1).is_err());
    }
}
