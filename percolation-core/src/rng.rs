//! Per-trial random stream derivation.

use rand::{SeedableRng, rngs::SmallRng};

/// SplitMix64 increment (the 64-bit golden ratio) used to space trial seeds.
const TRIAL_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

#[inline]
pub(crate) fn mix_trial_seed(base_seed: u64, trial: usize) -> u64 {
    splitmix64(base_seed ^ ((trial as u64).wrapping_add(1).wrapping_mul(TRIAL_SEED_SPACING)))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(TRIAL_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Returns the random stream owned by `trial`.
pub(crate) fn trial_rng(base_seed: u64, trial: usize) -> SmallRng {
    SmallRng::seed_from_u64(mix_trial_seed(base_seed, trial))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    #[test]
    fn trial_seeds_are_distinct() {
        let mut seeds: Vec<u64> = (0..256).map(|trial| mix_trial_seed(42, trial)).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 256);
    }

    #[test]
    fn trial_streams_are_reproducible() {
        let draw = || -> Vec<usize> {
            let mut rng = trial_rng(9, 3);
            (0..8).map(|_| rng.gen_range(1..=50)).collect()
        };
        assert_eq!(draw(), draw());
    }
}
