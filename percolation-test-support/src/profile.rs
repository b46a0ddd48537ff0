//! Environment-driven tuning for property-based suites.
//!
//! Suites ask for a case count with a local default; CI can raise or lower it
//! for every suite at once through `PERCOLATION_PBT_CASES`.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PBT_CASES_ENV_KEY: &str = "PERCOLATION_PBT_CASES";

/// Returns the case count requested through [`PBT_CASES_ENV_KEY`], or
/// `default_cases` when the variable is unset or unusable.
///
/// # Examples
/// ```
/// use percolation_test_support::profile::property_cases;
///
/// assert!(property_cases(64) > 0);
/// ```
#[must_use]
pub fn property_cases(default_cases: u32) -> u32 {
    match env::var(PBT_CASES_ENV_KEY) {
        Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
            tracing::warn!(
                env = PBT_CASES_ENV_KEY,
                raw = %raw,
                reason,
                "invalid property-test case override; using default",
            );
            default_cases
        }),
        Err(_) => default_cases,
    }
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be a positive integer"),
    }
}
