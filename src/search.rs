//! # Search — Descending Pandigital Prime Search
//!
//! Drives the segmented sieve over the pandigital search space and stops at
//! the first pandigital prime it meets.
//!
//! ## Algorithm
//!
//! 1. **Base sieve**: one `BaseSieve` up to isqrt(10^max_digits), built once
//!    and borrowed by every bucket.
//!
//! 2. **Digit classes**: `num_digits` runs from `max_digits` down to 2. A
//!    `num_digits`-pandigital number cannot exceed `num_digits` as leading
//!    digit, so each class is split into leading-digit buckets `i` from
//!    `num_digits` down to 1, covering [i·10^(d−1), (i+1)·10^(d−1) − 1].
//!
//! 3. **Descending scan**: each bucket is sieved and its primes walked from
//!    the top. Both loops run high to low, so the first pandigital prime met
//!    is the largest one.
//!
//! 4. **Digit-sum shortcut** (opt-in): the digits of an n-pandigital number
//!    always sum to n(n+1)/2. When that sum is divisible by 3 the whole class
//!    is divisible by 3, which rules out n ∈ {2, 3, 5, 6, 8, 9}. Skipping
//!    those classes changes nothing but the running time.
//!
//! Bucket bounds come from `u64::pow`, so 10^(d−1) is exact for every class.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::pandigital::{is_n_pandigital, MAX_PANDIGITAL_DIGITS};
use crate::pandigital_digit_sum;
use crate::sieve::{BaseSieve, RangeSieve};

/// Upper bound of the default search space: every 9-digit number is below it.
pub const MAX: u64 = 1_000_000_000;

/// Smallest digit class searched. 1-digit pandigitals ("1") are trivial.
pub const MIN_DIGITS: u32 = 2;

/// Search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest digit class to search (2..=9).
    pub max_digits: u32,
    /// Skip classes whose digit sum n(n+1)/2 is divisible by 3.
    pub skip_divisible_by_three: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_digits: MAX_PANDIGITAL_DIGITS,
            skip_divisible_by_three: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (MIN_DIGITS..=MAX_PANDIGITAL_DIGITS).contains(&self.max_digits),
            "max_digits must be between {} and {}, got {}",
            MIN_DIGITS,
            MAX_PANDIGITAL_DIGITS,
            self.max_digits
        );
        Ok(())
    }

    /// Exclusive upper bound on every candidate: 10^max_digits.
    pub fn max_bound(&self) -> u64 {
        10u64.pow(self.max_digits)
    }
}

/// Result of one search run. Contains no timing data, so two runs with the
/// same config compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// The greatest pandigital prime, if any class produced one.
    pub greatest: Option<u64>,
    /// Digit count of `greatest`.
    pub digits: Option<u32>,
    /// Number of leading-digit buckets sieved.
    pub buckets_sieved: u32,
    /// Number of primes checked for pandigitality.
    pub primes_scanned: u64,
    /// Digit classes skipped by the digit-sum shortcut.
    pub classes_skipped: Vec<u32>,
}

/// Closed bounds of the bucket of `num_digits`-digit numbers with leading
/// digit `lead`: [lead·10^(d−1), (lead+1)·10^(d−1) − 1].
pub fn bucket_bounds(num_digits: u32, lead: u64) -> (u64, u64) {
    debug_assert!(num_digits >= 1 && (1..=9).contains(&lead));
    let place = 10u64.pow(num_digits - 1);
    (lead * place, (lead + 1) * place - 1)
}

/// Whether every `n`-pandigital number is divisible by 3.
pub fn class_divisible_by_three(n: u32) -> bool {
    pandigital_digit_sum(n) % 3 == 0
}

/// Run the search described by `config`.
pub fn search(config: &SearchConfig) -> Result<SearchOutcome> {
    config.validate()?;

    let base = BaseSieve::for_bound(config.max_bound());
    info!(
        max_digits = config.max_digits,
        base_limit = base.limit(),
        base_primes = base.primes().count(),
        skip_divisible_by_three = config.skip_divisible_by_three,
        "pandigital search starting"
    );

    let mut outcome = SearchOutcome {
        greatest: None,
        digits: None,
        buckets_sieved: 0,
        primes_scanned: 0,
        classes_skipped: Vec::new(),
    };

    'classes: for num_digits in (MIN_DIGITS..=config.max_digits).rev() {
        let span = info_span!("digit_class", digits = num_digits);
        let _guard = span.enter();

        if config.skip_divisible_by_three && class_divisible_by_three(num_digits) {
            info!(
                digit_sum = pandigital_digit_sum(num_digits),
                "skipping class: every pandigital is divisible by 3"
            );
            outcome.classes_skipped.push(num_digits);
            continue;
        }

        for lead in (1..=num_digits as u64).rev() {
            let (min, max) = bucket_bounds(num_digits, lead);
            let range = RangeSieve::new(min, max, &base);
            outcome.buckets_sieved += 1;
            debug!(lead, min, max, primes = range.count_primes(), "bucket sieved");

            for candidate in range.primes_descending() {
                outcome.primes_scanned += 1;
                if is_n_pandigital(candidate, num_digits) {
                    info!(prime = candidate, "pandigital prime found");
                    outcome.greatest = Some(candidate);
                    outcome.digits = Some(num_digits);
                    break 'classes;
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    //! # Search Driver Tests
    //!
    //! Bucket bounds are checked for exactness at every class (the one place
    //! floating-point powers would drift). Searches are kept to 7 digits or
    //! less, or use the digit-sum shortcut, so debug builds stay fast; the
    //! full 9-digit scan lives in the ignored CLI test.

    use super::*;

    // ── Bucket Bounds ──────────────────────────────────────────────────

    #[test]
    fn seven_digit_lead_seven_bounds_are_exact() {
        assert_eq!(bucket_bounds(7, 7), (7_000_000, 7_999_999));
    }

    #[test]
    fn bounds_cover_every_class_exactly() {
        for d in 1..=9u32 {
            let place = 10u64.pow(d - 1);
            for lead in 1..=9u64 {
                let (min, max) = bucket_bounds(d, lead);
                assert_eq!(min, lead * place);
                assert_eq!(max - min + 1, place);
                assert_eq!(crate::exact_digits(min), d);
                assert_eq!(crate::exact_digits(max), d);
            }
        }
        assert_eq!(bucket_bounds(9, 9), (900_000_000, 999_999_999));
        assert_eq!(bucket_bounds(2, 1), (10, 19));
    }

    #[test]
    fn largest_bucket_stays_below_max() {
        let (_, max) = bucket_bounds(9, 9);
        assert!(max < MAX);
        assert!(BaseSieve::for_bound(MAX).covers(max));
    }

    // ── Config ─────────────────────────────────────────────────────────

    #[test]
    fn default_config_searches_below_one_billion() {
        let config = SearchConfig::default();
        assert_eq!(config.max_digits, 9);
        assert!(!config.skip_divisible_by_three);
        assert_eq!(config.max_bound(), MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_digits() {
        for bad in [0u32, 1, 10, 20] {
            let config = SearchConfig {
                max_digits: bad,
                ..SearchConfig::default()
            };
            assert!(config.validate().is_err(), "max_digits={} accepted", bad);
            assert!(search(&config).is_err());
        }
    }

    #[test]
    fn divisible_by_three_classes() {
        let divisible: Vec<u32> = (1..=9).filter(|&n| class_divisible_by_three(n)).collect();
        assert_eq!(divisible, vec![2, 3, 5, 6, 8, 9]);
    }

    // ── Search ─────────────────────────────────────────────────────────

    #[test]
    fn seven_digit_search_finds_known_answer() {
        let config = SearchConfig {
            max_digits: 7,
            skip_divisible_by_three: false,
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.greatest, Some(7_652_413));
        assert_eq!(outcome.digits, Some(7));
        // Found in the leading-digit-7 bucket, the first one sieved.
        assert_eq!(outcome.buckets_sieved, 1);
        assert!(outcome.classes_skipped.is_empty());
    }

    #[test]
    fn shortcut_search_matches_known_answer() {
        let config = SearchConfig {
            max_digits: 9,
            skip_divisible_by_three: true,
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.greatest, Some(7_652_413));
        assert_eq!(outcome.classes_skipped, vec![9, 8]);
        assert_eq!(outcome.buckets_sieved, 1);
    }

    /// Largest 4-digit pandigital prime is 4231.
    #[test]
    fn four_digit_search() {
        let config = SearchConfig {
            max_digits: 4,
            skip_divisible_by_three: false,
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.greatest, Some(4231));
        assert_eq!(outcome.digits, Some(4));
    }

    /// Every 2- and 3-digit pandigital is divisible by 3, so nothing is found
    /// and all 2 + 3 buckets are sieved.
    #[test]
    fn three_digit_search_finds_nothing() {
        let config = SearchConfig {
            max_digits: 3,
            skip_divisible_by_three: false,
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.greatest, None);
        assert_eq!(outcome.digits, None);
        assert_eq!(outcome.buckets_sieved, 5);
        assert!(outcome.primes_scanned > 0);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let config = SearchConfig {
            max_digits: 7,
            skip_divisible_by_three: true,
        };
        let first = search(&config).unwrap();
        let second = search(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn outcome_serializes_to_json() {
        let config = SearchConfig {
            max_digits: 4,
            skip_divisible_by_three: true,
        };
        let outcome = search(&config).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["greatest"], 4231);
        assert_eq!(json["digits"], 4);
        // Found in class 4 before classes 3 and 2 are reached.
        assert_eq!(json["classes_skipped"], serde_json::json!([]));
    }
}
