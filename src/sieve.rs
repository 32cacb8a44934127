//! # Sieve — Base and Segmented Sieves of Eratosthenes
//!
//! Primality infrastructure for the pandigital search. Provides:
//!
//! 1. **Base sieve** (`BaseSieve`): a classic byte-per-flag sieve of
//!    Eratosthenes over [0, limit]. Small (isqrt(10^9) + 1 = 31623 entries)
//!    and read on every bucket, so it stays a plain `Vec<bool>`.
//! 2. **Range sieve** (`RangeSieve`): a segmented sieve over a closed window
//!    [min, max], bit-packed into `u64` words. A 10^8-entry bucket costs
//!    12.5 MB instead of 100 MB.
//!
//! ## Algorithm: Segmented Sieve
//!
//! Every composite j <= max has a prime factor p <= sqrt(max). For each base
//! prime p with p² <= max, the first multiple of p inside the window is
//! p·⌈min/p⌉; striking from there up to max in steps of p removes every
//! composite in the window. We start at max(p², p·⌈min/p⌉) so that p itself
//! survives when the window contains it.
//!
//! Complexity: O((max − min) · log log max + π(√max)) time,
//! O((max − min) / 64) words of space per window.
//!
//! ## References
//!
//! - Carter Bays and Richard H. Hudson, "The segmented sieve of Eratosthenes
//!   and primes in arithmetic progressions to 10^12", BIT 17:121–127, 1977.

/// Byte-per-flag sieve of Eratosthenes over [0, limit].
///
/// Index `i` is `true` iff `i` is prime. Immutable once built.
pub struct BaseSieve {
    flags: Vec<bool>,
}

impl BaseSieve {
    /// Build the sieve for every integer in [0, limit].
    pub fn new(limit: u64) -> Self {
        let limit = limit as usize;
        let mut flags = vec![true; limit + 1];
        flags[0] = false;
        if limit >= 1 {
            flags[1] = false;
        }

        let mut i = 2usize;
        while i * i <= limit {
            if flags[i] {
                let mut m = i * i;
                while m <= limit {
                    flags[m] = false;
                    m += i;
                }
            }
            i += 1;
        }
        BaseSieve { flags }
    }

    /// Build the smallest base sieve able to segment any window below `bound`.
    pub fn for_bound(bound: u64) -> Self {
        Self::new(bound.isqrt())
    }

    /// Largest integer covered by this sieve.
    #[inline]
    pub fn limit(&self) -> u64 {
        (self.flags.len() - 1) as u64
    }

    /// Number of entries (limit + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Always false: even `BaseSieve::new(0)` holds the entry for 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns true if `i` is prime. Values past `limit()` return false.
    #[inline]
    pub fn is_prime(&self, i: u64) -> bool {
        self.flags.get(i as usize).copied().unwrap_or(false)
    }

    /// Iterate the primes in [2, limit] in ascending order.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|&(_, &is_prime)| is_prime)
            .map(|(i, _)| i as u64)
    }

    /// Whether every composite up to `max` has a prime factor in this sieve,
    /// i.e. `max < len()²`.
    pub fn covers(&self, max: u64) -> bool {
        let len = self.flags.len() as u64;
        len.checked_mul(len).is_none_or(|sq| max < sq)
    }
}

/// Bit-packed segmented sieve over the closed window [min, max].
///
/// Logical value `j` lives at bit `j - min`: word `(j - min) / 64`, bit
/// position `(j - min) % 64`. A set bit means `j` is prime.
pub struct RangeSieve {
    min: u64,
    max: u64,
    words: Vec<u64>,
    len: usize,
}

impl RangeSieve {
    /// Sieve [min, max] using the primes of `base`.
    ///
    /// Requires `2 <= min <= max` and `base.covers(max)`. Windows that contain
    /// 0 or 1 are not handled: those two values would be reported prime.
    pub fn new(min: u64, max: u64, base: &BaseSieve) -> Self {
        debug_assert!(min <= max, "RangeSieve window is empty: {} > {}", min, max);
        debug_assert!(
            base.covers(max),
            "base sieve (limit {}) too small to segment up to {}",
            base.limit(),
            max
        );

        let mut sieve = Self::all_set(min, max);
        for p in base.primes() {
            if p * p > max {
                break;
            }
            let first = (p * min.div_ceil(p)).max(p * p);
            let mut m = first;
            while m <= max {
                sieve.strike(m);
                m += p;
            }
        }
        sieve
    }

    /// Window with every bit set; padding bits past `len` stay clear.
    fn all_set(min: u64, max: u64) -> Self {
        let len = (max - min + 1) as usize;
        let num_words = len.div_ceil(64);
        let mut words = vec![u64::MAX; num_words];
        let extra = num_words * 64 - len;
        if extra > 0 {
            words[num_words - 1] >>= extra;
        }
        RangeSieve {
            min,
            max,
            words,
            len,
        }
    }

    #[inline]
    fn strike(&mut self, j: u64) {
        let idx = (j - self.min) as usize;
        self.words[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Lowest value in the window.
    #[inline]
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Highest value in the window (inclusive).
    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Number of values in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a window holds at least one value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `j` is prime. Values outside the window return false.
    #[inline]
    pub fn is_prime(&self, j: u64) -> bool {
        if j < self.min || j > self.max {
            return false;
        }
        let idx = (j - self.min) as usize;
        self.words[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    /// Number of primes in the window.
    pub fn count_primes(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate the primes of the window from `max` down to `min`.
    pub fn primes_descending(&self) -> impl Iterator<Item = u64> + '_ {
        let min = self.min;
        self.words
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(wi, &word)| DescendingBits {
                word,
                base: wi * 64,
            })
            .map(move |idx| min + idx as u64)
    }
}

/// Iterator over the set bits of one word, highest first.
struct DescendingBits {
    word: u64,
    base: usize,
}

impl Iterator for DescendingBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let top = 63 - self.word.leading_zeros() as usize;
        self.word &= !(1u64 << top);
        Some(self.base + top)
    }
}
