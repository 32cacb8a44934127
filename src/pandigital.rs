//! # Pandigital — n-Digit Pandigital Check
//!
//! An integer is n-pandigital when its decimal representation has exactly n
//! digits and uses each of 1..=n once. With the length fixed at n, "contains
//! every digit 1..=n" already rules out duplicates and zeros, but the check
//! below rejects them directly while walking the digits so it can bail early.

/// Largest digit count for which a pandigital number exists (1..=9).
pub const MAX_PANDIGITAL_DIGITS: u32 = 9;

/// Returns true if `number` has exactly `n` decimal digits and uses each of
/// the digits 1..=n exactly once.
pub fn is_n_pandigital(number: u64, n: u32) -> bool {
    if n == 0 || n > MAX_PANDIGITAL_DIGITS || crate::exact_digits(number) != n {
        return false;
    }
    let mut seen: u16 = 0;
    let mut rest = number;
    while rest > 0 {
        let d = (rest % 10) as u32;
        if d == 0 || d > n || seen & (1 << d) != 0 {
            return false;
        }
        seen |= 1 << d;
        rest /= 10;
    }
    // bits 1..=n
    seen == ((1u16 << (n + 1)) - 2)
}
