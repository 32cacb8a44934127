pub mod pandigital;
pub mod search;
pub mod sieve;

/// Exact decimal digit count. Zero has one digit.
pub fn exact_digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Digit sum shared by every n-pandigital number: 1 + 2 + ... + n.
pub fn pandigital_digit_sum(n: u32) -> u32 {
    n * (n + 1) / 2
}
