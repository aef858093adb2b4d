//! Baseline implementations for benchmarking numerix.
//!
//! These follow the textbook definitions literally: unbounded recursion,
//! no validation, and panics on bad input. They exist only as a timing
//! baseline and a behavioral oracle for valid inputs.
//!
//! The comparison against the pure-Python reference (`pure_*` functions)
//! runs outside this workspace, against the built `libnumerixpy` wheel.

/// Recursive factorial bottoming out at 1.
pub fn reference_fac(n: u64) -> u64 {
    if n == 1 {
        return 1;
    }
    reference_fac(n - 1) * n
}

/// `b*b - 4*a*c`.
pub fn reference_calculate_discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Digit-string factorial sum.
pub fn reference_cfactorial_sum(digits: &str) -> u64 {
    digits
        .chars()
        .map(|ch| reference_fac(u64::from(ch.to_digit(10).expect("decimal digit"))))
        .sum()
}

/// Integer-sequence factorial sum.
pub fn reference_ifactorial_sum(values: &[u64]) -> u64 {
    values.iter().map(|&n| reference_fac(n)).sum()
}
