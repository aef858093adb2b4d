//! Bounded factorial.
//!
//! ## Purpose
//!
//! This module computes `n!` for the factorial-sum reductions. The textbook
//! recurrence `f(n) = n * f(n - 1), f(1) = 1` is evaluated as an iterative
//! product with an explicit range check, so stack depth never depends on the
//! argument.
//!
//! ## Key concepts
//!
//! * **Range**: `u64` holds factorials up to `20! = 2_432_902_008_176_640_000`;
//!   `21!` does not fit. Arguments above [`MAX_FACTORIAL_ARG`] are rejected.
//! * **Zero**: The recurrence alone leaves `0!` undefined. [`ZeroPolicy`]
//!   decides: `One` follows the mathematical convention `0! = 1`, `Reject`
//!   restricts the domain to `n >= 1`.
//!
//! ## Invariants
//!
//! * `f(n + 1) == (n + 1) * f(n)` for every accepted `n >= 1`.
//! * Negative arguments are always rejected.

// Internal dependencies
use crate::primitives::errors::NumerixError;

/// Largest argument whose factorial fits in `u64`.
pub const MAX_FACTORIAL_ARG: u32 = 20;

/// Treatment of a zero factorial argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPolicy {
    /// `0! = 1`.
    #[default]
    One,

    /// Zero is an invalid argument.
    Reject,
}

/// Compute `n!` with the default zero policy and the full `u64` range.
#[inline]
pub fn factorial(n: i64) -> Result<u64, NumerixError> {
    bounded_factorial(n, ZeroPolicy::One, MAX_FACTORIAL_ARG)
}

/// Compute `n!` for `n` in `0..=max`, honoring `zero`.
pub fn bounded_factorial(n: i64, zero: ZeroPolicy, max: u32) -> Result<u64, NumerixError> {
    if n < 0 {
        return Err(NumerixError::NegativeArgument(n));
    }
    if n == 0 {
        return match zero {
            ZeroPolicy::One => Ok(1),
            ZeroPolicy::Reject => Err(NumerixError::ZeroArgument),
        };
    }
    if n > i64::from(max) {
        return Err(NumerixError::ArgumentTooLarge { got: n, max });
    }

    let mut acc: u64 = 1;
    for k in 2..=n as u64 {
        acc = acc.checked_mul(k).ok_or(NumerixError::Overflow)?;
    }
    Ok(acc)
}
