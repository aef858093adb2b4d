//! Quadratic discriminant.
//!
//! ## Purpose
//!
//! Computes the raw value `b*b - 4*a*c`. The result is not interpreted as a
//! root count; callers receive whatever IEEE-754 arithmetic produces,
//! including infinities and NaN.
//!
//! ## Invariants
//!
//! * Evaluation order is `(b * b) - ((4 * a) * c)` with no fused multiply-add,
//!   so results are bitwise identical to the naive expression.
//! * The scalar form never fails.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumerixError;

/// Compute the discriminant `b^2 - 4ac` of `a*x^2 + b*x + c`.
#[inline]
pub fn discriminant<T: Float>(a: T, b: T, c: T) -> T {
    // 4 built from ones is exact for every IEEE float width.
    let two = T::one() + T::one();
    let four = two + two;
    b * b - four * a * c
}

/// Elementwise discriminant over three coefficient slices of equal length.
pub fn discriminants<T: Float>(a: &[T], b: &[T], c: &[T]) -> Result<Vec<T>, NumerixError> {
    if a.len() != b.len() || a.len() != c.len() {
        return Err(NumerixError::MismatchedInputs {
            a_len: a.len(),
            b_len: b.len(),
            c_len: c.len(),
        });
    }

    Ok(a
        .iter()
        .zip(b)
        .zip(c)
        .map(|((&a, &b), &c)| discriminant(a, b, c))
        .collect())
}
