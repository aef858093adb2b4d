//! Factorial-sum reduction.
//!
//! ## Purpose
//!
//! Sums the factorials of a sequence of elements after decoding each one into
//! an integer argument. Digit strings and integer sequences share this single
//! routine; only the [`Decode`] implementation differs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: The first undecodable element or rejected argument ends
//!   the reduction. No partial sum is returned.
//! * **Checked**: Accumulation uses `checked_add`; exceeding `u64::MAX`
//!   yields [`NumerixError::Overflow`] rather than wrapping.
//!
//! ## Invariants
//!
//! * An empty sequence sums to zero.
//! * The result equals the sum of `bounded_factorial` over the decoded
//!   elements whenever every element is accepted.

// Internal dependencies
use crate::math::factorial::{ZeroPolicy, bounded_factorial};
use crate::primitives::digits::Decode;
use crate::primitives::errors::NumerixError;

/// Sum `n!` over every element of `elements`, decoded by `decoder`.
pub fn sum_factorials<E, I, D>(
    elements: I,
    decoder: &D,
    zero: ZeroPolicy,
    max: u32,
) -> Result<u64, NumerixError>
where
    I: IntoIterator<Item = E>,
    D: Decode<E>,
{
    elements
        .into_iter()
        .enumerate()
        .try_fold(0u64, |sum, (position, element)| {
            let n = decoder.decode(element, position)?;
            let term = bounded_factorial(n, zero, max)?;
            sum.checked_add(term).ok_or(NumerixError::Overflow)
        })
}
