#![cfg(feature = "dev")]
//! Tests for the factorial-sum reduction.
//!
//! These tests verify the shared reduction behind both entry points:
//! - Known sums over digit strings and integer sequences
//! - Cross-consistency between the two decodings
//! - Fail-fast behavior and checked accumulation
//!
//! ## Test Organization
//!
//! 1. **Known Sums** - Reference values
//! 2. **Errors** - Invalid elements and overflow
//! 3. **Properties** - Characters vs. parsed integers

use proptest::prelude::*;

use numerix::internals::algorithms::reduction::sum_factorials;
use numerix::internals::math::factorial::{MAX_FACTORIAL_ARG, ZeroPolicy};
use numerix::internals::primitives::digits::{DigitChars, Integers};
use numerix::internals::primitives::errors::NumerixError;

// ============================================================================
// Helper Functions
// ============================================================================

fn sum_chars(s: &str) -> Result<u64, NumerixError> {
    sum_factorials(s.chars(), &DigitChars, ZeroPolicy::One, MAX_FACTORIAL_ARG)
}

fn sum_ints(v: &[i64]) -> Result<u64, NumerixError> {
    sum_factorials(v, &Integers, ZeroPolicy::One, MAX_FACTORIAL_ARG)
}

// ============================================================================
// Known Sum Tests
// ============================================================================

/// Test 1! + 2! + 3! + 4! + 5! = 153 for both decodings.
#[test]
fn test_reduction_known_sum() {
    assert_eq!(sum_chars("12345"), Ok(153));
    assert_eq!(sum_ints(&[1, 2, 3, 4, 5]), Ok(153));
}

/// Test the single-element base case.
#[test]
fn test_reduction_base_case() {
    assert_eq!(sum_chars("1"), Ok(1));
    assert_eq!(sum_ints(&[1]), Ok(1));
}

/// Test empty input sums to zero.
#[test]
fn test_reduction_empty() {
    assert_eq!(sum_chars(""), Ok(0));
    assert_eq!(sum_ints(&[]), Ok(0));
}

/// Test zero digits count as 1 under the default policy.
#[test]
fn test_reduction_zero_digits() {
    assert_eq!(sum_chars("000"), Ok(3));
}

/// Test 145 is a factorion: 1! + 4! + 5! = 145.
#[test]
fn test_reduction_factorion() {
    assert_eq!(sum_chars("145"), Ok(145));
    assert_eq!(sum_chars("40585"), Ok(40585));
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test the first invalid character is reported with its position.
#[test]
fn test_reduction_reports_first_invalid_char() {
    assert_eq!(
        sum_chars("12x4y"),
        Err(NumerixError::InvalidDigit {
            character: 'x',
            position: 2
        })
    );
}

/// Test whitespace is not skipped.
#[test]
fn test_reduction_rejects_whitespace() {
    assert!(matches!(
        sum_chars("1 2"),
        Err(NumerixError::InvalidDigit {
            character: ' ',
            position: 1
        })
    ));
}

/// Test a negative element aborts the reduction.
#[test]
fn test_reduction_negative_element() {
    assert_eq!(
        sum_ints(&[3, -2, 1]),
        Err(NumerixError::NegativeArgument(-2))
    );
}

/// Test the zero policy flows through the reduction.
#[test]
fn test_reduction_zero_policy_reject() {
    let res = sum_factorials("10".chars(), &DigitChars, ZeroPolicy::Reject, 20);
    assert_eq!(res, Err(NumerixError::ZeroArgument));
}

/// Test that accumulation past u64::MAX is reported.
///
/// 20! is about 2.43e18, so eight of them exceed u64::MAX (about 1.84e19).
#[test]
fn test_reduction_sum_overflow() {
    assert_eq!(sum_ints(&[20; 7]), Ok(7 * 2_432_902_008_176_640_000));
    assert_eq!(sum_ints(&[20; 8]), Err(NumerixError::Overflow));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Summing characters equals summing their parsed values.
    #[test]
    fn prop_chars_and_ints_agree(digits in "[0-9]{0,64}") {
        let parsed: Vec<i64> = digits
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .collect();

        prop_assert_eq!(sum_chars(&digits), sum_ints(&parsed));
    }

    /// Any string with a non-digit fails with InvalidDigit.
    #[test]
    fn prop_non_digit_rejected(prefix in "[0-9]{0,8}", bad in "[^0-9]", suffix in "[0-9]{0,8}") {
        let input = format!("{prefix}{bad}{suffix}");
        let is_invalid_digit = matches!(
            sum_chars(&input),
            Err(NumerixError::InvalidDigit { .. })
        );
        prop_assert!(is_invalid_digit);
    }
}
