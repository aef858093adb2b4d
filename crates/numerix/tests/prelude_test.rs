#![cfg(feature = "std")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude is a one-stop import for the
//! public numerix surface.

use numerix::prelude::*;

/// Test that all prelude imports work correctly.
#[test]
fn test_prelude_imports() {
    assert_eq!(calculate_discriminant(1.0, -3.0, 1.0), 5.0);
    assert_eq!(cfactorial_sum("12345"), Ok(153));
    assert_eq!(ifactorial_sum(&[1, 2, 3, 4, 5]), Ok(153));
    assert_eq!(factorial(5), Ok(120));
    assert_eq!(discriminants(&[1.0], &[2.0], &[1.0]), Ok(vec![0.0]));
    assert_eq!(MAX_FACTORIAL_ARG, 20);
}

/// Test the builder types are reachable.
#[test]
fn test_prelude_builder() {
    let builder: FactorialSumBuilder = FactorialSum::builder().zero_policy(ZeroPolicy::Reject);
    let fs = builder.build().unwrap();
    assert_eq!(fs.ints(&[0]), Err(NumerixError::ZeroArgument));
}

/// Test the shell passthrough is exported.
#[test]
fn test_prelude_shell() {
    assert_eq!(Shell::default().exec("exit 0"), Ok(0));
    assert_eq!(exec_system("exit 0"), Ok(0));
}
