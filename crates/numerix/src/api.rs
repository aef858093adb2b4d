//! High-level API for numerix.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the three arithmetic
//! functions, the shell passthrough, and a fluent builder for factorial-sum
//! reductions that need a non-default configuration.
//!
//! ## Design notes
//!
//! * **Thin entry points**: [`cfactorial_sum`] and [`ifactorial_sum`] differ
//!   only in how elements are decoded; both delegate to one reduction.
//! * **Validated**: Builder parameters are checked when `.build()` is called.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FactorialSumBuilder`] via `FactorialSum::builder()`.
//! 2. Chain configuration methods (`.zero_policy()`, `.max_argument()`).
//! 3. Call `.build()` to obtain a validated [`FactorialSum`].

// Internal dependencies
use crate::algorithms::reduction::sum_factorials;
use crate::math::discriminant::discriminant;
use crate::math::factorial::bounded_factorial;
use crate::primitives::digits::{DigitChars, Integers};

// Publicly re-exported types
pub use crate::math::discriminant::discriminants;
pub use crate::math::factorial::{MAX_FACTORIAL_ARG, ZeroPolicy, factorial};
pub use crate::primitives::errors::NumerixError;
#[cfg(feature = "std")]
pub use crate::system::shell::Shell;

// ============================================================================
// Entry Points
// ============================================================================

/// Discriminant `b*b - 4*a*c` in double precision.
#[inline]
pub fn calculate_discriminant(a: f64, b: f64, c: f64) -> f64 {
    discriminant(a, b, c)
}

/// Sum of the factorials of the decimal digits in `digits`.
///
/// `"12345"` gives `1! + 2! + 3! + 4! + 5! = 153`.
pub fn cfactorial_sum(digits: &str) -> Result<u64, NumerixError> {
    FactorialSum::default().chars(digits)
}

/// Sum of the factorials of `values`.
pub fn ifactorial_sum(values: &[i64]) -> Result<u64, NumerixError> {
    FactorialSum::default().ints(values)
}

/// Run `command` through the platform command interpreter and return its exit status.
///
/// The string is passed verbatim. See [`Shell`] for the trust model.
#[cfg(feature = "std")]
pub fn exec_system(command: &str) -> Result<i32, NumerixError> {
    Shell::default().exec(command)
}

// ============================================================================
// Factorial Sum
// ============================================================================

/// Validated configuration for factorial-sum reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorialSum {
    zero_policy: ZeroPolicy,
    max_argument: u32,
}

impl Default for FactorialSum {
    fn default() -> Self {
        Self {
            zero_policy: ZeroPolicy::One,
            max_argument: MAX_FACTORIAL_ARG,
        }
    }
}

impl FactorialSum {
    /// Start configuring a reduction.
    pub fn builder() -> FactorialSumBuilder {
        FactorialSumBuilder::new()
    }

    /// Zero-argument policy in effect.
    pub fn zero_policy(&self) -> ZeroPolicy {
        self.zero_policy
    }

    /// Largest accepted argument.
    pub fn max_argument(&self) -> u32 {
        self.max_argument
    }

    /// `n!` under this configuration.
    pub fn factorial(&self, n: i64) -> Result<u64, NumerixError> {
        bounded_factorial(n, self.zero_policy, self.max_argument)
    }

    /// Sum over the digit characters of `digits`.
    pub fn chars(&self, digits: &str) -> Result<u64, NumerixError> {
        sum_factorials(
            digits.chars(),
            &DigitChars,
            self.zero_policy,
            self.max_argument,
        )
    }

    /// Sum over already-parsed integers.
    pub fn ints(&self, values: &[i64]) -> Result<u64, NumerixError> {
        sum_factorials(values, &Integers, self.zero_policy, self.max_argument)
    }
}

/// Fluent builder for [`FactorialSum`].
#[derive(Debug, Clone, Default)]
pub struct FactorialSumBuilder {
    /// Treatment of zero arguments (default: `0! = 1`).
    pub zero_policy: Option<ZeroPolicy>,

    /// Largest accepted argument (default and ceiling: 20, floor: 1).
    pub max_argument: Option<u32>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FactorialSumBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            zero_policy: None,
            max_argument: None,
            duplicate_param: None,
        }
    }

    /// Set the zero-argument policy.
    pub fn zero_policy(mut self, policy: ZeroPolicy) -> Self {
        if self.zero_policy.is_some() {
            self.duplicate_param = Some("zero_policy");
        }
        self.zero_policy = Some(policy);
        self
    }

    /// Lower the largest accepted argument (`1..=20`).
    pub fn max_argument(mut self, max: u32) -> Self {
        if self.max_argument.is_some() {
            self.duplicate_param = Some("max_argument");
        }
        self.max_argument = Some(max);
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<FactorialSum, NumerixError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(NumerixError::DuplicateParameter { parameter });
        }

        let max_argument = self.max_argument.unwrap_or(MAX_FACTORIAL_ARG);
        if max_argument == 0 || max_argument > MAX_FACTORIAL_ARG {
            return Err(NumerixError::InvalidMaxArgument {
                got: max_argument,
                limit: MAX_FACTORIAL_ARG,
            });
        }

        Ok(FactorialSum {
            zero_policy: self.zero_policy.unwrap_or_default(),
            max_argument,
        })
    }
}
