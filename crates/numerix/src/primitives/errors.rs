//! Error types for numerix operations.
//!
//! ## Purpose
//!
//! This module defines every failure the native module can report: invalid
//! factorial arguments, result overflow, mismatched array inputs, builder
//! misconfiguration and shell passthrough failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (character and position,
//!   argument and bound).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Invalid numeric input**: Non-digit characters, negative or zero
//!    arguments, arguments beyond the representable factorial range.
//! 2. **Overflow**: The accumulated sum no longer fits in `u64`.
//! 3. **External process failure**: The command interpreter could not be spawned.
//!
//! A non-zero exit status is a value, never an error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numerix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumerixError {
    /// A character in a digit string is not in `'0'..='9'`.
    InvalidDigit {
        /// The rejected character.
        character: char,
        /// Zero-based character index within the input.
        position: usize,
    },

    /// Factorial is undefined for negative arguments.
    NegativeArgument(i64),

    /// Zero was supplied while the zero policy rejects it.
    ZeroArgument,

    /// Argument exceeds the largest factorial representable in the result type.
    ArgumentTooLarge {
        /// The argument provided.
        got: i64,
        /// Largest accepted argument.
        max: u32,
    },

    /// The accumulated sum does not fit in `u64`.
    Overflow,

    /// Configured maximum argument is zero or exceeds what `u64` can hold.
    InvalidMaxArgument {
        /// The configured maximum.
        got: u32,
        /// Hard limit for the result type.
        limit: u32,
    },

    /// Elementwise inputs must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in `a`.
        a_len: usize,
        /// Number of elements in `b`.
        b_len: usize,
        /// Number of elements in `c`.
        c_len: usize,
    },

    /// Command string cannot be handed to the interpreter (e.g. interior NUL).
    InvalidCommand(String),

    /// The command interpreter could not be started.
    Spawn(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NumerixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDigit {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid digit: {character:?} at position {position} (expected '0'..='9')"
                )
            }
            Self::NegativeArgument(n) => {
                write!(f, "Negative argument: {n} (factorial requires n >= 0)")
            }
            Self::ZeroArgument => write!(f, "Zero argument rejected by zero policy"),
            Self::ArgumentTooLarge { got, max } => {
                write!(f, "Argument too large: {got} (must be at most {max})")
            }
            Self::Overflow => write!(f, "Factorial sum overflows u64"),
            Self::InvalidMaxArgument { got, limit } => {
                write!(f, "Invalid max_argument: {got} (must be between 1 and {limit})")
            }
            Self::MismatchedInputs {
                a_len,
                b_len,
                c_len,
            } => {
                write!(
                    f,
                    "Length mismatch: a has {a_len} values, b has {b_len}, c has {c_len}"
                )
            }
            Self::InvalidCommand(msg) => write!(f, "Invalid command: {msg}"),
            Self::Spawn(msg) => write!(f, "Failed to start command interpreter: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NumerixError {}
