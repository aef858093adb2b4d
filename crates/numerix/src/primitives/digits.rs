//! Decoding of input elements into factorial arguments.
//!
//! Both factorial-sum entry points share one reduction; they differ only in
//! how an input element becomes an integer. [`Decode`] captures that step.

// Internal dependencies
use crate::primitives::errors::NumerixError;

/// Converts one input element into a signed factorial argument.
///
/// `position` is the element's zero-based index, used for error context.
pub trait Decode<E> {
    /// Decode `element` found at `position`.
    fn decode(&self, element: E, position: usize) -> Result<i64, NumerixError>;
}

/// Decodes ASCII decimal digit characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitChars;

impl Decode<char> for DigitChars {
    #[inline]
    fn decode(&self, element: char, position: usize) -> Result<i64, NumerixError> {
        // `to_digit` also accepts letters for radix > 10, and only ASCII is wanted here.
        match element {
            '0'..='9' => Ok(i64::from(element as u8 - b'0')),
            _ => Err(NumerixError::InvalidDigit {
                character: element,
                position,
            }),
        }
    }
}

/// Passes already-parsed integers through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integers;

impl Decode<i64> for Integers {
    #[inline]
    fn decode(&self, element: i64, _position: usize) -> Result<i64, NumerixError> {
        Ok(element)
    }
}

impl Decode<&i64> for Integers {
    #[inline]
    fn decode(&self, element: &i64, _position: usize) -> Result<i64, NumerixError> {
        Ok(*element)
    }
}
