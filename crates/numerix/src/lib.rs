//! # numerix — native arithmetic and shell passthrough for extension modules
//!
//! A small compute core meant to sit behind a foreign-function boundary
//! (the `libnumerixpy` Python extension and a C ABI). It offers:
//!
//! - the quadratic discriminant `b^2 - 4ac`,
//! - factorial sums over a digit string or an integer sequence,
//! - a passthrough that runs a string through the OS command interpreter.
//!
//! ## Quick Start
//!
//! ```rust
//! use numerix::prelude::*;
//!
//! assert_eq!(calculate_discriminant(1.0, -3.0, 1.0), 5.0);
//! assert_eq!(cfactorial_sum("12345")?, 153);
//! assert_eq!(ifactorial_sum(&[1, 2, 3, 4, 5])?, 153);
//! # Result::<(), NumerixError>::Ok(())
//! ```
//!
//! ### Configured reductions
//!
//! ```rust
//! use numerix::prelude::*;
//!
//! let strict = FactorialSum::builder()
//!     .zero_policy(ZeroPolicy::Reject) // n >= 1 only
//!     .max_argument(12)                // keep every term within u32
//!     .build()?;
//!
//! assert_eq!(strict.ints(&[1, 2, 3])?, 9);
//! assert_eq!(strict.chars("105"), Err(NumerixError::ZeroArgument));
//! # Result::<(), NumerixError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Factorial sums return `Result<u64, NumerixError>`. Invalid input (a
//! non-digit character, a negative argument, an argument above 20) and
//! overflow of the `u64` sum are reported as errors; nothing wraps and nothing
//! recurses without bound. The discriminant never fails.
//!
//! ## Shell passthrough
//!
//! [`exec_system`](api::exec_system) forwards its argument verbatim to
//! `sh -c` (or `cmd /C`). It performs no sanitization: treat it as a
//! trust-the-caller primitive and never feed it untrusted input.
//!
//! ## Minimal Usage (no_std)
//!
//! The arithmetic builds without the standard library. Disable default
//! features to drop `std`, `tracing` and the shell passthrough:
//!
//! ```toml
//! [dependencies]
//! numerix = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors and input decoding.
mod primitives;

// Layer 2: Math - discriminant and bounded factorial.
mod math;

// Layer 3: Algorithms - factorial-sum reduction.
mod algorithms;

// Layer 4: System - shell passthrough.
#[cfg(feature = "std")]
mod system;

// High-level API.
pub mod api;

// Standard numerix prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::{
        FactorialSum, FactorialSumBuilder, MAX_FACTORIAL_ARG, NumerixError, ZeroPolicy,
        calculate_discriminant, cfactorial_sum, discriminants, factorial, ifactorial_sum,
    };
    #[cfg(feature = "std")]
    pub use crate::api::{Shell, exec_system};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    #[cfg(feature = "std")]
    pub mod system {
        pub use crate::system::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
