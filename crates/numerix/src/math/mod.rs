//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the closed-form arithmetic of the crate:
//! - Quadratic discriminant (scalar and elementwise)
//! - Bounded iterative factorial
//!
//! These are pure functions with no I/O and no allocation beyond result vectors.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! System
//!   ↓
//! Algorithms
//!   ↓
//! Math ← You are here
//!   ↓
//! Primitives
//! ```

/// Quadratic discriminant `b^2 - 4ac`.
pub mod discriminant;

/// Bounded factorial and zero-argument policy.
pub mod factorial;
