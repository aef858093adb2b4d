//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the factorial-sum reduction shared by the digit-string
//! and integer-sequence entry points.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! System
//!   ↓
//! Algorithms ← You are here
//!   ↓
//! Math
//!   ↓
//! Primitives
//! ```

/// Factorial-sum reduction over decoded elements.
pub mod reduction;
