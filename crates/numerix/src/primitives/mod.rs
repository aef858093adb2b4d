//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the input-decoding abstraction
//! shared by the rest of the crate. It has zero internal dependencies
//! within the crate.
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
//! Math
//!   ↓
//! Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Element decoding for factorial-sum inputs.
pub mod digits;
