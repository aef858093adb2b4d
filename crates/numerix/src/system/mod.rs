//! System-command unit.
//!
//! # Purpose
//!
//! This layer hands a string to the operating system's command interpreter
//! and reports the exit status. It requires the `std` feature.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! System ← You are here
//!   ↓
//! Algorithms
//!   ↓
//! Math
//!   ↓
//! Primitives
//! ```

/// Command interpreter configuration and passthrough execution.
pub mod shell;
