//! Common types shared across the decode front end.
//!
//! This module provides the building blocks the rest of the crate agrees on:
//! 1. **Error Taxonomy:** Construction-time configuration errors and the
//!    decode-fault condition surfaced to the pipeline.

/// Error types for configuration and decode faults.
pub mod error;

pub use error::{ConfigError, DecodeFault};
