//! Error taxonomy for the decode front end.
//!
//! Two conditions are modeled as Rust errors:
//! 1. **Configuration errors:** A capacity violation detected at
//!    construction time. Fatal to initialization; the owning decode unit is
//!    never built.
//! 2. **Decode faults:** The bytes at the current instruction pointer match
//!    no valid encoding. Recorded via statistic and surfaced to the pipeline
//!    as a trap-like tick outcome; the front end attempts no recovery.
//!
//! Transient conditions (cache miss, ROB-full stall, pending fetch) are
//! normal control flow, not errors. Stale fetch responses are silently
//! discarded and carry no error type at all.

use thiserror::Error;

/// Configuration rejected at construction time.
///
/// These indicate an invalid front-end configuration and are fatal to
/// initialization. They never occur at steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The instruction-cache line width is zero or not a power of two.
    ///
    /// Line keys are computed by masking the instruction pointer, which is
    /// only meaningful for power-of-two widths.
    #[error("icache line width must be a non-zero power of two, got {0}")]
    LineWidthNotPowerOfTwo(u64),

    /// A cache was configured with zero entries.
    ///
    /// The associated value names the offending cache.
    #[error("{0} capacity must be non-zero")]
    ZeroCapacity(&'static str),
}

/// No valid instruction pattern matches the bytes at an address.
///
/// The pipeline treats this as a trap condition; handling beyond fault
/// signaling belongs to the OS-call / exception collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no valid instruction encoding at {addr:#x} (encoding {encoding:#010x})")]
pub struct DecodeFault {
    /// Address of the undecodable instruction.
    pub addr: u64,
    /// The offending raw encoding word.
    pub encoding: u32,
}
