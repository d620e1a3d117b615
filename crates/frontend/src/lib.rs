//! Decode front end of a cycle-level out-of-order CPU core simulator.
//!
//! This crate turns raw instruction bytes fetched from a simulated memory
//! hierarchy into micro-op sequences ready for issue into a per-thread
//! reorder buffer (ROB). It provides:
//! 1. **Front end:** Per-hardware-thread decode unit, two-level decode cache
//!    (predecode lines + micro-op templates), ROB queue, and collaborator
//!    traits for branch prediction and OS-call handling.
//! 2. **ISA:** The instruction-set capability trait, the micro-op model, and
//!    a compact RV64-subset decode table.
//! 3. **Arch:** Physical register file (with 32-bit fracture/merge),
//!    floating-point flags, and GPR-to-FP conversion semantics.
//! 4. **Simulation:** Configuration, statistics collection, and the
//!    byte-source interface to the host memory system.

/// Physical register file, FP flags, and conversion semantics.
pub mod arch;
/// Common types and error taxonomy.
pub mod common;
/// Front-end configuration (defaults, cache mode, validation).
pub mod config;
/// Decode unit, decode-cache hierarchy, ROB queue, and collaborator traits.
pub mod front;
/// Instruction-set capability trait, micro-op model, and decode tables.
pub mod isa;
/// Byte-source interface to the simulated memory system.
pub mod mem;
/// Decode statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `FrontendConfig::default()` or deserialize from JSON.
pub use crate::config::FrontendConfig;
/// Per-hardware-thread decode unit; drives the decode-cache hierarchy each cycle.
pub use crate::front::decode::DecodeUnit;
/// Per-thread reorder-buffer queue; the sole backpressure signal into decode.
pub use crate::front::rob::RobQueue;
/// Decode statistics snapshot type.
pub use crate::stats::DecodeStats;
