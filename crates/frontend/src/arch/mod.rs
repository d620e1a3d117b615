//! Per-hardware-thread architectural state touched by emitted micro-ops.
//!
//! This module holds the shared state micro-ops consult and mutate:
//! 1. **Register File:** Physical integer and floating-point registers,
//!    including the fracture/merge pairing used by 32-bit-wide FP files.
//! 2. **FP Flags:** Sticky IEEE-style exception flags.
//! 3. **Conversion:** GPR-to-FP move/convert micro-op semantics.

/// GPR-to-FP conversion micro-op semantics.
pub mod convert;

/// Sticky floating-point exception flags.
pub mod fpflags;

/// Physical register file.
pub mod regfile;

pub use convert::{FpConvert, ScalarFormat};
pub use fpflags::FpFlags;
pub use regfile::RegisterFile;
