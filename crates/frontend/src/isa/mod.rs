//! Instruction-set capability consumed by the decode front end.
//!
//! The cache hierarchy and the decode-unit driver are written once against
//! the [`IsaDecoder`] trait; each supported instruction set supplies one
//! implementation. This module provides:
//! 1. **Capability Trait:** Decode, register counts, and decoder options.
//! 2. **Micro-op Model:** Cloneable decoded micro-ops with the
//!    classification predicates fencing and IP sequencing rely on.
//! 3. **Decode Table:** A compact RV64-subset implementation.

/// Compact RV64-subset decode table.
pub mod rv64;

/// Micro-op model.
pub mod uop;

use crate::common::DecodeFault;
pub use rv64::Rv64Decoder;
pub use uop::{MicroOp, UopKind};

/// Floating-point register mode of an instruction set.
///
/// FP32 mode forces 64-bit FP values to fracture across two consecutive
/// physical registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpRegMode {
    /// 32-bit-only FP registers; wide values fracture.
    Fp32,
    /// Full 64-bit FP registers.
    Fp64,
}

/// Per-instruction-set decode conventions.
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Floating-point register mode.
    pub fp_reg_mode: FpRegMode,
    /// The architecturally designated ignored-writes register.
    ///
    /// Numeric conversions sourcing this register skip FP flag evaluation.
    pub reg_ignore_writes: u16,
}

/// Result of decoding one instruction: its micro-ops and byte length.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBlock {
    /// Micro-ops in issue order.
    pub uops: Vec<MicroOp>,
    /// Bytes of the encoded instruction consumed at the fetch address.
    pub len: u64,
}

/// Polymorphic capability over instruction-set variants.
///
/// One implementation per supported instruction set; the decode unit owns
/// one instance per hardware thread.
pub trait IsaDecoder {
    /// Human-readable name of the instruction set.
    fn isa_name(&self) -> &'static str;

    /// Number of architectural integer registers.
    fn int_reg_count(&self) -> u16;

    /// Number of architectural floating-point registers.
    fn fp_reg_count(&self) -> u16;

    /// Decode conventions for this instruction set.
    fn options(&self) -> &DecoderOptions;

    /// Decodes one instruction starting at `bytes[0]`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Instruction address (for micro-op stamping and faults).
    /// * `bytes` - Window into the predecode line, starting at the
    ///   instruction.
    /// * `hw_thr` - Hardware thread the micro-ops belong to.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeFault`] when no valid instruction pattern matches.
    fn decode(&self, addr: u64, bytes: &[u8], hw_thr: u32) -> Result<DecodedBlock, DecodeFault>;
}
