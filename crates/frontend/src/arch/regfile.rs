//! Physical register file.
//!
//! This module implements the per-thread physical register storage consulted
//! and mutated by emitted micro-ops. It performs the following:
//! 1. **Storage:** Integer registers at 64 bits and floating-point registers
//!    at a configurable width of 4 or 8 bytes per register.
//! 2. **Fracture/Merge:** When the FP file is 32-bit-wide, a 64-bit value is
//!    split across two consecutive physical registers (low half first) and
//!    reconstructed by the inverse merge.
//!
//! Fracture and merge on an 8-byte-wide file indicate a decoder-table bug
//! and fail fast.

/// Physical register file with configurable floating-point register width.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    int_regs: Vec<u64>,
    fp_regs: Vec<u64>,
    fp_width: usize,
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `int_count` - Number of integer registers.
    /// * `fp_count` - Number of floating-point registers.
    /// * `fp_width` - Bytes per floating-point register; must be 4 or 8.
    ///
    /// # Panics
    ///
    /// Panics if `fp_width` is neither 4 nor 8.
    pub fn new(int_count: u16, fp_count: u16, fp_width: usize) -> Self {
        assert!(
            fp_width == 4 || fp_width == 8,
            "fp register width must be 4 or 8 bytes, got {fp_width}"
        );
        Self {
            int_regs: vec![0; int_count as usize],
            fp_regs: vec![0; fp_count as usize],
            fp_width,
        }
    }

    /// Returns the floating-point register width in bytes (4 or 8).
    #[inline]
    pub fn fp_reg_width(&self) -> usize {
        self.fp_width
    }

    /// Reads an integer register.
    #[inline]
    pub fn int_reg(&self, idx: u16) -> u64 {
        self.int_regs[idx as usize]
    }

    /// Writes an integer register.
    #[inline]
    pub fn set_int_reg(&mut self, idx: u16, val: u64) {
        self.int_regs[idx as usize] = val;
    }

    /// Reads a floating-point register as raw bits.
    ///
    /// On a 4-byte-wide file only the low 32 bits are meaningful.
    #[inline]
    pub fn fp_reg(&self, idx: u16) -> u64 {
        self.fp_regs[idx as usize]
    }

    /// Writes a 32-bit raw value to a floating-point register.
    #[inline]
    pub fn set_fp_reg_u32(&mut self, idx: u16, val: u32) {
        self.fp_regs[idx as usize] = u64::from(val);
    }

    /// Writes a 64-bit raw value to a floating-point register.
    ///
    /// # Panics
    ///
    /// Panics on a 4-byte-wide file; wide values must be fractured there.
    #[inline]
    pub fn set_fp_reg_u64(&mut self, idx: u16, val: u64) {
        assert!(
            self.fp_width == 8,
            "64-bit FP register write on a 32-bit-wide file; fracture instead"
        );
        self.fp_regs[idx as usize] = val;
    }

    /// Splits a 64-bit value across two consecutive physical registers.
    ///
    /// The low 32 bits land in `lo`, the high 32 bits in `hi`.
    ///
    /// # Panics
    ///
    /// Panics on an 8-byte-wide file; fracture only applies in FP32 mode.
    pub fn fracture_to_pair(&mut self, lo: u16, hi: u16, value: u64) {
        assert!(
            self.fp_width == 4,
            "fracture attempted on an 8-byte-wide FP register file"
        );
        self.fp_regs[lo as usize] = value & 0xFFFF_FFFF;
        self.fp_regs[hi as usize] = value >> 32;
    }

    /// Reconstructs a 64-bit value from a fractured register pair.
    ///
    /// # Panics
    ///
    /// Panics on an 8-byte-wide file; merge only applies in FP32 mode.
    pub fn merge_from_pair(&self, lo: u16, hi: u16) -> u64 {
        assert!(
            self.fp_width == 4,
            "merge attempted on an 8-byte-wide FP register file"
        );
        (self.fp_regs[hi as usize] << 32) | (self.fp_regs[lo as usize] & 0xFFFF_FFFF)
    }
}
