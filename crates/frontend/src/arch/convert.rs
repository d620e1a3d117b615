//! GPR-to-FP conversion micro-op semantics.
//!
//! Conversions are a closed tagged set `{source format, destination format,
//! bitwise|numeric}` fixed when the decode table is built, so the per-cycle
//! path never performs runtime type dispatch. Two behaviors matter here:
//! 1. **Bitwise:** Same-width reinterpretation of the source bit pattern;
//!    a width mismatch is a decoder-table bug and fails fast.
//! 2. **Numeric:** Value-preserving cast, followed by flag evaluation on the
//!    result unless the source is the architecturally ignored-writes
//!    register.
//!
//! A 32-bit result landing in an 8-byte-wide FP register gets
//! `0xFFFF_FFFF` in the upper half (NaN-box fill). A 64-bit destination
//! under an FP32-mode file fractures across two consecutive registers
//! instead of writing one wide register.

use crate::arch::fpflags::FpFlags;
use crate::arch::regfile::RegisterFile;
use crate::isa::{DecoderOptions, FpRegMode};

/// NaN-box fill pattern for a 32-bit result in an 8-byte FP register.
const NAN_BOX_UPPER: u64 = 0xFFFF_FFFF_0000_0000;

/// Scalar value format of a conversion source or destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarFormat {
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// IEEE 754 single precision.
    F32,
    /// IEEE 754 double precision.
    F64,
}

impl ScalarFormat {
    /// Width of the format in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    /// Whether the format is a floating-point format.
    #[inline]
    pub const fn is_fp(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

/// One member of the closed GPR-to-FP conversion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpConvert {
    /// Source format read from the integer register.
    pub src: ScalarFormat,
    /// Destination format written to the FP register(s).
    pub dst: ScalarFormat,
    /// Bitwise reinterpretation instead of a numeric cast.
    pub bitwise: bool,
}

impl FpConvert {
    /// Executes the conversion against the register file.
    ///
    /// Reads one integer source register and writes one floating-point
    /// destination register, or two consecutive registers when the
    /// destination is 64 bits wide and the file is in FP32 mode.
    ///
    /// # Arguments
    ///
    /// * `fp_dst` - Destination FP register (and `fp_dst + 1` under fracture).
    /// * `int_src` - Source integer register.
    /// * `regs` - Physical register file.
    /// * `flags` - Sticky FP flags, evaluated by numeric conversions.
    /// * `opts` - Decoder options (FP register mode, ignored-writes register).
    ///
    /// # Panics
    ///
    /// Panics on a mismatched-width bitwise conversion or an unsupported
    /// format pairing; both indicate a decoder-table bug.
    pub fn execute(
        self,
        fp_dst: u16,
        int_src: u16,
        regs: &mut RegisterFile,
        flags: &mut FpFlags,
        opts: &DecoderOptions,
    ) {
        if self.bitwise {
            self.bitwise_convert(fp_dst, int_src, regs, opts);
        } else {
            self.numeric_convert(fp_dst, int_src, regs, flags, opts);
        }
    }

    /// Whether this conversion writes a fractured register pair under `opts`.
    #[inline]
    pub fn fractures(self, opts: &DecoderOptions) -> bool {
        self.dst.width() == 8 && opts.fp_reg_mode == FpRegMode::Fp32
    }

    fn bitwise_convert(self, fp_dst: u16, int_src: u16, regs: &mut RegisterFile, opts: &DecoderOptions) {
        assert!(
            self.src.width() == self.dst.width(),
            "bitwise conversion with mismatched widths: {:?} -> {:?}",
            self.src,
            self.dst
        );
        assert!(!self.src.is_fp() && self.dst.is_fp(), "unsupported bitwise pairing: {self:?}");

        let v = regs.int_reg(int_src);
        let result = if self.dst.width() == 4 { v & 0xFFFF_FFFF } else { v };

        self.write_result(fp_dst, result, regs, opts);
    }

    fn numeric_convert(
        self,
        fp_dst: u16,
        int_src: u16,
        regs: &mut RegisterFile,
        flags: &mut FpFlags,
        opts: &DecoderOptions,
    ) {
        assert!(!self.src.is_fp() && self.dst.is_fp(), "unsupported numeric pairing: {self:?}");

        let raw = regs.int_reg(int_src);

        // Cast through the tagged source format, then check whether the
        // rounded result still represents the source value exactly.
        let result_bits = match self.dst {
            ScalarFormat::F32 => {
                let (result, exact) = match self.src {
                    ScalarFormat::I32 => {
                        let v = raw as u32 as i32;
                        (v as f32, (v as f32) as i64 == i64::from(v))
                    }
                    ScalarFormat::U32 => {
                        let v = raw as u32;
                        (v as f32, (v as f32) as u64 == u64::from(v))
                    }
                    ScalarFormat::I64 => {
                        let v = raw as i64;
                        (v as f32, (v as f32) as i64 == v)
                    }
                    ScalarFormat::U64 => (raw as f32, (raw as f32) as u64 == raw),
                    _ => panic!("unsupported numeric pairing: {self:?}"),
                };
                if !self.ignores_flags(int_src, opts) {
                    flags.check_f32(result);
                    if !exact {
                        flags.mark_inexact();
                    }
                }
                u64::from(result.to_bits())
            }
            ScalarFormat::F64 => {
                let (result, exact) = match self.src {
                    ScalarFormat::I32 => (f64::from(raw as u32 as i32), true),
                    ScalarFormat::U32 => (f64::from(raw as u32), true),
                    ScalarFormat::I64 => {
                        let v = raw as i64;
                        (v as f64, (v as f64) as i64 == v)
                    }
                    ScalarFormat::U64 => (raw as f64, (raw as f64) as u64 == raw),
                    _ => panic!("unsupported numeric pairing: {self:?}"),
                };
                if !self.ignores_flags(int_src, opts) {
                    flags.check_f64(result);
                    if !exact {
                        flags.mark_inexact();
                    }
                }
                result.to_bits()
            }
            _ => panic!("unsupported numeric pairing: {self:?}"),
        };

        self.write_result(fp_dst, result_bits, regs, opts);
    }

    fn ignores_flags(self, int_src: u16, opts: &DecoderOptions) -> bool {
        int_src == opts.reg_ignore_writes
    }

    /// Routes a raw result to the destination register(s).
    fn write_result(self, fp_dst: u16, result: u64, regs: &mut RegisterFile, opts: &DecoderOptions) {
        if self.fractures(opts) {
            regs.fracture_to_pair(fp_dst, fp_dst + 1, result);
        } else if regs.fp_reg_width() == 8 {
            let boxed = if self.dst.width() == 4 {
                NAN_BOX_UPPER | (result & 0xFFFF_FFFF)
            } else {
                result
            };
            regs.set_fp_reg_u64(fp_dst, boxed);
        } else {
            regs.set_fp_reg_u32(fp_dst, result as u32);
        }
    }
}
