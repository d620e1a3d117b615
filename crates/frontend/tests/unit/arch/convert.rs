//! # GPR-to-FP Conversion Tests
//!
//! Tests for bitwise and numeric conversion semantics: NaN-box fill,
//! fracture routing under an FP32-mode file, flag evaluation, and the
//! ignored-writes exemption.

use oosim_frontend::arch::convert::{FpConvert, ScalarFormat};
use oosim_frontend::arch::fpflags::FpFlags;
use oosim_frontend::arch::regfile::RegisterFile;
use oosim_frontend::isa::{DecoderOptions, FpRegMode};

fn fp64_opts() -> DecoderOptions {
    DecoderOptions {
        fp_reg_mode: FpRegMode::Fp64,
        reg_ignore_writes: 0,
    }
}

fn fp32_opts() -> DecoderOptions {
    DecoderOptions {
        fp_reg_mode: FpRegMode::Fp32,
        reg_ignore_writes: 0,
    }
}

#[test]
fn test_bitwise_32bit_move_nan_boxes_into_wide_register() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    regs.set_int_reg(5, 0xAAAA_BBBB_3F80_0000);

    let cvt = FpConvert {
        src: ScalarFormat::U32,
        dst: ScalarFormat::F32,
        bitwise: true,
    };
    cvt.execute(2, 5, &mut regs, &mut flags, &fp64_opts());

    // Only the low 32 source bits move; the upper half is the box fill.
    assert_eq!(regs.fp_reg(2), 0xFFFF_FFFF_3F80_0000);
    // A bitwise move never evaluates flags.
    assert_eq!(flags, FpFlags::default());
}

#[test]
fn test_bitwise_64bit_move_copies_all_bits() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    let bits = f64::to_bits(-2.5);
    regs.set_int_reg(7, bits);

    let cvt = FpConvert {
        src: ScalarFormat::U64,
        dst: ScalarFormat::F64,
        bitwise: true,
    };
    cvt.execute(3, 7, &mut regs, &mut flags, &fp64_opts());
    assert_eq!(regs.fp_reg(3), bits);
}

#[test]
fn test_bitwise_move_preserves_nan_payload() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    // A signaling-NaN bit pattern must cross unchanged; a numeric path
    // would both canonicalize it and raise invalid.
    regs.set_int_reg(5, 0x7FA0_0001);

    let cvt = FpConvert {
        src: ScalarFormat::U32,
        dst: ScalarFormat::F32,
        bitwise: true,
    };
    cvt.execute(1, 5, &mut regs, &mut flags, &fp64_opts());
    assert_eq!(regs.fp_reg(1) as u32, 0x7FA0_0001);
    assert!(!flags.invalid);
}

#[test]
fn test_numeric_i32_to_f64_is_exact() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    regs.set_int_reg(5, (-5i32) as u32 as u64);

    let cvt = FpConvert {
        src: ScalarFormat::I32,
        dst: ScalarFormat::F64,
        bitwise: false,
    };
    cvt.execute(2, 5, &mut regs, &mut flags, &fp64_opts());

    assert_eq!(f64::from_bits(regs.fp_reg(2)), -5.0);
    assert_eq!(flags, FpFlags::default());
}

#[test]
fn test_numeric_i32_to_f32_nan_boxes() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    regs.set_int_reg(5, 42);

    let cvt = FpConvert {
        src: ScalarFormat::I32,
        dst: ScalarFormat::F32,
        bitwise: false,
    };
    cvt.execute(2, 5, &mut regs, &mut flags, &fp64_opts());

    assert_eq!(regs.fp_reg(2) >> 32, 0xFFFF_FFFF);
    assert_eq!(f32::from_bits(regs.fp_reg(2) as u32), 42.0);
}

#[test]
fn test_numeric_inexact_i64_to_f32_raises_inexact() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    // (1 << 53) + 1 is not representable in f32 (or f64).
    regs.set_int_reg(5, (1u64 << 53) + 1);

    let cvt = FpConvert {
        src: ScalarFormat::I64,
        dst: ScalarFormat::F32,
        bitwise: false,
    };
    cvt.execute(2, 5, &mut regs, &mut flags, &fp64_opts());
    assert!(flags.inexact);
    assert!(!flags.invalid);
    assert!(!flags.overflow);
}

#[test]
fn test_numeric_u64_to_f64_inexact_rounding() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    regs.set_int_reg(6, (1u64 << 53) + 1);

    let cvt = FpConvert {
        src: ScalarFormat::U64,
        dst: ScalarFormat::F64,
        bitwise: false,
    };
    cvt.execute(1, 6, &mut regs, &mut flags, &fp64_opts());
    assert!(flags.inexact);
}

#[test]
fn test_ignored_writes_source_skips_flag_evaluation() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    // Register 0 is the ignored-writes register; even a value that would
    // round must not touch the flags.
    regs.set_int_reg(0, (1u64 << 53) + 1);

    let cvt = FpConvert {
        src: ScalarFormat::I64,
        dst: ScalarFormat::F32,
        bitwise: false,
    };
    cvt.execute(2, 0, &mut regs, &mut flags, &fp64_opts());
    assert_eq!(flags, FpFlags::default());
    // The destination write itself still happens.
    assert!(regs.fp_reg(2) != 0);
}

#[test]
fn test_wide_destination_fractures_under_fp32_mode() {
    let mut regs = RegisterFile::new(32, 32, 4);
    let mut flags = FpFlags::default();
    regs.set_int_reg(5, (-5i64) as u64);

    let cvt = FpConvert {
        src: ScalarFormat::I64,
        dst: ScalarFormat::F64,
        bitwise: false,
    };
    assert!(cvt.fractures(&fp32_opts()));
    cvt.execute(4, 5, &mut regs, &mut flags, &fp32_opts());

    // The double landed split across f4/f5, low half first.
    assert_eq!(f64::from_bits(regs.merge_from_pair(4, 5)), -5.0);
}

#[test]
fn test_narrow_destination_does_not_fracture_under_fp32_mode() {
    let mut regs = RegisterFile::new(32, 32, 4);
    let mut flags = FpFlags::default();
    regs.set_int_reg(5, 42);

    let cvt = FpConvert {
        src: ScalarFormat::I32,
        dst: ScalarFormat::F32,
        bitwise: false,
    };
    assert!(!cvt.fractures(&fp32_opts()));
    cvt.execute(4, 5, &mut regs, &mut flags, &fp32_opts());
    assert_eq!(f32::from_bits(regs.fp_reg(4) as u32), 42.0);
    // The neighbor register is untouched.
    assert_eq!(regs.fp_reg(5), 0);
}

#[test]
#[should_panic(expected = "bitwise conversion with mismatched widths")]
fn test_mismatched_bitwise_widths_panic() {
    let mut regs = RegisterFile::new(32, 32, 8);
    let mut flags = FpFlags::default();
    let cvt = FpConvert {
        src: ScalarFormat::U64,
        dst: ScalarFormat::F32,
        bitwise: true,
    };
    cvt.execute(1, 5, &mut regs, &mut flags, &fp64_opts());
}

#[test]
fn test_flag_checks_classify_results() {
    let mut flags = FpFlags::default();
    flags.check_f32(f32::NAN);
    assert!(flags.invalid);
    flags.check_f32(f32::INFINITY);
    assert!(flags.overflow);
    flags.check_f64(f64::MIN_POSITIVE / 2.0);
    assert!(flags.underflow);
    assert!(!flags.divide_by_zero);

    flags.clear();
    assert_eq!(flags, FpFlags::default());
}

#[test]
fn test_flags_are_sticky_across_operations() {
    let mut flags = FpFlags::default();
    flags.check_f32(f32::NAN);
    // A clean result later does not clear a raised flag.
    flags.check_f32(1.0);
    assert!(flags.invalid);
}
