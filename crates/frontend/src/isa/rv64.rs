//! Compact RV64-subset decode table.
//!
//! Fixed 4-byte encodings covering integer ALU operations, loads, stores,
//! branches, jumps, ECALL, and the GPR-to-FP move/convert group — enough
//! grammar to exercise every front-end path. Encodings outside the subset
//! raise a decode fault; the pipeline treats that as a trap condition.

use crate::common::DecodeFault;
use crate::isa::uop::{MicroOp, UopKind};
use crate::isa::{DecodedBlock, DecoderOptions, FpRegMode, IsaDecoder};
use crate::arch::convert::{FpConvert, ScalarFormat};

/// Major opcodes of the supported subset.
pub mod opcodes {
    /// Integer loads.
    pub const OP_LOAD: u32 = 0b000_0011;
    /// Register-immediate integer operations.
    pub const OP_IMM: u32 = 0b001_0011;
    /// Add upper immediate to PC.
    pub const OP_AUIPC: u32 = 0b001_0111;
    /// Integer stores.
    pub const OP_STORE: u32 = 0b010_0011;
    /// Register-register integer operations.
    pub const OP_REG: u32 = 0b011_0011;
    /// Load upper immediate.
    pub const OP_LUI: u32 = 0b011_0111;
    /// Conditional branches.
    pub const OP_BRANCH: u32 = 0b110_0011;
    /// Indirect jump-and-link.
    pub const OP_JALR: u32 = 0b110_0111;
    /// Direct jump-and-link.
    pub const OP_JAL: u32 = 0b110_1111;
    /// System instructions (ECALL).
    pub const OP_SYSTEM: u32 = 0b111_0011;
    /// Floating-point operations (the GPR-to-FP group).
    pub const OP_FP: u32 = 0b101_0011;
}

/// funct7 values of the supported GPR-to-FP group.
mod funct7 {
    /// FCVT.S.{W,WU,L,LU} — numeric integer to single.
    pub const FCVT_S_INT: u32 = 0b110_1000;
    /// FCVT.D.{W,WU,L,LU} — numeric integer to double.
    pub const FCVT_D_INT: u32 = 0b110_1001;
    /// FMV.W.X — bitwise 32-bit move.
    pub const FMV_W_X: u32 = 0b111_1000;
    /// FMV.D.X — bitwise 64-bit move.
    pub const FMV_D_X: u32 = 0b111_1001;
}

const fn opcode(inst: u32) -> u32 {
    inst & 0x7F
}

const fn rd(inst: u32) -> u16 {
    ((inst >> 7) & 0x1F) as u16
}

const fn funct3(inst: u32) -> u32 {
    (inst >> 12) & 0x7
}

const fn rs1(inst: u32) -> u16 {
    ((inst >> 15) & 0x1F) as u16
}

const fn rs2(inst: u32) -> u16 {
    ((inst >> 20) & 0x1F) as u16
}

const fn funct7(inst: u32) -> u32 {
    inst >> 25
}

/// Sign-extended I-type immediate.
const fn i_imm(inst: u32) -> i64 {
    ((inst as i32) >> 20) as i64
}

/// Sign-extended S-type immediate.
const fn s_imm(inst: u32) -> i64 {
    let hi = ((inst as i32) >> 25) as i64;
    let lo = ((inst >> 7) & 0x1F) as i64;
    (hi << 5) | lo
}

/// Sign-extended B-type immediate (multiples of two).
const fn b_imm(inst: u32) -> i64 {
    let bit12 = ((inst >> 31) & 1) as i64;
    let bit11 = ((inst >> 7) & 1) as i64;
    let bits10_5 = ((inst >> 25) & 0x3F) as i64;
    let bits4_1 = ((inst >> 8) & 0xF) as i64;
    let imm = (bit12 << 12) | (bit11 << 11) | (bits10_5 << 5) | (bits4_1 << 1);
    (imm << 51) >> 51
}

/// Sign-extended J-type immediate (multiples of two).
const fn j_imm(inst: u32) -> i64 {
    let bit20 = ((inst >> 31) & 1) as i64;
    let bits19_12 = ((inst >> 12) & 0xFF) as i64;
    let bit11 = ((inst >> 20) & 1) as i64;
    let bits10_1 = ((inst >> 21) & 0x3FF) as i64;
    let imm = (bit20 << 20) | (bits19_12 << 12) | (bit11 << 11) | (bits10_1 << 1);
    (imm << 43) >> 43
}

/// Sign-extended U-type immediate.
const fn u_imm(inst: u32) -> i64 {
    ((inst & 0xFFFF_F000) as i32) as i64
}

/// RV64-subset decode table.
///
/// The floating-point register mode is chosen at construction so the same
/// table serves both a full-width FP file and an FP32-mode file (fracture
/// behavior).
#[derive(Debug, Clone)]
pub struct Rv64Decoder {
    options: DecoderOptions,
}

impl Rv64Decoder {
    /// Creates a decode table for the given floating-point register mode.
    ///
    /// The ignored-writes register is `x0`, per the ABI.
    pub fn new(fp_reg_mode: FpRegMode) -> Self {
        Self {
            options: DecoderOptions {
                fp_reg_mode,
                reg_ignore_writes: 0,
            },
        }
    }

    /// Selects the conversion variant for an `OP_FP` encoding, if supported.
    fn fp_convert(inst: u32) -> Option<FpConvert> {
        let int_fmt = |sel: u16| match sel {
            0 => Some(ScalarFormat::I32),
            1 => Some(ScalarFormat::U32),
            2 => Some(ScalarFormat::I64),
            3 => Some(ScalarFormat::U64),
            _ => None,
        };
        match funct7(inst) {
            funct7::FCVT_S_INT => Some(FpConvert {
                src: int_fmt(rs2(inst))?,
                dst: ScalarFormat::F32,
                bitwise: false,
            }),
            funct7::FCVT_D_INT => Some(FpConvert {
                src: int_fmt(rs2(inst))?,
                dst: ScalarFormat::F64,
                bitwise: false,
            }),
            funct7::FMV_W_X if rs2(inst) == 0 && funct3(inst) == 0 => Some(FpConvert {
                src: ScalarFormat::U32,
                dst: ScalarFormat::F32,
                bitwise: true,
            }),
            funct7::FMV_D_X if rs2(inst) == 0 && funct3(inst) == 0 => Some(FpConvert {
                src: ScalarFormat::U64,
                dst: ScalarFormat::F64,
                bitwise: true,
            }),
            _ => None,
        }
    }
}

impl IsaDecoder for Rv64Decoder {
    fn isa_name(&self) -> &'static str {
        "RV64-subset"
    }

    fn int_reg_count(&self) -> u16 {
        32
    }

    fn fp_reg_count(&self) -> u16 {
        32
    }

    fn options(&self) -> &DecoderOptions {
        &self.options
    }

    fn decode(&self, addr: u64, bytes: &[u8], hw_thr: u32) -> Result<DecodedBlock, DecodeFault> {
        if bytes.len() < 4 {
            return Err(DecodeFault { addr, encoding: 0 });
        }
        let inst = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let fault = DecodeFault { addr, encoding: inst };

        let kind = match opcode(inst) {
            opcodes::OP_IMM => UopKind::IntAluImm {
                dst: rd(inst),
                src: rs1(inst),
                imm: i_imm(inst),
            },
            opcodes::OP_REG => UopKind::IntAlu {
                dst: rd(inst),
                src1: rs1(inst),
                src2: rs2(inst),
            },
            opcodes::OP_LUI | opcodes::OP_AUIPC => UopKind::IntAluImm {
                dst: rd(inst),
                src: 0,
                imm: u_imm(inst),
            },
            opcodes::OP_LOAD => {
                let width = match funct3(inst) {
                    0 | 4 => 1,
                    1 | 5 => 2,
                    2 | 6 => 4,
                    3 => 8,
                    _ => return Err(fault),
                };
                UopKind::Load {
                    dst: rd(inst),
                    base: rs1(inst),
                    offset: i_imm(inst),
                    width,
                }
            }
            opcodes::OP_STORE => {
                let width = match funct3(inst) {
                    0 => 1,
                    1 => 2,
                    2 => 4,
                    3 => 8,
                    _ => return Err(fault),
                };
                UopKind::Store {
                    src: rs2(inst),
                    base: rs1(inst),
                    offset: s_imm(inst),
                    width,
                }
            }
            opcodes::OP_BRANCH => {
                // funct3 2 and 3 are reserved encodings.
                if matches!(funct3(inst), 2 | 3) {
                    return Err(fault);
                }
                UopKind::Branch {
                    src1: rs1(inst),
                    src2: rs2(inst),
                    taken_target: addr.wrapping_add_signed(b_imm(inst)),
                }
            }
            opcodes::OP_JAL => UopKind::Jump {
                dst: rd(inst),
                target: addr.wrapping_add_signed(j_imm(inst)),
            },
            opcodes::OP_JALR => {
                if funct3(inst) != 0 {
                    return Err(fault);
                }
                UopKind::JumpReg {
                    dst: rd(inst),
                    base: rs1(inst),
                    offset: i_imm(inst),
                }
            }
            opcodes::OP_SYSTEM => {
                // Only ECALL (all upper fields zero) is in the subset.
                if inst != opcodes::OP_SYSTEM {
                    return Err(fault);
                }
                UopKind::Syscall
            }
            opcodes::OP_FP => {
                let cvt = Self::fp_convert(inst).ok_or(fault)?;
                UopKind::GprToFp {
                    fp_dst: rd(inst),
                    int_src: rs1(inst),
                    cvt,
                }
            }
            _ => return Err(fault),
        };

        Ok(DecodedBlock {
            uops: vec![MicroOp {
                addr,
                hw_thr,
                len: 4,
                kind,
            }],
            len: 4,
        })
    }
}
