//! Micro-op model.
//!
//! One `MicroOp` is one primitive operation emitted by decode and consumed
//! by the reorder buffer and execution units. Cached decode results are
//! immutable templates; every issue clones a fresh instance so per-issue
//! state never corrupts the cached copy.

use crate::arch::convert::FpConvert;

/// Operation class of a micro-op.
#[derive(Debug, Clone, PartialEq)]
pub enum UopKind {
    /// Register-register integer ALU operation.
    IntAlu {
        /// Destination register.
        dst: u16,
        /// First source register.
        src1: u16,
        /// Second source register.
        src2: u16,
    },
    /// Register-immediate integer ALU operation.
    IntAluImm {
        /// Destination register.
        dst: u16,
        /// Source register.
        src: u16,
        /// Sign-extended immediate.
        imm: i64,
    },
    /// Memory load.
    Load {
        /// Destination register.
        dst: u16,
        /// Base address register.
        base: u16,
        /// Sign-extended displacement.
        offset: i64,
        /// Access width in bytes.
        width: u8,
    },
    /// Memory store.
    Store {
        /// Data source register.
        src: u16,
        /// Base address register.
        base: u16,
        /// Sign-extended displacement.
        offset: i64,
        /// Access width in bytes.
        width: u8,
    },
    /// Conditional branch with a statically known taken-target.
    Branch {
        /// First compare register.
        src1: u16,
        /// Second compare register.
        src2: u16,
        /// Target address when the branch is taken.
        taken_target: u64,
    },
    /// Unconditional jump to a statically known target.
    Jump {
        /// Link register.
        dst: u16,
        /// Jump target address.
        target: u64,
    },
    /// Unconditional jump through a register.
    JumpReg {
        /// Link register.
        dst: u16,
        /// Base address register.
        base: u16,
        /// Sign-extended displacement.
        offset: i64,
    },
    /// System call into the OS handler.
    Syscall,
    /// GPR-to-FP move/convert.
    GprToFp {
        /// Destination FP register (and `fp_dst + 1` under fracture).
        fp_dst: u16,
        /// Source integer register.
        int_src: u16,
        /// Conversion variant.
        cvt: FpConvert,
    },
}

/// One primitive operation emitted by decode.
#[derive(Debug, Clone, PartialEq)]
pub struct MicroOp {
    /// Address of the parent instruction.
    pub addr: u64,
    /// Owning hardware thread.
    pub hw_thr: u32,
    /// Bytes consumed by the parent instruction.
    pub len: u64,
    /// Operation class.
    pub kind: UopKind,
}

impl MicroOp {
    /// Whether this micro-op performs a memory load.
    #[inline]
    pub const fn is_load(&self) -> bool {
        matches!(self.kind, UopKind::Load { .. })
    }

    /// Whether this micro-op performs a memory store.
    #[inline]
    pub const fn is_store(&self) -> bool {
        matches!(self.kind, UopKind::Store { .. })
    }

    /// Whether this micro-op redirects control flow.
    #[inline]
    pub const fn is_control_flow(&self) -> bool {
        matches!(
            self.kind,
            UopKind::Branch { .. } | UopKind::Jump { .. } | UopKind::JumpReg { .. }
        )
    }

    /// Whether this micro-op enters the OS handler.
    #[inline]
    pub const fn is_syscall(&self) -> bool {
        matches!(self.kind, UopKind::Syscall)
    }

    /// Whether this micro-op moves or converts between register files.
    #[inline]
    pub const fn is_convert(&self) -> bool {
        matches!(self.kind, UopKind::GprToFp { .. })
    }
}
