//! Sticky floating-point exception flags.
//!
//! Shared per-hardware-thread state evaluated by numeric conversion
//! micro-ops. Flags are sticky: once raised they stay raised until the
//! surrounding pipeline clears them.

/// IEEE-style sticky exception flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FpFlags {
    /// Invalid-operation flag (NaN result).
    pub invalid: bool,
    /// Divide-by-zero flag.
    pub divide_by_zero: bool,
    /// Overflow flag (infinite result).
    pub overflow: bool,
    /// Underflow flag (subnormal result).
    pub underflow: bool,
    /// Inexact flag (rounded result).
    pub inexact: bool,
}

impl FpFlags {
    /// Evaluates flags against a 32-bit result.
    pub fn check_f32(&mut self, result: f32) {
        if result.is_nan() {
            self.invalid = true;
        }
        if result.is_infinite() {
            self.overflow = true;
        }
        if result != 0.0 && result.is_subnormal() {
            self.underflow = true;
        }
    }

    /// Evaluates flags against a 64-bit result.
    pub fn check_f64(&mut self, result: f64) {
        if result.is_nan() {
            self.invalid = true;
        }
        if result.is_infinite() {
            self.overflow = true;
        }
        if result != 0.0 && result.is_subnormal() {
            self.underflow = true;
        }
    }

    /// Raises the inexact flag.
    ///
    /// Called by conversions whose result could not represent the source
    /// exactly; only the producing operation can determine this.
    pub fn mark_inexact(&mut self) {
        self.inexact = true;
    }

    /// Clears all flags.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
