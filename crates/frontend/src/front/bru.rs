//! Branch-predictor collaborator.
//!
//! The prediction algorithm is external to the front end; the decode unit
//! only consults the predictor for the next instruction pointer at
//! control-flow micro-ops and installs statically known targets.

/// Branch prediction interface consumed by the decode unit.
pub trait BranchPredictor {
    /// Predicts the next instruction pointer for a control-flow
    /// instruction at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the control-flow instruction.
    /// * `fallthrough` - Address of the next sequential instruction.
    ///
    /// # Returns
    ///
    /// The predicted next instruction pointer; `fallthrough` when the
    /// predictor has nothing better.
    fn predict_target(&mut self, addr: u64, fallthrough: u64) -> u64;

    /// Installs a statically known target for the instruction at `addr`.
    fn push_address(&mut self, addr: u64, target: u64);
}

/// Always-not-taken predictor.
///
/// Predicts fallthrough for every control-flow instruction and ignores
/// installed targets. The cheapest baseline; every misprediction is paid
/// for by the misspeculation-recovery path.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates the predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    fn predict_target(&mut self, _addr: u64, fallthrough: u64) -> u64 {
        fallthrough
    }

    fn push_address(&mut self, _addr: u64, _target: u64) {}
}
