//! Recording branch predictor.
//!
//! Predicts a fixed per-address target when configured and records every
//! installed target, letting tests observe what decode pushed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use oosim_frontend::front::bru::BranchPredictor;

/// Predictor with scripted targets and a shared log of installs.
#[derive(Debug, Clone, Default)]
pub struct RecordingPredictor {
    /// Scripted predictions by instruction address.
    pub targets: HashMap<u64, u64>,
    /// Log of `(addr, target)` pairs installed by decode.
    pub installed: Rc<RefCell<Vec<(u64, u64)>>>,
}

impl RecordingPredictor {
    /// Creates a predictor with no scripted targets (predicts fallthrough).
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a predicted target for the instruction at `addr`.
    pub fn script(&mut self, addr: u64, target: u64) {
        let _ = self.targets.insert(addr, target);
    }
}

impl BranchPredictor for RecordingPredictor {
    fn predict_target(&mut self, addr: u64, fallthrough: u64) -> u64 {
        self.targets.get(&addr).copied().unwrap_or(fallthrough)
    }

    fn push_address(&mut self, addr: u64, target: u64) {
        self.installed.borrow_mut().push((addr, target));
    }
}
