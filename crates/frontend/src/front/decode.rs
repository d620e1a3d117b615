//! Per-hardware-thread decode unit.
//!
//! The decode unit is driven synchronously by the external scheduler, once
//! per simulated clock. Each tick it attempts to produce micro-ops for the
//! current instruction pointer: consulting the micro-op cache, then the
//! predecode cache, issuing a line fetch on a full miss, applying fencing
//! rules, and pushing results into the thread's ROB queue. It never blocks;
//! a miss yields a stalled cycle and the unit re-checks on the next tick.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::common::{ConfigError, DecodeFault};
use crate::config::FrontendConfig;
use crate::front::bru::BranchPredictor;
use crate::front::loader::InstructionLoader;
use crate::front::os::OsHandler;
use crate::front::rob::RobQueue;
use crate::isa::uop::{MicroOp, UopKind};
use crate::isa::IsaDecoder;
use crate::mem::{ByteSource, LineFetchResponse};
use crate::stats::DecodeStats;

/// Why a tick produced no micro-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallReason {
    /// The thread ROB has no free slot for the decoded block.
    RobFull,
    /// The needed line is not resident; a fetch is in flight.
    FetchPending,
    /// A load or store micro-op is gated by an active fence.
    Fenced,
}

/// Outcome of one decode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Micro-ops were enqueued into the thread ROB.
    Emitted(usize),
    /// No micro-ops this cycle; the instruction pointer is unchanged.
    Stalled(StallReason),
    /// No valid instruction pattern matches the bytes at the instruction
    /// pointer. The pipeline treats this as a trap condition.
    Faulted(DecodeFault),
}

/// Per-hardware-thread decode driver over the two-level decode cache.
pub struct DecodeUnit {
    ip: u64,
    tls_ptr: u64,
    hw_thr: u32,
    core: u32,
    can_issue_loads: bool,
    can_issue_stores: bool,
    loader: InstructionLoader,
    isa: Box<dyn IsaDecoder>,
    branch_predictor: Box<dyn BranchPredictor>,
    os_handler: Box<dyn OsHandler>,
    thread_rob: Option<Rc<RefCell<RobQueue>>>,
    stats: DecodeStats,
}

impl DecodeUnit {
    /// Creates a decode unit owning its collaborators.
    ///
    /// The branch predictor and OS handler are single-ownership handles,
    /// created here and destroyed with the unit.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration is invalid
    /// (non-power-of-two line width, zero capacity).
    pub fn new(
        config: &FrontendConfig,
        isa: Box<dyn IsaDecoder>,
        branch_predictor: Box<dyn BranchPredictor>,
        os_handler: Box<dyn OsHandler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ip: 0,
            tls_ptr: 0,
            hw_thr: 0,
            core: 0,
            can_issue_loads: true,
            can_issue_stores: true,
            loader: InstructionLoader::new(config),
            isa,
            branch_predictor,
            os_handler,
            thread_rob: None,
            stats: DecodeStats::default(),
        })
    }

    /// Current instruction pointer.
    #[inline]
    pub fn instruction_pointer(&self) -> u64 {
        self.ip
    }

    /// Unconditional instruction-pointer write.
    ///
    /// Used for normal sequencing and verified branch targets; in-flight
    /// fetch state is left alone.
    pub fn set_instruction_pointer(&mut self, addr: u64) {
        self.ip = addr;
    }

    /// Redirects the instruction pointer after a detected misspeculation.
    ///
    /// Outstanding fetch requests for the old stream are marked stale so
    /// their eventual responses are dropped rather than cached or issued.
    /// Resident cache entries are not evicted.
    pub fn set_instruction_pointer_after_misspeculate(&mut self, addr: u64) {
        self.ip = addr;
        trace!(new_ip = format_args!("{addr:#x}"), "misspeculate redirect");
        self.loader.flush_pending();
    }

    /// Gates load micro-ops from dispatch.
    pub fn mark_load_fencing(&mut self) {
        self.can_issue_loads = false;
    }

    /// Gates store micro-ops from dispatch.
    pub fn mark_store_fencing(&mut self) {
        self.can_issue_stores = false;
    }

    /// Releases the load gate.
    pub fn clear_load_fencing(&mut self) {
        self.can_issue_loads = true;
    }

    /// Releases the store gate.
    pub fn clear_store_fencing(&mut self) {
        self.can_issue_stores = true;
    }

    /// Gates both loads and stores.
    pub fn mark_fencing(&mut self) {
        self.mark_load_fencing();
        self.mark_store_fencing();
    }

    /// Releases both gates.
    pub fn clear_fencing(&mut self) {
        self.clear_load_fencing();
        self.clear_store_fencing();
    }

    /// Wires the thread ROB queue this unit pushes into.
    ///
    /// The queue is owned by the enclosing pipeline and merely referenced
    /// here.
    pub fn set_thread_rob(&mut self, rob: Rc<RefCell<RobQueue>>) {
        self.thread_rob = Some(rob);
    }

    /// Sets the owning core number.
    pub fn set_core(&mut self, core: u32) {
        self.core = core;
    }

    /// Owning core number.
    #[inline]
    pub fn core(&self) -> u32 {
        self.core
    }

    /// Sets the owning hardware thread.
    pub fn set_hardware_thread(&mut self, hw_thr: u32) {
        self.hw_thr = hw_thr;
    }

    /// Owning hardware thread.
    #[inline]
    pub fn hardware_thread(&self) -> u32 {
        self.hw_thr
    }

    /// Sets the thread-local-storage pointer, forwarding it to the OS
    /// handler.
    pub fn set_thread_local_storage_pointer(&mut self, tls_ptr: u64) {
        self.tls_ptr = tls_ptr;
        self.os_handler.set_tls_pointer(tls_ptr);
    }

    /// Thread-local-storage pointer.
    #[inline]
    pub fn thread_local_storage_pointer(&self) -> u64 {
        self.tls_ptr
    }

    /// Configured instruction-cache line width in bytes.
    #[inline]
    pub fn line_width(&self) -> u64 {
        self.loader.line_width()
    }

    /// Read access to the decode-cache hierarchy.
    pub fn loader(&self) -> &InstructionLoader {
        &self.loader
    }

    /// The owned branch predictor.
    pub fn branch_predictor(&mut self) -> &mut dyn BranchPredictor {
        &mut *self.branch_predictor
    }

    /// The owned OS-call handler.
    pub fn os_handler(&mut self) -> &mut dyn OsHandler {
        &mut *self.os_handler
    }

    /// Live statistics counters.
    #[inline]
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Delivers an asynchronous fetch response.
    ///
    /// Matched responses fill the predecode cache; decode proceeds on the
    /// next tick as a predecode hit. Unmatched or stale responses are
    /// discarded without error.
    ///
    /// # Returns
    ///
    /// `true` when the response was claimed by an outstanding request.
    pub fn accept_cache_response(&mut self, resp: LineFetchResponse) -> bool {
        self.loader.accept_response(resp, &mut self.stats)
    }

    /// Runs one decode cycle.
    ///
    /// # Arguments
    ///
    /// * `cycle` - Current simulated clock, for trace correlation.
    /// * `mem` - Byte source to fire line fetches at on a predecode miss.
    ///
    /// # Panics
    ///
    /// Panics if the unit is ticked before ROB wiring; construction wiring
    /// is part of the host contract.
    pub fn tick(&mut self, cycle: u64, mem: &mut dyn ByteSource) -> TickResult {
        let rob = match &self.thread_rob {
            Some(rob) => Rc::clone(rob),
            None => panic!("decode unit ticked before ROB wiring"),
        };

        // ROB-full is checked before any cache work so a stalled cycle
        // leaves the hierarchy untouched.
        if rob.borrow().is_full() {
            self.stats.uops_delayed_rob_full += 1;
            trace!(cycle, "decode stalled: ROB full");
            return TickResult::Stalled(StallReason::RobFull);
        }

        let block = if let Some(block) = self.loader.lookup_uops(self.ip) {
            self.stats.uop_cache_hits += 1;
            block
        } else {
            let line_key = self.loader.line_key(self.ip);
            let offset = (self.ip - line_key) as usize;
            let window = self
                .loader
                .lookup_line(line_key)
                .map(|line| line[offset..].to_vec());
            match window {
                Some(bytes) => {
                    self.stats.predecode_cache_hits += 1;
                    match self.isa.decode(self.ip, &bytes, self.hw_thr) {
                        Ok(block) => {
                            self.loader.cache_decoded(self.ip, block.clone());
                            block
                        }
                        Err(fault) => {
                            self.stats.decode_faults += 1;
                            trace!(cycle, %fault, "decode fault");
                            return TickResult::Faulted(fault);
                        }
                    }
                }
                None => {
                    self.stats.predecode_cache_misses += 1;
                    self.loader.request_line(line_key, mem);
                    return TickResult::Stalled(StallReason::FetchPending);
                }
            }
        };

        // Fences gate the whole block: a block containing one fenced
        // micro-op stalls entirely, IP held.
        if !self.can_issue_loads && block.uops.iter().any(MicroOp::is_load) {
            trace!(cycle, "decode stalled: load fence");
            return TickResult::Stalled(StallReason::Fenced);
        }
        if !self.can_issue_stores && block.uops.iter().any(MicroOp::is_store) {
            trace!(cycle, "decode stalled: store fence");
            return TickResult::Stalled(StallReason::Fenced);
        }

        if rob.borrow().free_slots() < block.uops.len() {
            self.stats.uops_delayed_rob_full += 1;
            trace!(cycle, "decode stalled: ROB lacks room for block");
            return TickResult::Stalled(StallReason::RobFull);
        }

        let fallthrough = self.ip + block.len;
        let mut next_ip = fallthrough;
        let mut emitted = 0usize;
        {
            let mut rob = rob.borrow_mut();
            for uop in &block.uops {
                match uop.kind {
                    UopKind::Branch { taken_target, .. } => {
                        self.branch_predictor.push_address(uop.addr, taken_target);
                        next_ip = self.branch_predictor.predict_target(uop.addr, fallthrough);
                    }
                    UopKind::Jump { target, .. } => {
                        // Static target: verified, no prediction needed.
                        self.branch_predictor.push_address(uop.addr, target);
                        next_ip = target;
                    }
                    UopKind::JumpReg { .. } => {
                        next_ip = self.branch_predictor.predict_target(uop.addr, fallthrough);
                    }
                    UopKind::Syscall => {
                        self.os_handler.handle_syscall(self.hw_thr, uop.addr);
                    }
                    _ => {}
                }
                let pushed = rob.push(uop.clone());
                debug_assert!(pushed, "free-slot check preceded the push");
                emitted += 1;
            }
        }
        self.stats.uops_generated += emitted as u64;
        trace!(
            cycle,
            ip = format_args!("{:#x}", self.ip),
            emitted,
            next_ip = format_args!("{next_ip:#x}"),
            "decode emitted micro-ops"
        );
        self.ip = next_ip;

        TickResult::Emitted(emitted)
    }
}
