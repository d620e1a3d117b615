//! Decode statistics collection and reporting.
//!
//! This module tracks the monotonic counters exposed by a decode unit:
//! 1. **Cache behavior:** Micro-op cache hits, predecode cache hits/misses.
//! 2. **Decode outcomes:** Micro-ops generated and decode faults.
//! 3. **Traffic and backpressure:** Bytes loaded from the byte source and
//!    cycles where a full ROB stalled decode.
//!
//! Counters are owned by the decode unit (no process-wide mutable state) and
//! never reset during a run; the surrounding telemetry collaborator takes
//! snapshots via [`DecodeStats::snapshot`].

/// Decode statistics structure tracking all front-end counters.
///
/// All counters are monotonic for the lifetime of the owning decode unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Times the micro-op cache was hit when decoding an instruction.
    pub uop_cache_hits: u64,
    /// Times the predecode cache was hit when decoding an instruction.
    pub predecode_cache_hits: u64,
    /// Times the predecode cache missed, forcing a load from the
    /// instruction byte source.
    pub predecode_cache_misses: u64,
    /// Times the decode operation failed to generate valid micro-ops.
    pub decode_faults: u64,
    /// Bytes loaded from the byte source for decode operations.
    pub ins_bytes_loaded: u64,
    /// Micro-ops generated and transferred to the pipeline for execution.
    pub uops_generated: u64,
    /// Cycles where a micro-op could not be added to the ROB because it
    /// was full.
    pub uops_delayed_rob_full: u64,
}

impl DecodeStats {
    /// Returns a point-in-time copy of the counters.
    ///
    /// The snapshot is detached from the live counters; exporting it to a
    /// telemetry collaborator cannot perturb the run.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Prints all counters to stdout in a fixed-width report.
    pub fn print(&self) {
        let uop_lookups = self.uop_cache_hits + self.predecode_cache_hits + self.predecode_cache_misses;
        let uop_rate = if uop_lookups == 0 {
            0.0
        } else {
            (self.uop_cache_hits as f64 / uop_lookups as f64) * 100.0
        };
        let pre_lookups = self.predecode_cache_hits + self.predecode_cache_misses;
        let pre_rate = if pre_lookups == 0 {
            0.0
        } else {
            (self.predecode_cache_hits as f64 / pre_lookups as f64) * 100.0
        };
        println!("==========================================================");
        println!("DECODE FRONT-END STATISTICS");
        println!("==========================================================");
        println!("uop_cache_hit            {}", self.uop_cache_hits);
        println!("predecode_cache_hit      {}", self.predecode_cache_hits);
        println!("predecode_cache_miss     {}", self.predecode_cache_misses);
        println!("uop_cache_hit_rate       {:.2}%", uop_rate);
        println!("predecode_hit_rate       {:.2}%", pre_rate);
        println!("decode_faults            {}", self.decode_faults);
        println!("ins_bytes_loaded         {}", self.ins_bytes_loaded);
        println!("uops_generated           {}", self.uops_generated);
        println!("uop_delayed_rob_full     {}", self.uops_delayed_rob_full);
        println!("==========================================================");
    }
}
