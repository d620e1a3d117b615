//! Two-level decode cache and asynchronous request matching.
//!
//! The loader owns both cache levels and the outstanding-fetch table:
//! 1. **Micro-op cache:** Decoded templates keyed by instruction address;
//!    absorbs repeated decode work for hot instructions.
//! 2. **Predecode cache:** Raw line bytes keyed by aligned line address;
//!    absorbs repeated fetches of the same code region. Lines are immutable
//!    once fetched (self-modifying code is out of scope).
//! 3. **Request matching:** Fetch responses arrive asynchronously and in any
//!    order; they are matched exclusively by request identifier. A
//!    misspeculation flush bumps the flush generation so late responses for
//!    the old fetch stream are recognized as stale and dropped without
//!    touching resident entries.

use std::collections::HashMap;

use tracing::trace;

use crate::config::FrontendConfig;
use crate::front::cache::CacheStore;
use crate::isa::DecodedBlock;
use crate::mem::{ByteSource, LineFetchResponse, RequestId};
use crate::stats::DecodeStats;

/// An issued line fetch that has not been answered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFetch {
    line_addr: u64,
    generation: u64,
}

/// Two-level decode cache with asynchronous fill.
#[derive(Debug)]
pub struct InstructionLoader {
    line_width: u64,
    predecode: CacheStore<Vec<u8>>,
    uop_cache: CacheStore<DecodedBlock>,
    pending: HashMap<RequestId, PendingFetch>,
    generation: u64,
}

impl InstructionLoader {
    /// Creates the loader from a validated configuration.
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            line_width: config.line_width,
            predecode: CacheStore::new(config.predecode_cache_entries, config.cache_mode),
            uop_cache: CacheStore::new(config.uop_cache_entries, config.cache_mode),
            pending: HashMap::new(),
            generation: 0,
        }
    }

    /// Configured line width in bytes.
    #[inline]
    pub fn line_width(&self) -> u64 {
        self.line_width
    }

    /// Aligned line key for an instruction address.
    #[inline]
    pub fn line_key(&self, addr: u64) -> u64 {
        addr & !(self.line_width - 1)
    }

    /// Looks up the micro-op cache, cloning the template on a hit.
    ///
    /// The cached entry is never handed out by reference: per-issue state
    /// must not corrupt the template.
    pub fn lookup_uops(&mut self, addr: u64) -> Option<DecodedBlock> {
        self.uop_cache.lookup(addr).cloned()
    }

    /// Installs a freshly decoded template in the micro-op cache.
    pub fn cache_decoded(&mut self, addr: u64, block: DecodedBlock) {
        self.uop_cache.insert(addr, block);
    }

    /// Looks up the predecode cache by aligned line key.
    pub fn lookup_line(&mut self, line_addr: u64) -> Option<&[u8]> {
        self.predecode.lookup(line_addr).map(Vec::as_slice)
    }

    /// Whether a line is resident in the predecode cache, without touching
    /// recency.
    #[inline]
    pub fn line_resident(&self, line_addr: u64) -> bool {
        self.predecode.contains(line_addr)
    }

    /// Whether an instruction address is resident in the micro-op cache,
    /// without touching recency.
    #[inline]
    pub fn uops_resident(&self, addr: u64) -> bool {
        self.uop_cache.contains(addr)
    }

    /// Whether a current-generation fetch for this line is outstanding.
    pub fn line_pending(&self, line_addr: u64) -> bool {
        self.pending
            .values()
            .any(|p| p.line_addr == line_addr && p.generation == self.generation)
    }

    /// Issues a line fetch unless one is already outstanding for this line.
    ///
    /// Fire-and-forget: the caller yields the cycle and re-probes on the
    /// following tick.
    pub fn request_line(&mut self, line_addr: u64, mem: &mut dyn ByteSource) {
        if self.line_pending(line_addr) {
            return;
        }
        let req_id = mem.issue_line_fetch(line_addr, self.line_width);
        trace!(line_addr = format_args!("{line_addr:#x}"), req_id, "issue line fetch");
        let _ = self.pending.insert(
            req_id,
            PendingFetch {
                line_addr,
                generation: self.generation,
            },
        );
    }

    /// Matches a fetch response against the outstanding-request table.
    ///
    /// On a current-generation match the predecode cache is filled and the
    /// byte-traffic statistic advances. Unknown, duplicate, or
    /// stale-generation responses are discarded without error.
    ///
    /// # Returns
    ///
    /// `true` when the response filled a line.
    pub fn accept_response(&mut self, resp: LineFetchResponse, stats: &mut DecodeStats) -> bool {
        let Some(entry) = self.pending.remove(&resp.req_id) else {
            trace!(req_id = resp.req_id, "dropping unmatched fetch response");
            return false;
        };
        if entry.generation != self.generation {
            trace!(
                req_id = resp.req_id,
                line_addr = format_args!("{:#x}", entry.line_addr),
                "dropping stale fetch response"
            );
            return false;
        }
        debug_assert_eq!(resp.addr, entry.line_addr);

        stats.ins_bytes_loaded += resp.bytes.len() as u64;
        trace!(
            line_addr = format_args!("{:#x}", entry.line_addr),
            bytes = resp.bytes.len(),
            "predecode line fill"
        );
        self.predecode.insert(entry.line_addr, resp.bytes);
        true
    }

    /// Cancels the in-flight fetch stream after a misspeculation.
    ///
    /// Outstanding requests become stale; their eventual responses are
    /// dropped. Resident cache entries survive: prior correct fetch and
    /// decode work remains valid after refetching from the corrected path.
    pub fn flush_pending(&mut self) {
        self.generation += 1;
        trace!(generation = self.generation, "flush in-flight fetch state");
    }
}
