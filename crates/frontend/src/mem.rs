//! Byte-source interface to the simulated memory system.
//!
//! The front end consumes instruction bytes through a narrow asynchronous
//! contract: it fires line-fetch requests at the byte source and the host
//! delivers responses later, in any order, exactly once per outstanding
//! request. The transport itself (buses, caches, DRAM models) is external.

/// Identifier for an outstanding line-fetch request.
///
/// Allocated by the byte source when a fetch is issued; response matching
/// keys exclusively on this identifier, never on arrival order.
pub type RequestId = u64;

/// Asynchronous reply to a line-fetch request.
///
/// Delivered by the host to [`DecodeUnit::accept_cache_response`]. Duplicate
/// or post-flush deliveries are tolerated as no-ops.
///
/// [`DecodeUnit::accept_cache_response`]: crate::front::decode::DecodeUnit::accept_cache_response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFetchResponse {
    /// Identifier returned by [`ByteSource::issue_line_fetch`].
    pub req_id: RequestId,
    /// Aligned address of the fetched line.
    pub addr: u64,
    /// Raw payload; one full line of instruction bytes.
    pub bytes: Vec<u8>,
}

/// The simulated memory interface instruction fetches go through.
///
/// Requests are fire-and-forget: the decode unit never blocks on a
/// response. A miss simply yields a no-op cycle and the unit re-checks on
/// the following tick.
pub trait ByteSource {
    /// Issues an asynchronous fetch for the line at `line_addr`.
    ///
    /// # Arguments
    ///
    /// * `line_addr` - Aligned line address (the line key).
    /// * `line_width` - Number of bytes to fetch.
    ///
    /// # Returns
    ///
    /// The request identifier the eventual response will carry.
    fn issue_line_fetch(&mut self, line_addr: u64, line_width: u64) -> RequestId;
}
