//! Mock byte source.
//!
//! Records issued line fetches and lets tests deliver responses in any
//! order, out of order, duplicated, or after a flush — exercising the
//! request-matching contract.

use std::collections::{HashMap, VecDeque};

use oosim_frontend::mem::{ByteSource, LineFetchResponse, RequestId};

/// One recorded line-fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuedFetch {
    /// Identifier handed back to the loader.
    pub req_id: RequestId,
    /// Requested aligned line address.
    pub line_addr: u64,
    /// Requested line width in bytes.
    pub line_width: u64,
}

/// Byte source backed by a sparse memory image.
///
/// Unwritten bytes read as zero, which the RV64-subset table rejects as a
/// decode fault.
#[derive(Debug, Default)]
pub struct MockByteSource {
    next_req_id: RequestId,
    /// Requests issued and not yet answered by the test.
    pub outstanding: VecDeque<IssuedFetch>,
    image: HashMap<u64, u8>,
}

impl MockByteSource {
    /// Creates an empty byte source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes raw bytes into the memory image.
    pub fn load_image(&mut self, base: u64, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            let _ = self.image.insert(base + i as u64, *b);
        }
    }

    /// Writes one little-endian instruction word into the image.
    pub fn write_word(&mut self, addr: u64, word: u32) {
        self.load_image(addr, &word.to_le_bytes());
    }

    /// Writes a sequence of instruction words starting at `base`.
    pub fn write_program(&mut self, base: u64, words: &[u32]) {
        for (i, w) in words.iter().enumerate() {
            self.write_word(base + (i as u64) * 4, *w);
        }
    }

    /// Builds the response payload for a recorded request.
    pub fn response_for(&self, req: IssuedFetch) -> LineFetchResponse {
        let bytes = (0..req.line_width)
            .map(|i| self.image.get(&(req.line_addr + i)).copied().unwrap_or(0))
            .collect();
        LineFetchResponse {
            req_id: req.req_id,
            addr: req.line_addr,
            bytes,
        }
    }

    /// Removes and returns the oldest outstanding request.
    pub fn pop_request(&mut self) -> Option<IssuedFetch> {
        self.outstanding.pop_front()
    }
}

impl ByteSource for MockByteSource {
    fn issue_line_fetch(&mut self, line_addr: u64, line_width: u64) -> RequestId {
        self.next_req_id += 1;
        let req = IssuedFetch {
            req_id: self.next_req_id,
            line_addr,
            line_width,
        };
        self.outstanding.push_back(req);
        req.req_id
    }
}
