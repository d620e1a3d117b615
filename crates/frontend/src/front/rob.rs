//! Per-thread reorder-buffer queue.
//!
//! The enclosing pipeline owns one `RobQueue` per hardware thread; the
//! decode unit holds a shared handle and pushes freshly issued micro-ops
//! into it. A full queue is the sole backpressure signal into decode: the
//! unit stalls the cycle, holds the instruction pointer, and retries.

use crate::isa::uop::MicroOp;

/// Bounded circular queue of in-flight micro-ops.
#[derive(Debug, Clone)]
pub struct RobQueue {
    entries: Vec<Option<MicroOp>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl RobQueue {
    /// Creates a queue with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity);
        entries.resize_with(capacity, || None);
        Self {
            entries,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns the queue capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the queue has no free slot.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.entries.len()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.entries.len() - self.count
    }

    /// Appends a micro-op at the tail.
    ///
    /// # Returns
    ///
    /// `false` when the queue is full; the micro-op is dropped in that case
    /// and the caller must stall instead.
    pub fn push(&mut self, uop: MicroOp) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries[self.tail] = Some(uop);
        self.tail = (self.tail + 1) % self.entries.len();
        self.count += 1;
        true
    }

    /// Removes and returns the micro-op at the head, oldest first.
    pub fn pop(&mut self) -> Option<MicroOp> {
        if self.count == 0 {
            return None;
        }
        let uop = self.entries[self.head].take();
        self.head = (self.head + 1) % self.entries.len();
        self.count -= 1;
        uop
    }

    /// Discards all queued micro-ops.
    pub fn clear(&mut self) {
        for slot in &mut self.entries {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }
}
