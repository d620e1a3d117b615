//! Bounded-LRU / unbounded keyed store.
//!
//! Both decode-cache levels are fully associative stores keyed by address:
//! the predecode cache by aligned line key, the micro-op cache by
//! instruction address. In bounded mode an explicit usage order tracks
//! recency (most recent at the front); an insert past capacity evicts from
//! the back. In unbounded mode nothing is ever evicted.

use std::collections::HashMap;

use crate::config::CacheMode;

/// Address-keyed store with a selectable eviction mode.
///
/// A hit or an insert counts as a use for LRU purposes. Decode correctness
/// never depends on the mode; only hit/miss statistics and memory footprint
/// differ.
#[derive(Debug, Clone)]
pub struct CacheStore<V> {
    entries: HashMap<u64, V>,
    /// Usage order for bounded mode; index 0 is most recently used.
    usage: Vec<u64>,
    capacity: usize,
    mode: CacheMode,
}

impl<V> CacheStore<V> {
    /// Creates a store holding at most `capacity` entries in bounded mode.
    ///
    /// The capacity is ignored in unbounded mode.
    pub fn new(capacity: usize, mode: CacheMode) -> Self {
        Self {
            entries: HashMap::new(),
            usage: Vec::new(),
            capacity,
            mode,
        }
    }

    /// Number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is resident, without touching recency.
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Looks up `key`, promoting it to most recently used on a hit.
    pub fn lookup(&mut self, key: u64) -> Option<&V> {
        if self.entries.contains_key(&key) {
            self.touch(key);
            self.entries.get(&key)
        } else {
            None
        }
    }

    /// Inserts `key`, evicting the least-recently-used entry when a bounded
    /// store is at capacity.
    ///
    /// Re-inserting a resident key replaces its value and counts as a use.
    pub fn insert(&mut self, key: u64, value: V) {
        if self.mode == CacheMode::BoundedLru && !self.entries.contains_key(&key) {
            while self.entries.len() >= self.capacity {
                if let Some(victim) = self.usage.pop() {
                    let _ = self.entries.remove(&victim);
                } else {
                    break;
                }
            }
        }
        let _ = self.entries.insert(key, value);
        self.touch(key);
    }

    /// Moves `key` to the front of the usage order.
    fn touch(&mut self, key: u64) {
        if self.mode != CacheMode::BoundedLru {
            return;
        }
        if let Some(pos) = self.usage.iter().position(|&k| k == key) {
            let _ = self.usage.remove(pos);
        }
        self.usage.insert(0, key);
    }
}
