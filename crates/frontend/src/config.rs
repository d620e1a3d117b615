//! Configuration system for the decode front end.
//!
//! This module defines the structures and enums used to parameterize the
//! decode-cache hierarchy. It provides:
//! 1. **Defaults:** Baseline constants (line width, cache capacities).
//! 2. **Structures:** The front-end configuration consumed at unit
//!    construction.
//! 3. **Enums:** Cache-mode selection (bounded LRU vs. unbounded).
//!
//! Configuration is supplied via JSON from a host driver or use
//! `FrontendConfig::default()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the front end.
mod defaults {
    /// Instruction-cache line width in bytes.
    ///
    /// Matches typical modern processor cache line sizes. Must be a power
    /// of two: line keys are computed by masking the instruction pointer.
    pub const LINE_WIDTH: u64 = 64;

    /// Micro-op cache capacity in entries.
    ///
    /// Entries are full instructions, not micro-ops, though the ratio is
    /// usually 1:1.
    pub const UOP_CACHE_ENTRIES: usize = 128;

    /// Predecode cache capacity in lines.
    ///
    /// The small L0 store of raw line bytes pending decode.
    pub const PREDECODE_CACHE_ENTRIES: usize = 4;
}

/// Decode-cache eviction mode.
///
/// Selects how the predecode and micro-op caches behave at capacity. Decode
/// correctness does not depend on the mode; only hit/miss statistics and
/// memory footprint differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CacheMode {
    /// Bounded caches with least-recently-used eviction.
    ///
    /// More faithful to a real structure's capacity effects.
    #[default]
    #[serde(alias = "LRU")]
    BoundedLru,

    /// Unbounded caches; nothing is ever evicted.
    ///
    /// Trades memory for guaranteed no re-fetch/re-decode cost. Intended
    /// for runs prioritizing simulation speed over capacity fidelity.
    #[serde(alias = "Infinite")]
    Unbounded,
}

/// Front-end configuration consumed at decode-unit construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Instruction-cache line width in bytes (power of two).
    pub line_width: u64,
    /// Micro-op cache capacity in entries.
    pub uop_cache_entries: usize,
    /// Predecode cache capacity in lines.
    pub predecode_cache_entries: usize,
    /// Eviction mode applied to both caches.
    pub cache_mode: CacheMode,
}

impl Default for FrontendConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            line_width: defaults::LINE_WIDTH,
            uop_cache_entries: defaults::UOP_CACHE_ENTRIES,
            predecode_cache_entries: defaults::PREDECODE_CACHE_ENTRIES,
            cache_mode: CacheMode::default(),
        }
    }
}

impl FrontendConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LineWidthNotPowerOfTwo` when the line width is
    /// zero or not a power of two, and `ConfigError::ZeroCapacity` when
    /// either cache is configured with zero entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.line_width.is_power_of_two() {
            return Err(ConfigError::LineWidthNotPowerOfTwo(self.line_width));
        }
        if self.uop_cache_entries == 0 {
            return Err(ConfigError::ZeroCapacity("micro-op cache"));
        }
        if self.predecode_cache_entries == 0 {
            return Err(ConfigError::ZeroCapacity("predecode cache"));
        }
        Ok(())
    }
}
