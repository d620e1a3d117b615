//! Decode front end: per-thread decode unit and its cache hierarchy.
//!
//! This module contains the cycle-driven machinery between the byte source
//! and the reorder buffer:
//! 1. **Decode Unit:** The per-hardware-thread per-cycle driver.
//! 2. **Loader:** Two-level decode cache (predecode lines + micro-op
//!    templates) with asynchronous request matching.
//! 3. **Cache Store:** The bounded-LRU / unbounded keyed store both cache
//!    levels are built on.
//! 4. **ROB Queue:** The bounded micro-op queue backpressure comes from.
//! 5. **Collaborators:** Branch-predictor and OS-handler traits.

/// Branch-predictor collaborator trait and the static default.
pub mod bru;

/// Bounded-LRU / unbounded keyed store.
pub mod cache;

/// Per-hardware-thread decode unit.
pub mod decode;

/// Two-level decode cache and request matching.
pub mod loader;

/// OS-call handler collaborator trait and the null default.
pub mod os;

/// Per-thread reorder-buffer queue.
pub mod rob;

pub use bru::{BranchPredictor, StaticPredictor};
pub use decode::{DecodeUnit, StallReason, TickResult};
pub use loader::InstructionLoader;
pub use os::{NullOsHandler, OsHandler};
pub use rob::RobQueue;
