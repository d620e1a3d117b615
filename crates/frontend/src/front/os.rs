//! OS-call handler collaborator.
//!
//! System-call emulation is external to the front end; the decode unit only
//! notifies the handler when a syscall micro-op is issued and forwards the
//! thread-local-storage pointer on wiring.

/// OS-call handling interface consumed by the decode unit.
pub trait OsHandler {
    /// Receives the thread-local-storage pointer for the owning thread.
    fn set_tls_pointer(&mut self, tls_ptr: u64);

    /// Notified when a syscall micro-op at `addr` is issued.
    fn handle_syscall(&mut self, hw_thr: u32, addr: u64);
}

/// Handler that records nothing and emulates nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOsHandler;

impl NullOsHandler {
    /// Creates the handler.
    pub const fn new() -> Self {
        Self
    }
}

impl OsHandler for NullOsHandler {
    fn set_tls_pointer(&mut self, _tls_ptr: u64) {}

    fn handle_syscall(&mut self, _hw_thr: u32, _addr: u64) {}
}
