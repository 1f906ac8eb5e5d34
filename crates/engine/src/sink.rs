//! The event sink collaborator: named timer start/stop pairs around the
//! engine's expensive phases. Not essential for correctness.
//!
//! Diagnostics (DEBUG/WARN messages) go through the `log` crate's
//! facade directly, so the core depends only on the facade, never a
//! concrete logging backend. Timing has no equivalent ecosystem facade
//! crate, so it's modeled here as a small injected trait instead.

/// Named timer start/stop pairs around the expensive phases of
/// `compute_mapping`. The default [`NoopEventSink`] makes this
/// optional; an enclosing instrumentation collaborator can supply its
/// own.
pub trait EventSink {
    fn start(&self, name: &str);
    fn stop(&self, name: &str);
}

/// An [`EventSink`] that does nothing, used when the caller doesn't
/// care about timing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn start(&self, _name: &str) {}
    fn stop(&self, _name: &str) {}
}
