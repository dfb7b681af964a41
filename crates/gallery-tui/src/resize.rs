//! Resize coalescing
//!
//! Terminals emit a burst of resize events while a window is dragged. Only the
//! last one inside a quiet window is handed to the engine. The debouncer owns
//! no timer: the event loop passes the current instant on every call.

use std::time::{Duration, Instant};

use gallery_core::ResizeEvent;

#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(ResizeEvent, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn from_millis(quiet_ms: u64) -> Self {
        Self::new(Duration::from_millis(quiet_ms))
    }

    /// Record a raw resize signal, replacing any earlier one
    pub fn signal(&mut self, new_viewport_width: f64, now: Instant) {
        self.pending = Some((ResizeEvent { new_viewport_width }, now));
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending signal will be released
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.quiet)
    }

    /// Release the pending signal once the quiet window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<ResizeEvent> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.pending.take().map(|(event, _)| event),
            _ => None,
        }
    }
}
