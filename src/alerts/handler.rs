//! Swappable dispatch slot for alert events.
//!
//! Decouples the channel's lifetime from the handler's lifetime: the
//! connection loop holds a [`HandlerCell`] and reads the current handler
//! at dispatch time, so callers can swap handlers without reconnecting.

// Rust guideline compliant 2026-02

use std::sync::{Arc, RwLock};

use crate::alerts::event::RealtimeAlertEvent;

/// Caller-supplied reaction to an accepted alert event.
pub type AlertHandler = dyn Fn(RealtimeAlertEvent) + Send + Sync;

/// Single-slot holder for the current alert handler.
///
/// Clones share the slot; [`set`](Self::set) replaces the handler for all
/// of them. A poisoned lock (handler panicked mid-dispatch) is treated as
/// a dropped dispatch rather than a channel failure.
#[derive(Clone)]
pub struct HandlerCell {
    slot: Arc<RwLock<Box<AlertHandler>>>,
}

impl std::fmt::Debug for HandlerCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerCell").finish_non_exhaustive()
    }
}

impl HandlerCell {
    /// Create a cell holding `handler`.
    #[must_use]
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(RealtimeAlertEvent) + Send + Sync + 'static,
    {
        Self {
            slot: Arc::new(RwLock::new(Box::new(handler))),
        }
    }

    /// Replace the current handler.
    ///
    /// Takes effect for the next dispatched event; the channel keeps its
    /// connection.
    pub fn set<F>(&self, handler: F)
    where
        F: Fn(RealtimeAlertEvent) + Send + Sync + 'static,
    {
        match self.slot.write() {
            Ok(mut slot) => *slot = Box::new(handler),
            Err(poisoned) => *poisoned.into_inner() = Box::new(handler),
        }
    }

    /// Invoke the current handler with `event`.
    pub fn dispatch(&self, event: RealtimeAlertEvent) {
        match self.slot.read() {
            Ok(slot) => slot(event),
            Err(_) => {
                log::warn!("[Alerts] Handler slot poisoned, dropping event");
            }
        }
    }
}
