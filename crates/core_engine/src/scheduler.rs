//! Run-after-N-ticks deferral queue.
//!
//! Immediately after a workspace activation the host's focus subsystem has
//! not settled yet, and a synchronous focus call is unreliable. Focus
//! requests are therefore deferred past the current event-loop turn: the
//! host glue calls the engine's `tick` once per loop turn, and an entry
//! scheduled with N ticks becomes due on the Nth tick after scheduling.

use crate::model::WindowId;

/// Number of ticks focus-and-raise is deferred after a workspace change.
/// One turn is not always enough for the host to settle; two are.
pub const FOCUS_DELAY_TICKS: u8 = 2;

#[derive(Debug)]
struct Entry {
    window: WindowId,
    remaining: u8,
}

/// FIFO deferral queue keyed by window identity.
///
/// At most one entry per window: scheduling again resets the countdown.
#[derive(Debug, Default)]
pub struct DeferQueue {
    entries: Vec<Entry>,
}

impl DeferQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deferred focus for `window`, due after `ticks` ticks.
    pub fn schedule_focus(&mut self, window: WindowId, ticks: u8) {
        self.cancel(window);
        self.entries.push(Entry { window, remaining: ticks.max(1) });
    }

    /// Drop any pending entry for `window`.
    pub fn cancel(&mut self, window: WindowId) {
        self.entries.retain(|entry| entry.window != window);
    }

    /// Whether a deferred focus is pending for `window`.
    pub fn is_pending(&self, window: WindowId) -> bool {
        self.entries.iter().any(|entry| entry.window == window)
    }

    /// Advance one event-loop turn; returns the windows that became due,
    /// in scheduling order.
    pub fn tick(&mut self) -> Vec<WindowId> {
        let mut due = Vec::new();
        self.entries.retain_mut(|entry| {
            entry.remaining -= 1;
            if entry.remaining == 0 {
                due.push(entry.window);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
