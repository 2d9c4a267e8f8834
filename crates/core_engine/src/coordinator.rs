//! Bridges host window-manager notifications into engine operations.
//!
//! Size-state transitions arrive in two phases: a begin notification that
//! carries the transition kind and the previous geometry, and an end
//! notification with no payload. The coordinator deduces the intended
//! action at begin time, remembers it per window, and executes it at end
//! time. At most one intent is pending per window; a newer begin
//! overwrites an older one.

use std::collections::HashMap;

use tracing::debug;

use crate::engine::PlacementEngine;
use crate::filter::EligibilityFilter;
use crate::host::WorkspaceHost;
use crate::model::{Rect, TransitionKind, WindowId};
use crate::settings::{OverrideModifier, Settings};

/// Action deduced at transition-begin time, executed at transition-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    Place,
    Return,
}

/// Per-window two-phase transition state machine.
#[derive(Debug, Default)]
pub struct EventCoordinator {
    engine: PlacementEngine,
    pending: HashMap<WindowId, PendingAction>,
}

impl EventCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// A size-state transition is starting for `window`.
    ///
    /// With the configured override modifier held, nothing is recorded
    /// and the host's default behavior proceeds unmodified for this one
    /// transition.
    pub fn on_transition_begin<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &H,
        settings: &Settings,
        window: WindowId,
        kind: TransitionKind,
        previous: Rect,
    ) {
        if settings.override_modifier != OverrideModifier::None
            && host.modifier_held(settings.override_modifier)
        {
            debug!(window, "override modifier held, ignoring transition");
            self.pending.remove(&window);
            return;
        }

        let Some(win) = host.window(window) else {
            self.pending.remove(&window);
            return;
        };

        let filter = EligibilityFilter::new(settings);
        let action = if filter.should_place_on_size_change(&win, kind) {
            Some(PendingAction::Place)
        } else if filter.should_return_on_size_change(&win, kind, previous) {
            Some(PendingAction::Return)
        } else {
            None
        };

        match action {
            Some(action) => {
                debug!(window, ?kind, ?action, "transition intent recorded");
                self.pending.insert(window, action);
            }
            // A newer begin supersedes whatever was pending.
            None => {
                self.pending.remove(&window);
            }
        }
    }

    /// The transition that most recently began for `window` has finished;
    /// execute whatever intent was recorded for it.
    pub fn on_transition_end<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        settings: &Settings,
        window: WindowId,
    ) {
        match self.pending.remove(&window) {
            Some(PendingAction::Place) => {
                self.engine.place(host, settings, window);
            }
            Some(PendingAction::Return) => {
                self.engine.restore(host, window);
            }
            None => {}
        }
    }

    /// A window appeared. Windows that map already maximized or
    /// fullscreen never produce a two-phase transition, so they are
    /// placed here.
    pub fn on_window_mapped<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        settings: &Settings,
        window: WindowId,
    ) {
        let Some(win) = host.window(window) else {
            return;
        };
        if win.minimized {
            return;
        }
        if EligibilityFilter::new(settings).is_placement_candidate(&win) {
            self.engine.place(host, settings, window);
        }
    }

    /// A placed window minimized: switch the view back to its home
    /// workspace. The record stays so a later unmaximize still restores.
    pub fn on_window_minimized<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        window: WindowId,
    ) {
        self.pending.remove(&window);
        self.engine.reveal_home(host, window);
    }

    /// A window came back from minimized: a placed window gets its
    /// exclusive workspace re-activated, an unplaced but eligible one is
    /// placed now.
    pub fn on_window_unminimized<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        settings: &Settings,
        window: WindowId,
    ) {
        if self.engine.is_placed(window) {
            self.engine.refocus(host, window);
        } else {
            self.on_window_mapped(host, settings, window);
        }
    }

    /// A window was destroyed. The transition-end notification may never
    /// arrive for it, so any pending intent is discarded here, and the
    /// engine cleans up its record.
    pub fn on_window_destroyed<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        window: WindowId,
    ) {
        self.pending.remove(&window);
        self.engine.handle_window_destroyed(host, window);
    }

    /// Advance one event-loop turn. The host glue calls this once per
    /// turn of its loop.
    pub fn tick<H: WorkspaceHost + ?Sized>(&mut self, host: &mut H) {
        self.engine.tick(host);
    }

    /// Whether an intent is pending for `window`. Exposed for the host
    /// glue's diagnostics.
    pub fn has_pending_transition(&self, window: WindowId) -> bool {
        self.pending.contains_key(&window)
    }
}
