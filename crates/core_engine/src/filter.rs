//! Eligibility predicates for automatic placement.
//!
//! Pure functions of a window snapshot plus settings; no mutation and no
//! history beyond the single previous-geometry argument the caller
//! supplies for unmaximize transitions.

use crate::model::{Rect, TransitionKind, WindowKind, WindowSnapshot};
use crate::settings::{FilterMode, Settings};

/// Suffix stripped from application identities before matching. Desktop
/// environments commonly report identities as `org.example.App.desktop`.
const APP_ID_SUFFIX: &str = ".desktop";

/// Normalize an application identity for filter-list matching:
/// lowercase, with the well-known `.desktop` suffix stripped.
pub fn normalize_app_id(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match lower.strip_suffix(APP_ID_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Borrowing view over [`Settings`] exposing the eligibility predicates.
pub struct EligibilityFilter<'a> {
    settings: &'a Settings,
}

impl<'a> EligibilityFilter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Whether a window qualifies for automatic placement at all: normal
    /// type, not pinned to all workspaces, and passing the application
    /// identity filter.
    pub fn is_managed_window(&self, window: &WindowSnapshot) -> bool {
        window.kind == WindowKind::Normal
            && !window.on_all_workspaces
            && self.app_identity_allowed(window.app_id.as_deref())
    }

    /// Application identity check.
    ///
    /// Blacklist mode fails open: a window whose identity cannot be
    /// determined is allowed. Whitelist mode fails closed: it requires a
    /// determinable identity present in the list, and an empty list
    /// rejects everything.
    fn app_identity_allowed(&self, app_id: Option<&str>) -> bool {
        let filter = &self.settings.filter;
        match filter.mode {
            FilterMode::Blacklist => match app_id {
                Some(id) => !filter.blacklist.contains(&normalize_app_id(id)),
                None => true,
            },
            FilterMode::Whitelist => match app_id {
                Some(id) => filter.whitelist.contains(&normalize_app_id(id)),
                None => false,
            },
        }
    }

    /// Whether a size-change transition should place the window.
    pub fn should_place_on_size_change(
        &self,
        window: &WindowSnapshot,
        kind: TransitionKind,
    ) -> bool {
        if !self.is_managed_window(window) {
            return false;
        }
        match kind {
            TransitionKind::Maximize => self.settings.trigger_on_maximize && window.maximized,
            TransitionKind::Fullscreen => self.settings.trigger_on_fullscreen,
            _ => false,
        }
    }

    /// Whether a size-change transition should return the window home.
    ///
    /// For unmaximize, the previous geometry must exactly equal the
    /// window's current work area: that equality is what distinguishes a
    /// real restore from an unmaximize-to-same-size no-op. For fullscreen
    /// exit, the return is suppressed while the window is still maximized
    /// (it has not left managed state yet).
    pub fn should_return_on_size_change(
        &self,
        window: &WindowSnapshot,
        kind: TransitionKind,
        previous: Rect,
    ) -> bool {
        if !self.is_managed_window(window) {
            return false;
        }
        match kind {
            TransitionKind::Unmaximize => {
                self.settings.trigger_on_maximize && window.work_area == previous
            }
            TransitionKind::Unfullscreen => {
                self.settings.trigger_on_fullscreen
                    && (!self.settings.trigger_on_maximize || !window.maximized)
            }
            _ => false,
        }
    }

    /// Whether a window first seen in its current state (newly mapped, or
    /// coming back from minimized) should be placed. No two-phase
    /// transition ever arrives for such windows.
    pub fn is_placement_candidate(&self, window: &WindowSnapshot) -> bool {
        self.is_managed_window(window)
            && ((self.settings.trigger_on_maximize && window.maximized)
                || (self.settings.trigger_on_fullscreen && window.fullscreen))
    }
}
