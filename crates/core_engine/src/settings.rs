//! Engine-facing settings.
//!
//! Owned by an external settings collaborator and passed by reference into
//! every operation; the engine never caches them, so runtime changes take
//! effect on the next event.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Input modifier that suppresses automatic placement while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideModifier {
    /// No override; automatic behavior always applies.
    #[default]
    None,
    Alt,
    Super,
    Ctrl,
    Shift,
}

/// Which side of the filter list decides eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Allow every application except those on the blacklist.
    /// Windows with no determinable identity are allowed.
    #[default]
    Blacklist,
    /// Allow only applications on the whitelist. Windows with no
    /// determinable identity are rejected, and an empty whitelist rejects
    /// everything: opt-in is explicit.
    Whitelist,
}

/// Application-identity filtering settings.
///
/// List entries are expected pre-normalized (lowercase, `.desktop` suffix
/// stripped); the settings crate normalizes on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub mode: FilterMode,
    pub blacklist: BTreeSet<String>,
    pub whitelist: BTreeSet<String>,
}

/// All settings the engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Place windows when they maximize (and restore on unmaximize).
    pub trigger_on_maximize: bool,

    /// Place windows when they enter fullscreen (and restore on exit).
    pub trigger_on_fullscreen: bool,

    /// Modifier that, held during a trigger event, lets the host's default
    /// behavior proceed unmodified for that one event.
    pub override_modifier: OverrideModifier,

    /// Use the insert-after-current placement strategy instead of swapping
    /// with an existing free workspace.
    pub insert_after_current: bool,

    /// Application eligibility filtering.
    pub filter: FilterSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trigger_on_maximize: true,
            trigger_on_fullscreen: true,
            override_modifier: OverrideModifier::default(),
            insert_after_current: false,
            filter: FilterSettings::default(),
        }
    }
}
