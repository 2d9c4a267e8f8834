//! Configuration for the Solospace placement engine.
//!
//! Configuration is loaded from TOML files in the following locations
//! (in order):
//! 1. the platform config directory (`~/.config/solospace/config.toml`
//!    on Linux)
//! 2. `~/.config/solospace/config.toml` (explicit Unix-style fallback)
//! 3. `./config.toml` (current directory, for development)
//!
//! Every field has a default, so a missing file or a partially written
//! one (e.g. mid schema upgrade) degrades to defaults instead of failing.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use solospace_core::filter::normalize_app_id;
use solospace_core::settings::{FilterMode, FilterSettings, OverrideModifier, Settings};

/// Main configuration structure for Solospace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which transitions trigger automatic placement.
    pub triggers: TriggerConfig,
    /// Placement behavior.
    pub behavior: BehaviorConfig,
    /// Application filtering.
    pub filter: FilterConfig,
}

/// Trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Relocate windows when they maximize.
    #[serde(default = "default_true")]
    pub maximize: bool,

    /// Relocate windows when they enter fullscreen.
    #[serde(default = "default_true")]
    pub fullscreen: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self { maximize: true, fullscreen: true }
    }
}

/// Placement behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Modifier that, held during a trigger, suppresses automatic
    /// placement for that one event.
    #[serde(default)]
    pub override_modifier: OverrideModifierConfig,

    /// Insert a workspace after the current one instead of swapping with
    /// an existing free workspace.
    #[serde(default)]
    pub insert_after_current: bool,
}

/// Override modifier configuration (wrapper for serialization).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverrideModifierConfig {
    #[default]
    None,
    Alt,
    Super,
    Ctrl,
    Shift,
}

impl From<OverrideModifierConfig> for OverrideModifier {
    fn from(config: OverrideModifierConfig) -> Self {
        match config {
            OverrideModifierConfig::None => OverrideModifier::None,
            OverrideModifierConfig::Alt => OverrideModifier::Alt,
            OverrideModifierConfig::Super => OverrideModifier::Super,
            OverrideModifierConfig::Ctrl => OverrideModifier::Ctrl,
            OverrideModifierConfig::Shift => OverrideModifier::Shift,
        }
    }
}

/// Filter mode configuration (wrapper for serialization).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterModeConfig {
    /// Allow everything except listed applications.
    #[default]
    Blacklist,
    /// Allow only listed applications.
    Whitelist,
}

impl From<FilterModeConfig> for FilterMode {
    fn from(config: FilterModeConfig) -> Self {
        match config {
            FilterModeConfig::Blacklist => FilterMode::Blacklist,
            FilterModeConfig::Whitelist => FilterMode::Whitelist,
        }
    }
}

/// Application filter configuration.
///
/// List entries are matched against application identities; they are
/// normalized (lowercased, `.desktop` suffix stripped) and deduplicated
/// when the config is converted to engine settings, so users can paste
/// identities in whatever form their desktop reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(default)]
    pub mode: FilterModeConfig,

    /// Applications excluded in blacklist mode.
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Applications included in whitelist mode.
    #[serde(default)]
    pub whitelist: Vec<String>,
}

/// Normalize and deduplicate a configured identity list.
fn normalize_list(entries: &[String]) -> BTreeSet<String> {
    entries.iter().map(|entry| normalize_app_id(entry)).collect()
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            trigger_on_maximize: config.triggers.maximize,
            trigger_on_fullscreen: config.triggers.fullscreen,
            override_modifier: config.behavior.override_modifier.into(),
            insert_after_current: config.behavior.insert_after_current,
            filter: FilterSettings {
                mode: config.filter.mode.into(),
                blacklist: normalize_list(&config.filter.blacklist),
                whitelist: normalize_list(&config.filter.whitelist),
            },
        }
    }
}

impl Config {
    /// Load configuration from standard locations.
    ///
    /// Returns default config if no file is found.
    pub fn load() -> Result<Self> {
        let paths = config_paths();

        for path in &paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Convert to engine settings, normalizing filter lists on the way.
    pub fn to_settings(&self) -> Settings {
        self.into()
    }
}

/// Get all possible config file paths in priority order.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(proj_dirs) = ProjectDirs::from("org", "solospace", "solospace") {
        paths.push(proj_dirs.config_dir().join("config.toml"));
    }

    if let Some(home) = dirs_home() {
        paths.push(home.join(".config").join("solospace").join("config.toml"));
    }

    paths.push(PathBuf::from("config.toml"));

    paths
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

fn default_true() -> bool {
    true
}
