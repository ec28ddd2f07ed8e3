//! The settings aggregate.
//!
//! [`Settings`] is a plain value: it holds every preference LOOT persists
//! plus the language catalog, and its [`Default`] is the complete first-run
//! state.  It carries no lock and does no I/O; `loot-settings` wraps it in a
//! store that does both.

use serde::{Deserialize, Serialize};

use super::game::{default_game_settings, GameSettings};
use super::language::{language_catalog, Language, DEFAULT_LANGUAGE};
use super::source::official_prelude_url;

/// Sentinel game identifier meaning "use the last game, or auto-detect".
pub const AUTO_GAME: &str = "auto";

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "default";

/// Saved main-window geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPosition {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub maximised: bool,
}

/// Visibility toggles for the plugin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub hide_version_numbers: bool,
    #[serde(rename = "hideCRCs")]
    pub hide_crcs: bool,
    pub hide_bash_tags: bool,
    pub hide_notes: bool,
    pub hide_all_plugin_messages: bool,
    pub hide_inactive_plugins: bool,
    pub hide_messageless_plugins: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            hide_version_numbers: false,
            hide_crcs: false,
            hide_bash_tags: true,
            hide_notes: false,
            hide_all_plugin_messages: false,
            hide_inactive_plugins: false,
            hide_messageless_plugins: false,
        }
    }
}

/// Every setting LOOT keeps between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub auto_sort: bool,
    pub enable_debug_logging: bool,
    pub update_masterlist: bool,
    pub enable_loot_update_check: bool,
    /// Game to select on startup, or [`AUTO_GAME`].
    pub game: String,
    /// Game that was selected when LOOT last closed, or [`AUTO_GAME`].
    pub last_game: String,
    /// Version of LOOT that last wrote the settings.  Empty until first save.
    pub last_version: String,
    pub language: String,
    pub prelude_source: String,
    pub theme: String,
    pub window_position: Option<WindowPosition>,
    pub game_settings: Vec<GameSettings>,
    pub filters: Filters,
    /// Compiled-in catalog; never persisted.
    pub languages: Vec<Language>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_sort: false,
            enable_debug_logging: false,
            update_masterlist: true,
            enable_loot_update_check: true,
            game: AUTO_GAME.to_string(),
            last_game: AUTO_GAME.to_string(),
            last_version: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            prelude_source: official_prelude_url(),
            theme: DEFAULT_THEME.to_string(),
            window_position: None,
            game_settings: default_game_settings().to_vec(),
            filters: Filters::default(),
            languages: language_catalog().to_vec(),
        }
    }
}

impl Settings {
    /// Returns the game entry with identifier `folder`, if configured.
    pub fn find_game(&self, folder: &str) -> Option<&GameSettings> {
        self.game_settings.iter().find(|g| g.folder == folder)
    }

    /// `true` when `folder` is the auto sentinel or names a configured game.
    pub fn is_known_game(&self, folder: &str) -> bool {
        folder == AUTO_GAME || self.find_game(folder).is_some()
    }
}
