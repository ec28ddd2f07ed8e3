//! Supported games and their per-game configuration.
//!
//! Every game LOOT can manage is described by a [`GameSettings`] record.  Each
//! record is built from one of nine base [`GameType`]s; a handful of
//! total-conversion mods (Nehrim, Enderal) reuse a base game's engine but need
//! their own name, master file, detection keys and masterlist, so they are
//! modelled as extra records derived from a base type.
//!
//! The `folder` field is the record's stable identifier.  It names the
//! per-game directory under LOOT's data directory and is how a settings
//! document refers back to an entry.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::source::official_masterlist_url;

const UNINSTALL_KEY_PREFIX: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Uninstall\\";

/// Error returned when parsing a [`GameType`] from its persisted name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised game type: {0:?}")]
pub struct GameTypeError(pub String);

/// The base games LOOT supports.
///
/// The declaration order is the default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "Morrowind")]
    Tes3,
    #[serde(rename = "Oblivion")]
    Tes4,
    #[serde(rename = "Skyrim")]
    Tes5,
    #[serde(rename = "SkyrimSE")]
    Tes5se,
    #[serde(rename = "Skyrim VR")]
    Tes5vr,
    #[serde(rename = "Fallout3")]
    Fo3,
    #[serde(rename = "FalloutNV")]
    Fonv,
    #[serde(rename = "Fallout4")]
    Fo4,
    #[serde(rename = "Fallout4VR")]
    Fo4vr,
}

impl GameType {
    /// Every base game, in default display order.
    pub const ALL: [GameType; 9] = [
        GameType::Tes3,
        GameType::Tes4,
        GameType::Tes5,
        GameType::Tes5se,
        GameType::Tes5vr,
        GameType::Fo3,
        GameType::Fonv,
        GameType::Fo4,
        GameType::Fo4vr,
    ];

    /// Name used for this type in settings documents.
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Tes3 => "Morrowind",
            GameType::Tes4 => "Oblivion",
            GameType::Tes5 => "Skyrim",
            GameType::Tes5se => "SkyrimSE",
            GameType::Tes5vr => "Skyrim VR",
            GameType::Fo3 => "Fallout3",
            GameType::Fonv => "FalloutNV",
            GameType::Fo4 => "Fallout4",
            GameType::Fo4vr => "Fallout4VR",
        }
    }

    /// Identifier (data folder name) of this type's default entry.
    pub fn default_folder(self) -> &'static str {
        match self {
            GameType::Tes3 => "Morrowind",
            GameType::Tes4 => "Oblivion",
            GameType::Tes5 => "Skyrim",
            GameType::Tes5se => "Skyrim Special Edition",
            GameType::Tes5vr => "Skyrim VR",
            GameType::Fo3 => "Fallout3",
            GameType::Fonv => "FalloutNV",
            GameType::Fo4 => "Fallout4",
            GameType::Fo4vr => "Fallout4VR",
        }
    }

    /// Human-readable name shown in the game selector.
    pub fn default_name(self) -> &'static str {
        match self {
            GameType::Tes3 => "TES III: Morrowind",
            GameType::Tes4 => "TES IV: Oblivion",
            GameType::Tes5 => "TES V: Skyrim",
            GameType::Tes5se => "TES V: Skyrim Special Edition",
            GameType::Tes5vr => "TES V: Skyrim VR",
            GameType::Fo3 => "Fallout 3",
            GameType::Fonv => "Fallout: New Vegas",
            GameType::Fo4 => "Fallout 4",
            GameType::Fo4vr => "Fallout 4 VR",
        }
    }

    /// The master file whose presence identifies an install of this game.
    pub fn default_master(self) -> &'static str {
        match self {
            GameType::Tes3 => "Morrowind.esm",
            GameType::Tes4 => "Oblivion.esm",
            GameType::Tes5 | GameType::Tes5se | GameType::Tes5vr => "Skyrim.esm",
            GameType::Fo3 => "Fallout3.esm",
            GameType::Fonv => "FalloutNV.esm",
            GameType::Fo4 | GameType::Fo4vr => "Fallout4.esm",
        }
    }

    /// Registry value that holds the game's install path.
    pub fn default_registry_key(self) -> &'static str {
        match self {
            GameType::Tes3 => "Software\\Bethesda Softworks\\Morrowind\\Installed Path",
            GameType::Tes4 => "Software\\Bethesda Softworks\\Oblivion\\Installed Path",
            GameType::Tes5 => "Software\\Bethesda Softworks\\Skyrim\\Installed Path",
            GameType::Tes5se => {
                "Software\\Bethesda Softworks\\Skyrim Special Edition\\Installed Path"
            }
            GameType::Tes5vr => "Software\\Bethesda Softworks\\Skyrim VR\\Installed Path",
            GameType::Fo3 => "Software\\Bethesda Softworks\\Fallout3\\Installed Path",
            GameType::Fonv => "Software\\Bethesda Softworks\\FalloutNV\\Installed Path",
            GameType::Fo4 => "Software\\Bethesda Softworks\\Fallout4\\Installed Path",
            GameType::Fo4vr => "Software\\Bethesda Softworks\\Fallout 4 VR\\Installed Path",
        }
    }

    /// Official metadata repository holding this game's masterlist.
    pub fn masterlist_repo(self) -> &'static str {
        match self {
            GameType::Tes3 => "morrowind",
            GameType::Tes4 => "oblivion",
            GameType::Tes5 => "skyrim",
            GameType::Tes5se => "skyrimse",
            GameType::Tes5vr => "skyrimvr",
            GameType::Fo3 => "fallout3",
            GameType::Fonv => "falloutnv",
            GameType::Fo4 => "fallout4",
            GameType::Fo4vr => "fallout4vr",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = GameTypeError;

    /// Accepts the persisted names (`"SkyrimSE"`) as well as the short codes
    /// (`"tes5se"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GameType::ALL
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(wanted)
                    || short_code(*t).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| GameTypeError(s.to_string()))
    }
}

fn short_code(game_type: GameType) -> &'static str {
    match game_type {
        GameType::Tes3 => "tes3",
        GameType::Tes4 => "tes4",
        GameType::Tes5 => "tes5",
        GameType::Tes5se => "tes5se",
        GameType::Tes5vr => "tes5vr",
        GameType::Fo3 => "fo3",
        GameType::Fonv => "fonv",
        GameType::Fo4 => "fo4",
        GameType::Fo4vr => "fo4vr",
    }
}

/// Configuration for one supported game or game variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Stable identifier; also the game's folder name in the data directory.
    pub folder: String,
    /// Engine the game is built on.
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub name: String,
    pub master: String,
    /// Registry values searched (in order) to detect the install path.
    pub registry_keys: Vec<String>,
    /// Override for the folder name under the user's local app data.
    pub game_local_folder: Option<String>,
    pub masterlist_source: String,
    /// Explicit install path; detection is skipped when set.
    pub game_path: Option<PathBuf>,
    /// Explicit local app data path.
    pub game_local_path: Option<PathBuf>,
}

/// Options record used to derive a variant entry from a base game type.
///
/// `None` fields keep the base type's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSettingsOverrides {
    pub folder: Option<String>,
    pub name: Option<String>,
    pub master: Option<String>,
    pub registry_keys: Option<Vec<String>>,
    pub game_local_folder: Option<String>,
    pub masterlist_source: Option<String>,
    pub game_path: Option<PathBuf>,
    pub game_local_path: Option<PathBuf>,
}

impl GameSettings {
    /// Creates the fully defaulted entry for `game_type`.
    pub fn new(game_type: GameType) -> Self {
        Self::with_folder(game_type, game_type.default_folder())
    }

    /// Creates the defaulted entry for `game_type` under a different identifier.
    pub fn with_folder(game_type: GameType, folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            game_type,
            name: game_type.default_name().to_string(),
            master: game_type.default_master().to_string(),
            registry_keys: vec![game_type.default_registry_key().to_string()],
            game_local_folder: None,
            masterlist_source: official_masterlist_url(game_type.masterlist_repo()),
            game_path: None,
            game_local_path: None,
        }
    }

    /// Creates an entry for `game_type` with the given fields overridden.
    pub fn derived(game_type: GameType, overrides: GameSettingsOverrides) -> Self {
        let mut settings = Self::new(game_type);
        settings.apply(overrides);
        settings
    }

    /// Replaces every field that `overrides` sets.
    pub fn apply(&mut self, overrides: GameSettingsOverrides) {
        let GameSettingsOverrides {
            folder,
            name,
            master,
            registry_keys,
            game_local_folder,
            masterlist_source,
            game_path,
            game_local_path,
        } = overrides;

        if let Some(folder) = folder {
            self.folder = folder;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(master) = master {
            self.master = master;
        }
        if let Some(keys) = registry_keys {
            self.registry_keys = keys;
        }
        if game_local_folder.is_some() {
            self.game_local_folder = game_local_folder;
        }
        if let Some(source) = masterlist_source {
            self.masterlist_source = source;
        }
        if game_path.is_some() {
            self.game_path = game_path;
        }
        if game_local_path.is_some() {
            self.game_local_path = game_local_path;
        }
    }
}

/// The compiled-in default game list: every base game followed by the
/// total-conversion variants.
///
/// Built once per process; callers clone it into their own state.
pub fn default_game_settings() -> &'static [GameSettings] {
    static DEFAULTS: OnceLock<Vec<GameSettings>> = OnceLock::new();
    DEFAULTS.get_or_init(build_default_game_settings)
}

fn build_default_game_settings() -> Vec<GameSettings> {
    let mut games: Vec<GameSettings> = GameType::ALL.into_iter().map(GameSettings::new).collect();

    games.push(GameSettings::derived(
        GameType::Tes4,
        GameSettingsOverrides {
            folder: Some("Nehrim".to_string()),
            name: Some("Nehrim - At Fate's Edge".to_string()),
            master: Some("Nehrim.esm".to_string()),
            registry_keys: Some(vec![
                format!("{UNINSTALL_KEY_PREFIX}Nehrim - At Fate's Edge_is1\\InstallLocation"),
                steam_install_key(1014940),
            ]),
            ..Default::default()
        },
    ));

    games.push(GameSettings::derived(
        GameType::Tes5,
        GameSettingsOverrides {
            folder: Some("Enderal".to_string()),
            name: Some("Enderal: Forgotten Stories".to_string()),
            registry_keys: Some(vec![
                "HKEY_CURRENT_USER\\SOFTWARE\\SureAI\\Enderal\\Install_Path".to_string(),
                steam_install_key(933480),
            ]),
            game_local_folder: Some("enderal".to_string()),
            masterlist_source: Some(official_masterlist_url("enderal")),
            ..Default::default()
        },
    ));

    games.push(GameSettings::derived(
        GameType::Tes5se,
        GameSettingsOverrides {
            folder: Some("Enderal Special Edition".to_string()),
            name: Some("Enderal: Forgotten Stories (Special Edition)".to_string()),
            registry_keys: Some(vec![
                "HKEY_CURRENT_USER\\SOFTWARE\\SureAI\\EnderalSE\\Install_Path".to_string(),
                steam_install_key(976620),
            ]),
            game_local_folder: Some("Enderal Special Edition".to_string()),
            masterlist_source: Some(official_masterlist_url("enderal")),
            ..Default::default()
        },
    ));

    games
}

fn steam_install_key(app_id: u32) -> String {
    format!("{UNINSTALL_KEY_PREFIX}Steam App {app_id}\\InstallLocation")
}
