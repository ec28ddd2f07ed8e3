//! The settings document: the tree the store reads and writes, and the
//! [`DocumentFormat`] port through which it does so.
//!
//! Every key is optional.  A key that is absent from a document means "keep
//! the current value", which is what makes loading a field-by-field merge
//! instead of a wholesale replace.
//!
//! The key names match the ones LOOT has always written (`enableDebugLogging`,
//! `lastGame`, `[[games]]`, ...), so existing settings files keep working.
//!
//! # Why a trait? (for beginners)
//!
//! The store only needs *some* way to turn a file into a [`SettingsDocument`]
//! and back.  Hiding that behind [`DocumentFormat`] means the store never
//! names a concrete format: production wires in the TOML adapter from
//! `infrastructure::storage`, and unit tests inject a mock that can fail on
//! demand.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use loot_core::{Filters, GameSettings, GameSettingsOverrides, GameType, WindowPosition};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for reading and writing settings documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document exists but could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document exists but is malformed.
    #[error("invalid settings document at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The directory that should hold the document could not be created.
    #[error("unable to create settings directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory settings could not be encoded.
    #[error("failed to serialize settings for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The encoded document could not be persisted.
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform data directory could not be determined.
    #[error("could not determine the LOOT data directory")]
    NoDataDir,
}

impl DocumentError {
    /// `true` for a malformed document, as opposed to an I/O failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, DocumentError::Parse { .. })
    }
}

/// Reads and writes [`SettingsDocument`]s.
///
/// Implementations must be shareable between threads; the store holds one for
/// its whole lifetime and calls it while holding its own lock.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentFormat: Send + Sync {
    /// Reads the document at `path`.
    ///
    /// Returns `Ok(None)` when no document exists at `path` (first run).
    fn read(&self, path: &Path) -> Result<Option<SettingsDocument>, DocumentError>;

    /// Writes `document` to `path`, replacing any existing document.
    ///
    /// Either the whole new document becomes visible or the previous one is
    /// left in place.
    fn write(&self, path: &Path, document: &SettingsDocument) -> Result<(), DocumentError>;
}

// ── Document schema ──────────────────────────────────────────────────────────

/// Root of a settings document.
///
/// Scalars are declared before tables so that TOML output keeps bare keys at
/// the top of the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_sort: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_debug_logging: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_masterlist: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_loot_update_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelude_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FiltersDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games: Option<Vec<GameDocument>>,
}

/// One `[[games]]` entry.
///
/// Only `type` is required; everything else overrides the type's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDocument {
    #[serde(rename = "type")]
    pub game_type: GameType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_folder: Option<String>,
    #[serde(
        default,
        rename = "masterlistSource",
        skip_serializing_if = "Option::is_none"
    )]
    pub masterlist_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
    /// Pre-0.15 masterlist git repository URL.  Read only.
    #[serde(default, skip_serializing)]
    pub repo: Option<String>,
    /// Pre-0.15 masterlist git branch.  Read only.
    #[serde(default, skip_serializing)]
    pub branch: Option<String>,
}

impl GameDocument {
    /// Identifier of the entry this document describes: its `folder`, or the
    /// default folder of its type.
    pub fn identifier(&self) -> &str {
        self.folder
            .as_deref()
            .unwrap_or_else(|| self.game_type.default_folder())
    }

    /// Converts the document's keys into overrides for a [`GameSettings`].
    pub fn into_overrides(self) -> GameSettingsOverrides {
        GameSettingsOverrides {
            folder: self.folder,
            name: self.name,
            master: self.master,
            registry_keys: self.registry,
            game_local_folder: self.local_folder,
            masterlist_source: self.masterlist_source,
            game_path: self.path,
            game_local_path: self.local_path,
        }
    }
}

impl From<&GameSettings> for GameDocument {
    fn from(game: &GameSettings) -> Self {
        Self {
            game_type: game.game_type,
            folder: Some(game.folder.clone()),
            name: Some(game.name.clone()),
            master: Some(game.master.clone()),
            registry: Some(game.registry_keys.clone()),
            local_folder: game.game_local_folder.clone(),
            masterlist_source: Some(game.masterlist_source.clone()),
            path: game.game_path.clone(),
            local_path: game.game_local_path.clone(),
            repo: None,
            branch: None,
        }
    }
}

/// The `[filters]` table.  Each flag merges independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_version_numbers: Option<bool>,
    #[serde(default, rename = "hideCRCs", skip_serializing_if = "Option::is_none")]
    pub hide_crcs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_bash_tags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_notes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_all_plugin_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_inactive_plugins: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_messageless_plugins: Option<bool>,
}

impl FiltersDocument {
    /// Overwrites every flag of `filters` that this document sets.
    pub fn apply_to(&self, filters: &mut Filters) {
        let pairs = [
            (self.hide_version_numbers, &mut filters.hide_version_numbers),
            (self.hide_crcs, &mut filters.hide_crcs),
            (self.hide_bash_tags, &mut filters.hide_bash_tags),
            (self.hide_notes, &mut filters.hide_notes),
            (self.hide_all_plugin_messages, &mut filters.hide_all_plugin_messages),
            (self.hide_inactive_plugins, &mut filters.hide_inactive_plugins),
            (self.hide_messageless_plugins, &mut filters.hide_messageless_plugins),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

impl From<&Filters> for FiltersDocument {
    fn from(filters: &Filters) -> Self {
        Self {
            hide_version_numbers: Some(filters.hide_version_numbers),
            hide_crcs: Some(filters.hide_crcs),
            hide_bash_tags: Some(filters.hide_bash_tags),
            hide_notes: Some(filters.hide_notes),
            hide_all_plugin_messages: Some(filters.hide_all_plugin_messages),
            hide_inactive_plugins: Some(filters.hide_inactive_plugins),
            hide_messageless_plugins: Some(filters.hide_messageless_plugins),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
