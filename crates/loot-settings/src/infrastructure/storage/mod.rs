//! Storage infrastructure: settings file persistence.
//!
//! - `toml_format` reads and writes settings documents as TOML, replacing the
//!   file atomically on save.
//! - `paths` resolves the platform data directory and the settings file
//!   inside it.
//!
//! The store itself never names a file format; this module is where the TOML
//! adapter is wired in.

pub mod paths;
pub mod toml_format;

use crate::application::store::SettingsStore;

use self::toml_format::TomlFormat;

impl SettingsStore {
    /// Creates a store holding the default settings, persisted as TOML.
    pub fn new() -> Self {
        Self::with_format(Box::new(TomlFormat))
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
