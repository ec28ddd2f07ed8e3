//! loot-settings library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! ```no_run
//! use std::path::Path;
//! use loot_settings::SettingsStore;
//!
//! let store = SettingsStore::new();
//! let warnings = store.load(Path::new("settings.toml"), Path::new("."))?;
//! store.set_language("fr");
//! store.save(Path::new("settings.toml"))?;
//! # Ok::<(), loot_settings::DocumentError>(())
//! ```

pub mod application;
pub mod infrastructure;

pub use application::check::check_settings_file;
pub use application::document::{DocumentError, DocumentFormat, SettingsDocument};
pub use application::store::{SettingsStore, LOOT_VERSION};
pub use infrastructure::storage::toml_format::TomlFormat;
