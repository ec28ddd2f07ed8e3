//! Locating LOOT's data directory and settings file.
//!
//! - Windows:  `%LOCALAPPDATA%\LOOT\settings.toml`
//! - Linux:    `$XDG_DATA_HOME/LOOT/settings.toml` (or `~/.local/share/LOOT`)
//! - macOS:    `~/Library/Application Support/LOOT/settings.toml`

use std::path::PathBuf;

use crate::application::document::DocumentError;

/// Name of the settings file inside the data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

const APP_DIR_NAME: &str = "LOOT";

/// Determines the platform-appropriate data directory.
///
/// # Errors
///
/// Returns [`DocumentError::NoDataDir`] when the base directory cannot be
/// determined from the environment.
pub fn data_dir() -> Result<PathBuf, DocumentError> {
    platform_data_dir().ok_or(DocumentError::NoDataDir)
}

/// Resolves the full path to the settings file in the data directory.
///
/// # Errors
///
/// Returns [`DocumentError::NoDataDir`] if the base directory cannot be
/// determined.
pub fn settings_file_path() -> Result<PathBuf, DocumentError> {
    Ok(data_dir()?.join(SETTINGS_FILE_NAME))
}

fn platform_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // C:\Users\<user>\AppData\Local
        non_empty_var("LOCALAPPDATA").map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(target_os = "linux")]
    {
        let base = non_empty_var("XDG_DATA_HOME")
            .or_else(|| non_empty_var("HOME").map(|h| h.join(".local").join("share")))?;
        Some(base.join(APP_DIR_NAME))
    }

    #[cfg(target_os = "macos")]
    {
        non_empty_var("HOME").map(|h| {
            h.join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME)
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

#[cfg_attr(
    not(any(target_os = "windows", target_os = "linux", target_os = "macos")),
    allow(dead_code)
)]
fn non_empty_var(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
