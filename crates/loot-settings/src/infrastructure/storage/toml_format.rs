//! TOML persistence for settings documents.
//!
//! LOOT's settings file looks like this:
//!
//! ```toml
//! enableDebugLogging = false
//! game = "auto"
//! language = "en"
//! lastVersion = "0.17.0"
//!
//! [window]
//! top = 10
//! bottom = 810
//! left = 20
//! right = 1220
//! maximised = false
//!
//! [filters]
//! hideBashTags = true
//!
//! [[games]]
//! type = "Skyrim"
//! folder = "Skyrim"
//! master = "Skyrim.esm"
//! ```
//!
//! # Atomic writes (for beginners)
//!
//! Writing straight into `settings.toml` would leave a truncated file behind
//! if the process died half-way.  Instead the new contents go into a sibling
//! temporary file, which is flushed to disk and then renamed over the target.
//! A rename within one directory either happens completely or not at all, so a
//! reader only ever sees the old file or the new one.

use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::document::{DocumentError, DocumentFormat, SettingsDocument};

/// Reads and writes settings documents as TOML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

impl DocumentFormat for TomlFormat {
    fn read(&self, path: &Path) -> Result<Option<SettingsDocument>, DocumentError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("settings file {} does not exist", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(DocumentError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let document = toml::from_str(&content).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        Ok(Some(document))
    }

    fn write(&self, path: &Path, document: &SettingsDocument) -> Result<(), DocumentError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| DocumentError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(document).map_err(|source| DocumentError::Serialize {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        atomic_write(path, data.as_bytes())
    }
}

/// Number of temporary names tried before giving up.
const TEMP_ATTEMPTS: usize = 5;

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), DocumentError> {
    let write_error = |path: &Path, source: std::io::Error| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path.file_name().ok_or_else(|| {
        write_error(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "settings path has no file name"),
        )
    })?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut last_err = None;
    for _ in 0..TEMP_ATTEMPTS {
        let tmp_path = dir.join(format!(
            "{}.tmp-{}",
            file_name.to_string_lossy(),
            Uuid::new_v4().simple()
        ));

        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                last_err = Some(e);
                continue;
            }
            Err(e) => return Err(write_error(&tmp_path, e)),
        };

        if let Err(e) = file.write_all(data).and_then(|()| file.sync_all()) {
            drop(file);
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_error(&tmp_path, e));
        }
        drop(file);

        if let Err(e) = replace_file(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_error(path, e));
        }
        sync_parent_dir_or_warn(dir);
        debug!("wrote {} bytes to {}", data.len(), path.display());
        return Ok(());
    }

    Err(write_error(
        path,
        std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!(
                "could not create a temporary file next to {}: {}",
                path.display(),
                last_err.map_or_else(|| "unknown error".to_string(), |e| e.to_string())
            ),
        ),
    ))
}

fn replace_file(temp_path: &Path, path: &Path) -> std::io::Result<()> {
    match std::fs::rename(temp_path, path) {
        Ok(()) => Ok(()),
        Err(e) => {
            #[cfg(target_os = "windows")]
            if matches!(
                e.kind(),
                std::io::ErrorKind::AlreadyExists | std::io::ErrorKind::PermissionDenied
            ) {
                if let Err(inner) = std::fs::remove_file(path) {
                    if inner.kind() != std::io::ErrorKind::NotFound {
                        return Err(inner);
                    }
                }
                return std::fs::rename(temp_path, path);
            }
            Err(e)
        }
    }
}

/// Flushes the directory entry for the rename.  The new file is already in
/// place at this point, so a failure is logged instead of failing the save.
/// Returns `false` if the sync failed.
fn sync_parent_dir_or_warn(dir: &Path) -> bool {
    match sync_parent_dir(dir) {
        Ok(()) => true,
        Err(e) => {
            warn!("could not sync directory {}: {e}", dir.display());
            false
        }
    }
}

fn sync_parent_dir(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        std::fs::File::open(dir)?.sync_all()?;
    }
    #[cfg(not(unix))]
    {
        let _ = dir;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
