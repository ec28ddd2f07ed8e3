//! Advisory checks over LOOT's data directory.
//!
//! LOOT keeps per-game state (masterlists, userlists) under
//! `<data>/games/<folder>`.  Older releases used other layouts and left files
//! behind when they were upgraded; this pass looks for that residue and
//! describes it.  It never fails: anything it cannot inspect becomes one more
//! warning.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::store::SettingsStore;

/// Settings file read by releases before TOML settings were introduced.
pub const LEGACY_SETTINGS_FILE: &str = "settings.yaml";

/// Directory under the data directory holding one folder per game.
pub const GAMES_DIR: &str = "games";

/// Name of a git checkout left behind by pre-0.15 masterlist updates.
const GIT_DIR: &str = ".git";

/// Inspects `data_path` and returns human-readable warnings, in a stable order.
///
/// Configured game folders are read back through `store`, so this may be
/// called while the store is already locked by the current thread.
pub fn check_settings_file(store: &SettingsStore, data_path: &Path) -> Vec<String> {
    if !data_path.is_dir() {
        debug!("data directory {} does not exist yet", data_path.display());
        return Vec::new();
    }

    let folders: HashSet<String> = store
        .game_settings()
        .into_iter()
        .map(|g| g.folder)
        .collect();

    let mut warnings = Vec::new();

    let legacy_settings = data_path.join(LEGACY_SETTINGS_FILE);
    if legacy_settings.is_file() {
        warnings.push(format!(
            "Found a legacy settings file at \"{}\". It is no longer read and can be deleted.",
            legacy_settings.display()
        ));
    }

    for name in subdirectory_names(data_path, &mut warnings) {
        if folders.contains(&name) {
            warnings.push(format!(
                "Found game data for \"{name}\" at \"{}\". Game data is now stored in \"{}\"; \
                 the old folder is no longer used.",
                data_path.join(&name).display(),
                data_path.join(GAMES_DIR).join(&name).display()
            ));
        }
    }

    let games_path = data_path.join(GAMES_DIR);
    if games_path.is_dir() {
        for name in subdirectory_names(&games_path, &mut warnings) {
            let game_path = games_path.join(&name);
            if !folders.contains(&name) {
                warnings.push(format!(
                    "The game data folder \"{}\" does not belong to any configured game.",
                    game_path.display()
                ));
            } else if game_path.join(GIT_DIR).is_dir() {
                warnings.push(format!(
                    "The game data folder \"{}\" contains a stale masterlist repository \
                     (\"{GIT_DIR}\") from an older release. It can be deleted.",
                    game_path.display()
                ));
            }
        }
    }

    warnings
}

/// Sorted names of the directories directly inside `path`.
fn subdirectory_names(path: &Path, warnings: &mut Vec<String>) -> Vec<String> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warnings.push(format!("Could not inspect \"{}\": {e}", path.display()));
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
