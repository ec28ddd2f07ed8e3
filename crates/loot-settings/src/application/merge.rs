//! Merging a [`SettingsDocument`] onto in-memory [`Settings`], and the
//! reverse conversion used when saving.
//!
//! Merge rules:
//!
//! - Scalars, `window` and each `filters` flag: a value present in the
//!   document replaces the current one; an absent key keeps it.
//! - Games: entries are matched by identifier (`folder`, or the type's default
//!   folder).  A match is overridden in place so display order is kept; an
//!   unknown identifier is appended; entries the document does not mention are
//!   left alone, so a base game can never be dropped by an incomplete file.

use loot_core::{GameSettings, Settings};
use tracing::{debug, warn};

use super::document::{FiltersDocument, GameDocument, SettingsDocument};

/// Applies every key present in `document` to `settings`.
pub fn apply_document(settings: &mut Settings, document: SettingsDocument) {
    let SettingsDocument {
        auto_sort,
        enable_debug_logging,
        update_masterlist,
        enable_loot_update_check,
        game,
        last_game,
        last_version,
        language,
        prelude_source,
        theme,
        window,
        filters,
        games,
    } = document;

    merge_value(&mut settings.auto_sort, auto_sort);
    merge_value(&mut settings.enable_debug_logging, enable_debug_logging);
    merge_value(&mut settings.update_masterlist, update_masterlist);
    merge_value(&mut settings.enable_loot_update_check, enable_loot_update_check);
    merge_value(&mut settings.game, game);
    merge_value(&mut settings.last_game, last_game);
    merge_value(&mut settings.last_version, last_version);
    merge_value(&mut settings.language, language);
    merge_value(&mut settings.prelude_source, prelude_source);
    merge_value(&mut settings.theme, theme);

    if window.is_some() {
        settings.window_position = window;
    }
    if let Some(filters) = filters {
        filters.apply_to(&mut settings.filters);
    }
    if let Some(games) = games {
        merge_games(&mut settings.game_settings, games);
    }
}

fn merge_value<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Merges document game entries into `games`, preserving existing order.
pub fn merge_games(games: &mut Vec<GameSettings>, entries: Vec<GameDocument>) {
    for entry in entries {
        let game_type = entry.game_type;
        let identifier = entry.identifier().to_string();

        match games.iter_mut().find(|g| g.folder == identifier) {
            Some(existing) => {
                if existing.game_type != game_type {
                    warn!(
                        "settings entry {identifier:?} has type {game_type} but the configured \
                         entry is {}; keeping the configured type",
                        existing.game_type
                    );
                }
                existing.apply(entry.into_overrides());
            }
            None => {
                debug!("adding game entry {identifier:?} ({game_type}) from settings");
                let mut game = GameSettings::with_folder(game_type, identifier);
                game.apply(entry.into_overrides());
                games.push(game);
            }
        }
    }
}

/// Builds the document that represents `settings` in full.
///
/// `languages` is not part of the document.
pub fn to_document(settings: &Settings) -> SettingsDocument {
    SettingsDocument {
        auto_sort: Some(settings.auto_sort),
        enable_debug_logging: Some(settings.enable_debug_logging),
        update_masterlist: Some(settings.update_masterlist),
        enable_loot_update_check: Some(settings.enable_loot_update_check),
        game: Some(settings.game.clone()),
        last_game: Some(settings.last_game.clone()),
        last_version: Some(settings.last_version.clone()),
        language: Some(settings.language.clone()),
        prelude_source: Some(settings.prelude_source.clone()),
        theme: Some(settings.theme.clone()),
        window: settings.window_position,
        filters: Some(FiltersDocument::from(&settings.filters)),
        games: Some(settings.game_settings.iter().map(GameDocument::from).collect()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use loot_core::{GameType, WindowPosition};

    use super::*;

    fn game_doc(game_type: GameType) -> GameDocument {
        GameDocument {
            game_type,
            folder: None,
            name: None,
            master: None,
            registry: None,
            local_folder: None,
            masterlist_source: None,
            path: None,
            local_path: None,
            repo: None,
            branch: None,
        }
    }

    #[test]
    fn test_apply_document_with_only_theme_changes_only_theme() {
        // Arrange
        let mut settings = Settings::default();
        let before = settings.clone();
        let document = SettingsDocument {
            theme: Some("dark".to_string()),
            ..Default::default()
        };

        // Act
        apply_document(&mut settings, document);

        // Assert
        assert_eq!(settings.theme, "dark");
        settings.theme = before.theme.clone();
        assert_eq!(settings, before);
    }

    #[test]
    fn test_apply_document_sets_window_and_flags() {
        let mut settings = Settings::default();
        let window = WindowPosition {
            top: 10,
            bottom: 700,
            left: 20,
            right: 1000,
            maximised: true,
        };
        let document = SettingsDocument {
            auto_sort: Some(true),
            update_masterlist: Some(false),
            window: Some(window),
            ..Default::default()
        };

        apply_document(&mut settings, document);

        assert!(settings.auto_sort);
        assert!(!settings.update_masterlist);
        assert_eq!(settings.window_position, Some(window));
    }

    #[test]
    fn test_absent_window_keeps_existing_window() {
        let window = WindowPosition {
            top: 1,
            ..Default::default()
        };
        let mut settings = Settings {
            window_position: Some(window),
            ..Default::default()
        };

        apply_document(&mut settings, SettingsDocument::default());

        assert_eq!(settings.window_position, Some(window));
    }

    #[test]
    fn test_merge_games_overrides_existing_entry_in_place() {
        // Arrange
        let mut games = Settings::default().game_settings;
        let position = games.iter().position(|g| g.folder == "Skyrim").unwrap();
        let mut entry = game_doc(GameType::Tes5);
        entry.path = Some(PathBuf::from("C:/Games/Skyrim"));
        entry.name = Some("My Skyrim".to_string());

        // Act
        merge_games(&mut games, vec![entry]);

        // Assert
        let skyrim = &games[position];
        assert_eq!(skyrim.folder, "Skyrim");
        assert_eq!(skyrim.name, "My Skyrim");
        assert_eq!(skyrim.game_path, Some(PathBuf::from("C:/Games/Skyrim")));
        assert_eq!(skyrim.master, "Skyrim.esm");
        assert_eq!(games.len(), Settings::default().game_settings.len());
    }

    #[test]
    fn test_merge_games_matches_variant_by_folder() {
        let mut games = Settings::default().game_settings;
        let mut entry = game_doc(GameType::Tes5);
        entry.folder = Some("Enderal".to_string());
        entry.local_path = Some(PathBuf::from("C:/Users/me/AppData/Local/enderal"));

        merge_games(&mut games, vec![entry]);

        let enderal = games.iter().find(|g| g.folder == "Enderal").unwrap();
        assert_eq!(enderal.name, "Enderal: Forgotten Stories");
        assert_eq!(
            enderal.game_local_path,
            Some(PathBuf::from("C:/Users/me/AppData/Local/enderal"))
        );
        let skyrim = games.iter().find(|g| g.folder == "Skyrim").unwrap();
        assert_eq!(skyrim.game_local_path, None);
    }

    #[test]
    fn test_merge_games_appends_new_identifier_after_existing_entries() {
        // Arrange
        let mut games = Settings::default().game_settings;
        let before: Vec<String> = games.iter().map(|g| g.folder.clone()).collect();
        let mut entry = game_doc(GameType::Tes5se);
        entry.folder = Some("Skyrim Modded".to_string());
        entry.name = Some("Skyrim SE (second install)".to_string());

        // Act
        merge_games(&mut games, vec![entry]);

        // Assert
        let after: Vec<String> = games.iter().map(|g| g.folder.clone()).collect();
        assert_eq!(&after[..before.len()], &before[..]);
        let added = games.last().unwrap();
        assert_eq!(added.folder, "Skyrim Modded");
        assert_eq!(added.game_type, GameType::Tes5se);
        assert_eq!(added.name, "Skyrim SE (second install)");
        assert_eq!(added.master, "Skyrim.esm");
    }

    #[test]
    fn test_merge_games_keeps_configured_type_on_mismatch() {
        let mut games = Settings::default().game_settings;
        let mut entry = game_doc(GameType::Fo4);
        entry.folder = Some("Oblivion".to_string());

        merge_games(&mut games, vec![entry]);

        let oblivion = games.iter().find(|g| g.folder == "Oblivion").unwrap();
        assert_eq!(oblivion.game_type, GameType::Tes4);
    }

    #[test]
    fn test_to_document_then_apply_reproduces_settings() {
        // Arrange
        let mut original = Settings::default();
        original.language = "de".to_string();
        original.filters.hide_notes = true;
        original.window_position = Some(WindowPosition::default());
        original
            .game_settings
            .push(GameSettings::with_folder(GameType::Fonv, "TTW"));

        // Act
        let mut restored = Settings::default();
        apply_document(&mut restored, to_document(&original));

        // Assert
        assert_eq!(restored, original);
    }

    #[test]
    fn test_to_document_omits_absent_window() {
        let document = to_document(&Settings::default());
        assert_eq!(document.window, None);
        assert_eq!(
            document.games.map(|g| g.len()),
            Some(Settings::default().game_settings.len())
        );
    }
}
