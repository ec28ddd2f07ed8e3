//! Integration tests for the compiled-in defaults exposed by `loot-core`.
//!
//! These exercise the public API only and check the invariants the settings
//! store relies on when it merges a file onto the defaults:
//!
//! - Every game identifier (folder) is unique, so merge-by-identifier is
//!   unambiguous.
//! - Every game type has exactly one base entry using its default folder.
//! - Language locales are unique and the default language is in the catalog.

use std::collections::HashSet;

use loot_core::{
    default_game_settings, find_language, language_catalog, official_masterlist_url, GameType,
    Settings, DEFAULT_LANGUAGE, SOURCE_BRANCH,
};

#[test]
fn test_default_game_folders_are_unique() {
    let folders: Vec<&str> = default_game_settings()
        .iter()
        .map(|g| g.folder.as_str())
        .collect();
    let unique: HashSet<&str> = folders.iter().copied().collect();

    assert_eq!(unique.len(), folders.len(), "duplicate folder in {folders:?}");
}

#[test]
fn test_each_game_type_has_a_base_entry() {
    for game_type in GameType::ALL {
        let base = default_game_settings()
            .iter()
            .find(|g| g.folder == game_type.default_folder())
            .unwrap_or_else(|| panic!("no base entry for {game_type}"));

        assert_eq!(base.game_type, game_type);
        assert_eq!(base.master, game_type.default_master());
        assert_eq!(
            base.masterlist_source,
            official_masterlist_url(game_type.masterlist_repo())
        );
    }
}

#[test]
fn test_default_sources_track_current_branch() {
    let settings = Settings::default();

    assert!(settings.prelude_source.contains(SOURCE_BRANCH));
    for game in &settings.game_settings {
        assert!(
            game.masterlist_source.contains(SOURCE_BRANCH),
            "{} uses {}",
            game.folder,
            game.masterlist_source
        );
    }
}

#[test]
fn test_game_type_names_round_trip_through_from_str() {
    for game_type in GameType::ALL {
        let parsed: GameType = game_type.to_string().parse().expect("parse");
        assert_eq!(parsed, game_type);
    }
    assert!("Starfield".parse::<GameType>().is_err());
}

#[test]
fn test_language_catalog_is_unique_and_contains_default() {
    let locales: HashSet<&str> = language_catalog()
        .iter()
        .map(|l| l.locale.as_str())
        .collect();

    assert_eq!(locales.len(), language_catalog().len());
    assert!(find_language(DEFAULT_LANGUAGE).is_some());
}

#[test]
fn test_cjk_languages_carry_font_family() {
    for locale in ["ja", "ko", "zh_CN"] {
        let language = find_language(locale).expect("catalog entry");
        assert!(language.font_family.is_some(), "{locale} has no font family");
    }
    assert_eq!(find_language("en").and_then(|l| l.font_family.clone()), None);
}
