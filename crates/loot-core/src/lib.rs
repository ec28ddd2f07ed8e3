//! # loot-core
//!
//! Shared domain types for the LOOT settings store: the supported games and
//! their default configuration, the UI language catalog, list-view filters,
//! window geometry, and the [`Settings`] aggregate that ties them together.
//!
//! This crate has no file-system, locking, or serialization-format concerns.
//! It only knows what a valid settings value looks like and what the defaults
//! are.  Persistence and thread safety live in `loot-settings`.
//!
//! # Architecture overview (for beginners)
//!
//! LOOT sorts the plugin load order for a number of Bethesda games.  The tool
//! keeps one configuration entry per game it knows about (where to find the
//! game, which master file identifies it, where its masterlist lives) plus a
//! handful of UI preferences.
//!
//! - **`domain::game`** – The [`GameType`] enumeration and the
//!   [`GameSettings`] record, including the compiled-in table of default
//!   entries (nine base games and three total-conversion variants).
//!
//! - **`domain::language`** – The fixed catalog of UI languages.
//!
//! - **`domain::settings`** – [`Settings`], [`Filters`] and
//!   [`WindowPosition`], with their defaults.
//!
//! - **`domain::source`** – URL helpers for the official masterlist and
//!   prelude repositories.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `loot_core::GameSettings` instead of `loot_core::domain::game::GameSettings`.
pub use domain::game::{
    default_game_settings, GameSettings, GameSettingsOverrides, GameType, GameTypeError,
};
pub use domain::language::{find_language, language_catalog, Language, DEFAULT_LANGUAGE};
pub use domain::settings::{
    Filters, Settings, WindowPosition, AUTO_GAME, DEFAULT_THEME,
};
pub use domain::source::{official_masterlist_url, official_prelude_url, SOURCE_BRANCH};
