//! Domain entities for the LOOT settings store.
//!
//! This module contains pure data and default-value rules with no
//! infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of a Clean Architecture codebase is the **domain**.
//! Domain code:
//!
//! - Defines the data types that make the system what it is: here, the games
//!   LOOT supports and the preferences a user can change.
//! - Has **no** imports from file-system APIs, lock primitives, or document
//!   formats.
//! - Can be tested on any platform without setup.
//!
//! The settings store in `loot-settings` depends on these types; these types
//! never depend on the store.

/// Supported games and their per-game configuration.
pub mod game;
/// Fixed catalog of UI languages.
pub mod language;
/// The settings aggregate and its small value types.
pub mod settings;
/// Official masterlist/prelude source URLs.
pub mod source;
