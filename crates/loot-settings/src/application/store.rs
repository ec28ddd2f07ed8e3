//! SettingsStore: the thread-safe owner of LOOT's settings.
//!
//! The store holds one [`Settings`] value behind a single recursive lock.
//! Every public method (accessor, mutator, `load`, `save`) takes the lock for
//! its whole duration and releases it on every exit path when the guard is
//! dropped.
//!
//! # Why a *reentrant* lock? (for beginners)
//!
//! A plain mutex deadlocks if the thread that holds it tries to lock it again.
//! `load` holds the lock while it runs [`check_settings_file`], and that check
//! reads the game list back through [`SettingsStore::game_settings`].  With
//! `parking_lot::ReentrantMutex` the second lock from the same thread simply
//! succeeds, while other threads still wait for the outer operation to finish.
//!
//! A reentrant mutex only hands out shared references, so the settings live in
//! a `RefCell`.  No `RefCell` borrow is ever held across a call that could
//! re-enter the store, which is what keeps the borrows from panicking.
//!
//! # All-or-nothing updates
//!
//! `load` merges the document into a *copy* of the current settings and swaps
//! the copy in only once the merge is complete; a parse failure leaves the
//! previous settings untouched.  `save` updates `last_version` in memory only
//! after the document has been written.

use std::cell::RefCell;
use std::path::Path;

use loot_core::{
    find_language, Filters, GameSettings, Language, Settings, WindowPosition,
};
use parking_lot::ReentrantMutex;
use tracing::{debug, info, warn};

use super::check::check_settings_file;
use super::document::{DocumentError, DocumentFormat};
use super::merge::{apply_document, to_document};
use super::migrate::migrate_document;

/// Version recorded in `lastVersion` when this build writes a settings file.
pub const LOOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Thread-safe, versioned settings store.
///
/// Share it between threads with `Arc<SettingsStore>`.
pub struct SettingsStore {
    state: ReentrantMutex<RefCell<Settings>>,
    format: Box<dyn DocumentFormat>,
}

impl SettingsStore {
    /// Creates a store holding the default settings, reading and writing
    /// documents through `format`.
    pub fn with_format(format: Box<dyn DocumentFormat>) -> Self {
        Self {
            state: ReentrantMutex::new(RefCell::new(Settings::default())),
            format,
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        let guard = self.state.lock();
        let settings = guard.borrow();
        f(&settings)
    }

    fn write(&self, f: impl FnOnce(&mut Settings)) {
        let guard = self.state.lock();
        let mut settings = guard.borrow_mut();
        f(&mut settings);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Merges the document at `path` into the current settings, then checks
    /// `data_path` for leftovers from older releases.
    ///
    /// A missing document is not an error: the current settings are kept.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] for a malformed document and
    /// [`DocumentError::Read`] for an unreadable one.  In both cases the
    /// settings are exactly as they were before the call.
    ///
    /// On success returns the advisory warnings from the data-directory check.
    pub fn load(&self, path: &Path, data_path: &Path) -> Result<Vec<String>, DocumentError> {
        let guard = self.state.lock();

        match self.format.read(path)? {
            None => {
                info!("no settings found at {}, using defaults", path.display());
            }
            Some(mut document) => {
                if migrate_document(&mut document) {
                    info!("migrated legacy settings from {}", path.display());
                }
                let mut merged = guard.borrow().clone();
                apply_document(&mut merged, document);
                guard.replace(merged);
                info!("loaded settings from {}", path.display());
            }
        }

        let warnings = check_settings_file(self, data_path);
        for warning in &warnings {
            warn!("{warning}");
        }
        Ok(warnings)
    }

    /// Writes the current settings to `path`, recording this build's version
    /// as the one that last wrote the file.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the document could not be encoded or
    /// written.  The in-memory settings are unchanged in that case.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let guard = self.state.lock();

        let mut document = to_document(&guard.borrow());
        document.last_version = Some(LOOT_VERSION.to_string());
        self.format.write(path, &document)?;

        guard.borrow_mut().last_version = LOOT_VERSION.to_string();
        info!("saved settings to {}", path.display());
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// A copy of the whole settings aggregate.
    pub fn snapshot(&self) -> Settings {
        self.read(Settings::clone)
    }

    pub fn should_auto_sort(&self) -> bool {
        self.read(|s| s.auto_sort)
    }

    pub fn is_debug_logging_enabled(&self) -> bool {
        self.read(|s| s.enable_debug_logging)
    }

    pub fn is_masterlist_update_enabled(&self) -> bool {
        self.read(|s| s.update_masterlist)
    }

    pub fn is_update_check_enabled(&self) -> bool {
        self.read(|s| s.enable_loot_update_check)
    }

    /// The game to select on startup, or [`loot_core::AUTO_GAME`].
    pub fn game(&self) -> String {
        self.read(|s| s.game.clone())
    }

    pub fn last_game(&self) -> String {
        self.read(|s| s.last_game.clone())
    }

    /// Version of LOOT that last wrote the settings; empty if never saved.
    pub fn last_version(&self) -> String {
        self.read(|s| s.last_version.clone())
    }

    pub fn language(&self) -> String {
        self.read(|s| s.language.clone())
    }

    pub fn theme(&self) -> String {
        self.read(|s| s.theme.clone())
    }

    pub fn prelude_source(&self) -> String {
        self.read(|s| s.prelude_source.clone())
    }

    pub fn window_position(&self) -> Option<WindowPosition> {
        self.read(|s| s.window_position)
    }

    pub fn game_settings(&self) -> Vec<GameSettings> {
        self.read(|s| s.game_settings.clone())
    }

    pub fn filters(&self) -> Filters {
        self.read(|s| s.filters)
    }

    pub fn languages(&self) -> Vec<Language> {
        self.read(|s| s.languages.clone())
    }

    // ── Mutators ──────────────────────────────────────────────────────────────
    //
    // None of these validate against the game list or language catalog; an
    // unknown value is stored as given and resolved by whoever reads it.

    /// Sets the game to select on startup.
    pub fn set_default_game(&self, game: impl Into<String>) {
        let game = game.into();
        self.write(|s| {
            if !s.is_known_game(&game) {
                debug!("default game {game:?} is not a configured game");
            }
            s.game = game;
        });
    }

    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        if find_language(&language).is_none() {
            debug!("language {language:?} is not in the catalog");
        }
        self.write(|s| s.language = language);
    }

    pub fn set_theme(&self, theme: impl Into<String>) {
        let theme = theme.into();
        self.write(|s| s.theme = theme);
    }

    pub fn set_prelude_source(&self, source: impl Into<String>) {
        let source = source.into();
        self.write(|s| s.prelude_source = source);
    }

    pub fn set_auto_sort(&self, auto_sort: bool) {
        self.write(|s| s.auto_sort = auto_sort);
    }

    pub fn enable_debug_logging(&self, enable: bool) {
        self.write(|s| s.enable_debug_logging = enable);
    }

    pub fn enable_masterlist_update(&self, enable: bool) {
        self.write(|s| s.update_masterlist = enable);
    }

    pub fn enable_update_check(&self, enable: bool) {
        self.write(|s| s.enable_loot_update_check = enable);
    }

    /// Records the game that was selected when LOOT closed.
    pub fn store_last_game(&self, last_game: impl Into<String>) {
        let last_game = last_game.into();
        self.write(|s| s.last_game = last_game);
    }

    pub fn store_window_position(&self, position: WindowPosition) {
        self.write(|s| s.window_position = Some(position));
    }

    /// Replaces the whole game list.
    ///
    /// Unlike `load`, this does not re-merge the default games: callers that
    /// want to keep them should start from [`SettingsStore::game_settings`].
    pub fn store_game_settings(&self, game_settings: Vec<GameSettings>) {
        self.write(|s| s.game_settings = game_settings);
    }

    pub fn store_filters(&self, filters: Filters) {
        self.write(|s| s.filters = filters);
    }

    /// Records this build's version as the last version, without saving.
    pub fn update_last_version(&self) {
        self.write(|s| s.last_version = LOOT_VERSION.to_string());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
