//! Application layer of the settings store.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (plain settings values in `loot_core`) and the infrastructure (files on
//! disk).  It orchestrates domain values to fulfil a use case and reaches the
//! outside world only through traits, so the concrete file format can be
//! swapped without touching this code.
//!
//! # Sub-modules
//!
//! - **`store`**    – [`store::SettingsStore`], the locked owner of the
//!   settings.  Every accessor, mutator, `load` and `save` lives here.
//!
//! - **`document`** – The optional-everything document tree that is read and
//!   written, and the [`document::DocumentFormat`] port.
//!
//! - **`merge`**    – Field-by-field merge of a document onto the current
//!   settings, and the reverse conversion for saving.
//!
//! - **`migrate`**  – Upgrades documents written by older releases.
//!
//! - **`check`**    – Advisory warnings about leftovers in the data directory.
//!   This is the one place the layer looks at the file system directly; it
//!   only inspects directory entries and never writes.

pub mod check;
pub mod document;
pub mod merge;
pub mod migrate;
pub mod store;
