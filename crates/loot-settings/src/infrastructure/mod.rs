//! Infrastructure layer for the settings store.
//!
//! Contains OS-facing adapters: the TOML settings file and the platform
//! data-directory lookup.
//!
//! **Dependency rule**: this layer may depend on `application` and `loot_core`,
//! but MUST NOT be imported by the `application` or domain layers.

pub mod storage;
