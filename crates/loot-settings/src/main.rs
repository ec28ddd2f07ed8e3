//! loot-settings command-line entry point.
//!
//! Loads LOOT's settings file, reports on it, and optionally edits it.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse()             -- flags and subcommand
//!  └─ SettingsStore::new()     -- defaults + TOML adapter
//!  └─ store.load()             -- merge file, check data directory
//!  └─ run subcommand
//!       ├─ show / games / languages / check   (read only, JSON on stdout)
//!       └─ set / touch                        (mutate, then store.save())
//! ```
//!
//! Logs go to stderr so that stdout stays machine-readable.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use loot_core::{GameSettings, GameType};
use loot_settings::infrastructure::storage::paths::{data_dir, SETTINGS_FILE_NAME};
use loot_settings::SettingsStore;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit LOOT's settings file.
#[derive(Debug, Parser)]
#[command(
    name = "loot-settings",
    about = "Inspect and edit LOOT's persisted settings",
    version
)]
struct Cli {
    /// LOOT data directory.  Defaults to the platform data directory.
    #[arg(long, env = "LOOT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Settings file.  Defaults to `settings.toml` in the data directory.
    #[arg(long, env = "LOOT_SETTINGS")]
    settings: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the effective settings as JSON.
    Show,
    /// Print data-directory warnings, one per line.
    Check,
    /// Print the language catalog as JSON.
    Languages,
    /// Print the configured games as JSON.
    Games {
        /// Only list games of this type (`SkyrimSE`, `tes5se`, ...).
        #[arg(long = "type", value_name = "TYPE")]
        game_type: Option<GameType>,
    },
    /// Change one setting and save.
    Set {
        /// Document key, e.g. `language` or `enableDebugLogging`.
        key: String,
        value: String,
    },
    /// Record this build as the last version to write the settings, and save.
    Touch,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let data_path = match cli.data_dir {
        Some(path) => path,
        None => data_dir().context("could not determine the LOOT data directory")?,
    };
    let settings_path = cli
        .settings
        .unwrap_or_else(|| data_path.join(SETTINGS_FILE_NAME));
    debug!(
        "data directory {}, settings file {}",
        data_path.display(),
        settings_path.display()
    );

    let store = SettingsStore::new();
    let warnings = store
        .load(&settings_path, &data_path)
        .with_context(|| format!("failed to load {}", settings_path.display()))?;

    match cli.command {
        Command::Show => print_json(&store.snapshot())?,
        Command::Languages => print_json(&store.languages())?,
        Command::Games { game_type } => print_json(&games_of_type(&store, game_type))?,
        Command::Check => {
            for warning in &warnings {
                println!("{warning}");
            }
        }
        Command::Set { key, value } => {
            apply_setting(&store, &key, &value)?;
            store
                .save(&settings_path)
                .with_context(|| format!("failed to save {}", settings_path.display()))?;
            info!("set {key} = {value}");
        }
        Command::Touch => {
            store.update_last_version();
            store
                .save(&settings_path)
                .with_context(|| format!("failed to save {}", settings_path.display()))?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    println!("{json}");
    Ok(())
}

/// Configured games, optionally restricted to one type.
fn games_of_type(store: &SettingsStore, game_type: Option<GameType>) -> Vec<GameSettings> {
    store
        .game_settings()
        .into_iter()
        .filter(|g| game_type.map_or(true, |t| g.game_type == t))
        .collect()
}

/// Applies `key = value` to `store` using the document's key names.
fn apply_setting(store: &SettingsStore, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "autoSort" => store.set_auto_sort(parse_flag(key, value)?),
        "enableDebugLogging" => store.enable_debug_logging(parse_flag(key, value)?),
        "updateMasterlist" => store.enable_masterlist_update(parse_flag(key, value)?),
        "enableLootUpdateCheck" => store.enable_update_check(parse_flag(key, value)?),
        "game" => store.set_default_game(value),
        "lastGame" => store.store_last_game(value),
        "language" => store.set_language(value),
        "preludeSource" => store.set_prelude_source(value),
        "theme" => store.set_theme(value),
        other => bail!("unknown or read-only setting {other:?}"),
    }
    Ok(())
}

fn parse_flag(key: &str, value: &str) -> anyhow::Result<bool> {
    value
        .parse()
        .with_context(|| format!("{key} expects true or false, got {value:?}"))
}
