//! Criterion benchmarks for loading settings.
//!
//! Measures the in-memory merge on its own and a full `load` from a TOML file
//! as the number of configured games grows.
//!
//! Run with:
//! ```bash
//! cargo bench --package loot-settings --bench load_bench
//! ```

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loot_core::{GameSettings, GameType, Settings};
use loot_settings::application::document::{DocumentFormat, GameDocument, SettingsDocument};
use loot_settings::application::merge::{apply_document, to_document};
use loot_settings::{SettingsStore, TomlFormat};
use uuid::Uuid;

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// A document holding the default games plus `extra` user-added entries.
fn document_with_extra_games(extra: usize) -> SettingsDocument {
    let mut settings = Settings::default();
    for i in 0..extra {
        let game_type = GameType::ALL[i % GameType::ALL.len()];
        settings
            .game_settings
            .push(GameSettings::with_folder(game_type, format!("Install {i}")));
    }
    to_document(&settings)
}

struct BenchDir(PathBuf);

impl Drop for BenchDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_apply_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_document");

    for extra in [0usize, 10, 100] {
        let document = document_with_extra_games(extra);
        group.bench_with_input(BenchmarkId::from_parameter(extra), &document, |b, document| {
            b.iter(|| {
                let mut settings = Settings::default();
                apply_document(&mut settings, black_box(document.clone()));
                settings
            })
        });
    }

    group.finish();
}

fn bench_load_from_toml(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_from_toml");
    let dir = BenchDir(std::env::temp_dir().join(format!("loot_bench_{}", Uuid::new_v4())));

    for extra in [0usize, 10, 100] {
        let path = dir.0.join(format!("settings-{extra}.toml"));
        TomlFormat
            .write(&path, &document_with_extra_games(extra))
            .expect("fixture must be written");

        group.bench_with_input(BenchmarkId::from_parameter(extra), &path, |b, path| {
            b.iter(|| {
                let store = SettingsStore::new();
                store.load(black_box(path), &dir.0).expect("load");
                store
            })
        });
    }

    group.finish();
}

fn bench_game_document_conversion(c: &mut Criterion) {
    let game = GameSettings::new(GameType::Tes5se);
    c.bench_function("game_document_from_settings", |b| {
        b.iter(|| GameDocument::from(black_box(&game)))
    });
}

criterion_group!(
    benches,
    bench_apply_document,
    bench_load_from_toml,
    bench_game_document_conversion
);
criterion_main!(benches);
