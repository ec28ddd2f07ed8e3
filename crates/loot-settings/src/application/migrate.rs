//! Upgrades settings documents written by older LOOT releases.
//!
//! Two things have changed shape over time:
//!
//! - Before masterlists were fetched as single files, each game entry named a
//!   git `repo` and `branch`.  Those are turned into a `masterlistSource` URL.
//! - Official masterlist and prelude URLs embed a release branch (`v0.15`,
//!   `v0.16`, ...).  A document last written by a release older than the
//!   current branch has those URLs moved to the current branch.  URLs on a
//!   non-release branch or on another host are left alone.

use loot_core::domain::source::upgrade_official_branch;
use loot_core::SOURCE_BRANCH;
use semver::Version;
use tracing::{info, warn};

use super::document::{GameDocument, SettingsDocument};

const GITHUB_PREFIX: &str = "https://github.com/";
const RAW_GITHUB_PREFIX: &str = "https://raw.githubusercontent.com/";

/// First release whose documents need no branch upgrade.
fn branch_baseline() -> Version {
    Version::new(0, 17, 0)
}

/// Rewrites legacy keys in `document`.  Returns `true` if anything changed.
pub fn migrate_document(document: &mut SettingsDocument) -> bool {
    let mut changed = false;

    if let Some(games) = document.games.as_mut() {
        for game in games.iter_mut() {
            changed |= migrate_repo_keys(game);
        }
    }

    if written_before_baseline(document.last_version.as_deref()) {
        if let Some(games) = document.games.as_mut() {
            for game in games.iter_mut() {
                if let Some(upgraded) = game
                    .masterlist_source
                    .as_deref()
                    .and_then(upgrade_official_branch)
                {
                    info!(
                        "moving masterlist source for {:?} to branch {SOURCE_BRANCH}",
                        game.identifier()
                    );
                    game.masterlist_source = Some(upgraded);
                    changed = true;
                }
            }
        }

        if let Some(upgraded) = document
            .prelude_source
            .as_deref()
            .and_then(upgrade_official_branch)
        {
            info!("moving prelude source to branch {SOURCE_BRANCH}");
            document.prelude_source = Some(upgraded);
            changed = true;
        }
    }

    changed
}

/// `true` when `last_version` is absent or an older release than the
/// baseline.  Unparseable versions are treated as current.
fn written_before_baseline(last_version: Option<&str>) -> bool {
    match last_version.map(str::trim) {
        None | Some("") => true,
        Some(version) => match Version::parse(version) {
            Ok(version) => version < branch_baseline(),
            Err(e) => {
                warn!("ignoring unparseable lastVersion {version:?}: {e}");
                false
            }
        },
    }
}

fn migrate_repo_keys(game: &mut GameDocument) -> bool {
    let Some(repo) = game.repo.take() else {
        game.branch = None;
        return false;
    };
    let branch = game.branch.take();

    if game.masterlist_source.is_some() {
        return true;
    }

    match masterlist_url_from_repo(&repo, branch.as_deref().unwrap_or(SOURCE_BRANCH)) {
        Some(url) => {
            info!(
                "converted masterlist repository {repo:?} for {:?} to {url}",
                game.identifier()
            );
            game.masterlist_source = Some(url);
        }
        None => warn!(
            "dropping masterlist repository {repo:?} for {:?}: only GitHub repositories can be \
             converted; the default masterlist source will be used",
            game.identifier()
        ),
    }
    true
}

/// `https://github.com/loot/oblivion.git` + `v0.10` →
/// `https://raw.githubusercontent.com/loot/oblivion/v0.10/masterlist.yaml`.
fn masterlist_url_from_repo(repo: &str, branch: &str) -> Option<String> {
    let path = repo.trim().strip_prefix(GITHUB_PREFIX)?;
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut parts = path.split('/');
    let (owner, name) = (parts.next()?, parts.next()?);
    if owner.is_empty() || name.is_empty() || parts.next().is_some() {
        return None;
    }

    Some(format!("{RAW_GITHUB_PREFIX}{owner}/{name}/{branch}/masterlist.yaml"))
}

#[cfg(test)]
mod tests {
    use loot_core::{official_masterlist_url, official_prelude_url, GameSettings, GameType};

    use super::*;

    fn legacy_game(repo: &str, branch: Option<&str>) -> GameDocument {
        let mut game = GameDocument::from(&GameSettings::new(GameType::Tes4));
        game.masterlist_source = None;
        game.repo = Some(repo.to_string());
        game.branch = branch.map(str::to_string);
        game
    }

    #[test]
    fn test_repo_and_branch_become_masterlist_source() {
        // Arrange
        let mut document = SettingsDocument {
            last_version: Some("0.17.0".to_string()),
            games: Some(vec![legacy_game(
                "https://github.com/loot/oblivion.git",
                Some("v0.10"),
            )]),
            ..Default::default()
        };

        // Act
        let changed = migrate_document(&mut document);

        // Assert
        assert!(changed);
        let game = &document.games.unwrap()[0];
        assert_eq!(
            game.masterlist_source.as_deref(),
            Some("https://raw.githubusercontent.com/loot/oblivion/v0.10/masterlist.yaml")
        );
        assert_eq!(game.repo, None);
        assert_eq!(game.branch, None);
    }

    #[test]
    fn test_repo_without_branch_uses_current_branch() {
        let mut document = SettingsDocument {
            last_version: Some("0.17.0".to_string()),
            games: Some(vec![legacy_game("https://github.com/loot/oblivion", None)]),
            ..Default::default()
        };

        migrate_document(&mut document);

        assert_eq!(
            document.games.unwrap()[0].masterlist_source,
            Some(official_masterlist_url("oblivion"))
        );
    }

    #[test]
    fn test_non_github_repo_is_dropped() {
        let mut document = SettingsDocument {
            games: Some(vec![legacy_game("https://gitlab.com/me/oblivion.git", None)]),
            ..Default::default()
        };

        let changed = migrate_document(&mut document);

        assert!(changed);
        let game = &document.games.unwrap()[0];
        assert_eq!(game.masterlist_source, None);
        assert_eq!(game.repo, None);
    }

    #[test]
    fn test_old_document_moves_official_sources_to_current_branch() {
        // Arrange
        let mut game = GameDocument::from(&GameSettings::new(GameType::Tes5));
        game.masterlist_source =
            Some("https://raw.githubusercontent.com/loot/skyrim/v0.16/masterlist.yaml".to_string());
        let mut document = SettingsDocument {
            last_version: Some("0.16.1".to_string()),
            prelude_source: Some(
                "https://raw.githubusercontent.com/loot/prelude/v0.16/prelude.yaml".to_string(),
            ),
            games: Some(vec![game]),
            ..Default::default()
        };

        // Act
        let changed = migrate_document(&mut document);

        // Assert
        assert!(changed);
        assert_eq!(document.prelude_source, Some(official_prelude_url()));
        assert_eq!(
            document.games.unwrap()[0].masterlist_source,
            Some(official_masterlist_url("skyrim"))
        );
    }

    #[test]
    fn test_current_document_keeps_pinned_branch() {
        let pinned = "https://raw.githubusercontent.com/loot/prelude/v0.16/prelude.yaml";
        let mut document = SettingsDocument {
            last_version: Some("0.17.0".to_string()),
            prelude_source: Some(pinned.to_string()),
            ..Default::default()
        };

        let changed = migrate_document(&mut document);

        assert!(!changed);
        assert_eq!(document.prelude_source.as_deref(), Some(pinned));
    }

    #[test]
    fn test_written_before_baseline() {
        assert!(written_before_baseline(None));
        assert!(written_before_baseline(Some("")));
        assert!(written_before_baseline(Some("0.16.1")));
        assert!(!written_before_baseline(Some("0.17.0")));
        assert!(!written_before_baseline(Some("0.18.2")));
        assert!(!written_before_baseline(Some("not-a-version")));
    }

    #[test]
    fn test_masterlist_url_from_repo_rejects_nested_paths() {
        assert_eq!(
            masterlist_url_from_repo("https://github.com/loot/oblivion/tree/v0.10", "v0.10"),
            None
        );
        assert_eq!(masterlist_url_from_repo("https://github.com/", "v0.10"), None);
    }
}
