//! Official masterlist and prelude source URLs.
//!
//! LOOT's community-maintained metadata lives in one GitHub repository per
//! game (plus a shared `prelude` repository).  Each LOOT release reads from a
//! versioned branch of those repositories, so the branch name is part of every
//! default source URL.

/// Branch of the official metadata repositories read by this release.
pub const SOURCE_BRANCH: &str = "v0.17";

/// Prefix shared by every official raw-content URL.
pub const OFFICIAL_SOURCE_PREFIX: &str = "https://raw.githubusercontent.com/loot/";

/// Builds the default masterlist URL for the official repository `repo`.
///
/// ```
/// assert_eq!(
///     loot_core::official_masterlist_url("oblivion"),
///     "https://raw.githubusercontent.com/loot/oblivion/v0.17/masterlist.yaml"
/// );
/// ```
pub fn official_masterlist_url(repo: &str) -> String {
    format!("{OFFICIAL_SOURCE_PREFIX}{repo}/{SOURCE_BRANCH}/masterlist.yaml")
}

/// Builds the default prelude URL.
pub fn official_prelude_url() -> String {
    format!("{OFFICIAL_SOURCE_PREFIX}prelude/{SOURCE_BRANCH}/prelude.yaml")
}

/// Rewrites an official source URL that points at an older `vX.Y` branch so
/// that it points at [`SOURCE_BRANCH`].
///
/// Returns `None` when `url` is not an official URL, is already on the
/// current branch, or uses a branch that is not a release branch (a user may
/// deliberately track a custom branch).
pub fn upgrade_official_branch(url: &str) -> Option<String> {
    let rest = url.strip_prefix(OFFICIAL_SOURCE_PREFIX)?;
    let mut parts = rest.splitn(3, '/');
    let repo = parts.next()?;
    let branch = parts.next()?;
    let file = parts.next()?;

    if branch == SOURCE_BRANCH || !is_release_branch(branch) {
        return None;
    }

    Some(format!("{OFFICIAL_SOURCE_PREFIX}{repo}/{SOURCE_BRANCH}/{file}"))
}

/// `true` for branch names shaped like `v0.15`.
fn is_release_branch(branch: &str) -> bool {
    let Some(version) = branch.strip_prefix('v') else {
        return false;
    };
    let mut numbers = version.split('.');
    let major = numbers.next();
    let minor = numbers.next();
    numbers.next().is_none()
        && [major, minor].iter().all(|n| {
            n.is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_prelude_url_uses_current_branch() {
        assert_eq!(
            official_prelude_url(),
            "https://raw.githubusercontent.com/loot/prelude/v0.17/prelude.yaml"
        );
    }

    #[test]
    fn test_upgrade_official_branch_rewrites_older_release_branch() {
        // Arrange
        let old = "https://raw.githubusercontent.com/loot/skyrim/v0.15/masterlist.yaml";

        // Act
        let upgraded = upgrade_official_branch(old);

        // Assert
        assert_eq!(upgraded.as_deref(), Some(official_masterlist_url("skyrim").as_str()));
    }

    #[test]
    fn test_upgrade_official_branch_ignores_current_branch() {
        assert_eq!(upgrade_official_branch(&official_masterlist_url("fallout4")), None);
    }

    #[test]
    fn test_upgrade_official_branch_ignores_custom_branch() {
        let custom = "https://raw.githubusercontent.com/loot/skyrim/my-fixes/masterlist.yaml";
        assert_eq!(upgrade_official_branch(custom), None);
    }

    #[test]
    fn test_upgrade_official_branch_ignores_third_party_urls() {
        let third_party = "https://example.com/loot/skyrim/v0.15/masterlist.yaml";
        assert_eq!(upgrade_official_branch(third_party), None);
    }

    #[test]
    fn test_is_release_branch() {
        assert!(is_release_branch("v0.15"));
        assert!(is_release_branch("v10.2"));
        assert!(!is_release_branch("v0.15.1"));
        assert!(!is_release_branch("master"));
        assert!(!is_release_branch("v.1"));
    }
}
