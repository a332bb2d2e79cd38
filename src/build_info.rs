//! Git metadata captured by `build.rs` when the binary was compiled.

pub fn commit_hash() -> &'static str {
    env!("AMBIENCEFX_COMMIT_HASH")
}

/// First seven characters of [`commit_hash`].
pub fn commit_hash_short() -> &'static str {
    env!("AMBIENCEFX_COMMIT_HASH_SHORT")
}

/// Commit date, e.g. `Mon Oct 19 2026`.
pub fn commit_date() -> &'static str {
    env!("AMBIENCEFX_COMMIT_DATE")
}

pub fn repo_url() -> &'static str {
    env!("AMBIENCEFX_REPO_URL")
}

/// Link to the built commit, when the repository is known.
pub fn commit_url() -> Option<String> {
    let repo = repo_url();
    if repo.starts_with("https://") && commit_hash().len() == 40 {
        Some(format!("{repo}/commit/{}", commit_hash()))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../build_support/repo_url.rs"]
mod repo_url;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_is_not_empty() {
        assert!(!commit_hash().is_empty());
        assert!(!commit_hash_short().is_empty());
        assert!(!commit_date().is_empty());
        assert!(!repo_url().is_empty());
    }

    #[test]
    fn test_short_hash_is_prefix() {
        assert_eq!(commit_hash_short().len(), 7);
        assert!(commit_hash().starts_with(commit_hash_short()));
    }

    #[test]
    fn test_commit_url_points_at_full_hash() {
        if let Some(url) = commit_url() {
            assert!(url.starts_with(repo_url()));
            assert!(url.ends_with(commit_hash()));
        }
    }

    #[test]
    fn test_normalize_scp_remote() {
        assert_eq!(
            repo_url::normalize("git@github.com:owner/repo.git"),
            "https://github.com/owner/repo"
        );
        assert_eq!(
            repo_url::normalize("git@gitlab.com:group/sub/repo"),
            "https://gitlab.com/group/sub/repo"
        );
    }

    #[test]
    fn test_normalize_https_remote() {
        assert_eq!(
            repo_url::normalize("https://github.com/owner/repo.git\n"),
            "https://github.com/owner/repo"
        );
        assert_eq!(
            repo_url::normalize("https://github.com/owner/repo"),
            "https://github.com/owner/repo"
        );
    }
}
