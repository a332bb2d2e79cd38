//! Turns a git remote into a browsable https URL.
//!
//! Shared with the crate (see `build_info`) so the rules are unit tested.

/// `git@github.com:owner/repo.git` -> `https://github.com/owner/repo`.
/// Anything that isn't scp-style only loses its `.git` suffix.
pub(crate) fn normalize(remote: &str) -> String {
    let remote = remote.trim();
    let remote = remote.strip_suffix(".git").unwrap_or(remote);

    match remote.strip_prefix("git@") {
        Some(rest) => match rest.split_once(':') {
            Some((host, path)) => format!("https://{host}/{path}"),
            None => format!("https://{rest}"),
        },
        None => remote.to_string(),
    }
}
