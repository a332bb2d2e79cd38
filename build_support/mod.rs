//! Build script support modules.

pub(crate) mod git;
pub(crate) mod repo_url;

/// Placeholder used when git metadata can't be read (tarball builds, no git on PATH).
/// Seven characters long so the short hash is still a prefix of the full one.
const UNKNOWN: &str = "unknown";

pub(crate) fn run() {
    git::emit_rerun_if_changed();

    let commit_hash = git::commit_hash().unwrap_or_else(|| UNKNOWN.to_string());
    let commit_hash_short: String = commit_hash.chars().take(7).collect();
    let commit_date = git::commit_date().unwrap_or_else(|| UNKNOWN.to_string());
    let repo_url = git::remote_url()
        .map(|url| repo_url::normalize(&url))
        .or_else(|| {
            std::env::var("CARGO_PKG_REPOSITORY")
                .ok()
                .filter(|url| !url.is_empty())
        })
        .unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=AMBIENCEFX_COMMIT_HASH={commit_hash}");
    println!("cargo:rustc-env=AMBIENCEFX_COMMIT_HASH_SHORT={commit_hash_short}");
    println!("cargo:rustc-env=AMBIENCEFX_COMMIT_DATE={commit_date}");
    println!("cargo:rustc-env=AMBIENCEFX_REPO_URL={repo_url}");
}
