//! Thin wrappers over the `git` command line.

use std::path::Path;
use std::process::Command;

pub(crate) fn emit_rerun_if_changed() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let git_dir = Path::new(&manifest_dir).join(".git");

    // HEAD moves on checkout, refs/ on commit.
    for path in ["HEAD", "refs"] {
        let path = git_dir.join(path);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_support");
}

pub(crate) fn commit_hash() -> Option<String> {
    run_git(&["rev-parse", "HEAD"])
}

/// Commit date formatted like `Mon Oct 19 2026`.
pub(crate) fn commit_date() -> Option<String> {
    run_git(&["log", "-1", "--format=%cd", "--date=format:%a %b %d %Y"])
}

pub(crate) fn remote_url() -> Option<String> {
    run_git(&["config", "--get", "remote.origin.url"])
}

fn run_git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim_end();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
