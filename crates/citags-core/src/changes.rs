//! Change Source: the ordered list of changed file paths for a run.
//!
//! Two modes: an explicit changes file (newline-separated paths), or a
//! `git diff --name-only` against a reference branch from the repository
//! root. An empty result is not an error; the pipeline turns it into an
//! early exit.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{CitagsError, Result};

/// Branch the working tree is compared against when no changes file is given.
pub const DEFAULT_DIFF_REF: &str = "main";

/// Read changed paths from an explicit newline-separated file.
///
/// Trailing whitespace is stripped per line and empty lines are dropped.
/// Returns an error if the file is missing or unreadable.
pub fn changed_paths_from_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| CitagsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let paths = split_paths(&content);
    debug!(count = paths.len(), path = %path.display(), "read changed paths from file");
    Ok(paths)
}

/// Capture changed paths by diffing the working tree against `diff_ref`.
///
/// Runs `git diff --name-only <diff_ref>` in `repo_root`. Returns an error
/// if git is not available or exits non-zero.
pub fn changed_paths_from_git(repo_root: &Path, diff_ref: &str) -> Result<Vec<String>> {
    let output = Command::new("git")
        .args(["diff", "--name-only", diff_ref])
        .current_dir(repo_root)
        .output()
        .map_err(|e| CitagsError::Process(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CitagsError::Process(format!(
            "git diff --name-only {diff_ref} failed: {stderr}"
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let paths = split_paths(&stdout);
    debug!(count = paths.len(), diff_ref, "captured changed paths from git");
    Ok(paths)
}

fn split_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
