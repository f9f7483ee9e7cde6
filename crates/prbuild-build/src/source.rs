//! Source checkout assembly: a fresh clone of the upstream repository with
//! the pull request's commit merged onto the base branch.
//!
//! git runs as a blocking subprocess with its output inherited, so clone and
//! merge progress stream to the terminal exactly as they would interactively.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Remove the working directories of a previous run.
///
/// Directories that do not exist are skipped; a clean workspace is the goal,
/// not an invariant of the previous run.
pub fn clean_workspace(root: &Path, dirs: &[&str]) -> Result<(), SourceError> {
    for dir in dirs {
        let path = root.join(dir);
        if path.exists() {
            tracing::debug!(path = %path.display(), "removing previous working directory");
            std::fs::remove_dir_all(&path).map_err(|e| SourceError::Cleanup {
                path: path.clone(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Clone `url` into `dest_dir` under `root`.
pub fn clone(root: &Path, url: &str, dest_dir: &str) -> Result<(), SourceError> {
    run_git(root, &["clone", url, dest_dir])
}

/// Check out the named branch.
pub fn checkout(repo: &Path, branch: &str) -> Result<(), SourceError> {
    run_git(repo, &["checkout", branch])
}

/// Register the pull request's repository as a remote.
pub fn add_remote(repo: &Path, name: &str, url: &str) -> Result<(), SourceError> {
    run_git(repo, &["remote", "add", name, url])
}

/// Fetch the named remote.
pub fn fetch(repo: &Path, remote: &str) -> Result<(), SourceError> {
    run_git(repo, &["fetch", remote])
}

/// Merge the named commit into the checked-out branch.
pub fn merge(repo: &Path, commit: &str) -> Result<(), SourceError> {
    run_git(repo, &["merge", commit])
}

fn run_git(dir: &Path, args: &[&str]) -> Result<(), SourceError> {
    tracing::debug!(?args, dir = %dir.display(), "running git");

    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| SourceError::GitSpawn { source: e })?;

    if status.success() {
        Ok(())
    } else {
        Err(SourceError::GitFailed {
            args: args.iter().map(|s| (*s).to_owned()).collect(),
            status,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to remove {path}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("git could not be executed — is it installed?")]
    GitSpawn { source: std::io::Error },

    #[error("git {args:?} exited with {status}")]
    GitFailed {
        args: Vec<String>,
        status: std::process::ExitStatus,
    },
}
