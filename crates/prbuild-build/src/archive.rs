//! Source archive creation.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Produce a bzip2-compressed tar archive of `src_dir` at `archive_path`,
/// with the archive root renamed to `root_name` and version-control
/// metadata excluded.
pub fn create_source_archive(
    src_dir: &Path,
    archive_path: &Path,
    root_name: &str,
) -> Result<(), ArchiveError> {
    let archive = archive_path
        .to_str()
        .ok_or_else(|| ArchiveError::InvalidPath(archive_path.to_path_buf()))?;
    let transform = format!("s,^\\.,{root_name},");

    tracing::debug!(archive, %transform, "creating source archive");

    let status = Command::new("tar")
        .args(["cjf", archive, "--transform", &transform, "--exclude", ".git", "."])
        .current_dir(src_dir)
        .status()
        .map_err(|e| ArchiveError::TarSpawn { source: e })?;

    if status.success() {
        Ok(())
    } else {
        Err(ArchiveError::TarFailed { status })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),

    #[error("tar could not be executed — is it installed?")]
    TarSpawn { source: std::io::Error },

    #[error("tar exited with {status}")]
    TarFailed { status: std::process::ExitStatus },
}
