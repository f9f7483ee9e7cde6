//! Spec file generation from the project's `.spec.cmake` template.

use std::path::{Path, PathBuf};

/// Copy `template` to `dest`, substituting every `@KEY@` token with its
/// value.
///
/// A key that does not occur in the template is a no-op; only read and write
/// failures are errors.
pub fn materialize(
    template: &Path,
    dest: &Path,
    substitutions: &[(&str, &str)],
) -> Result<(), SpecfileError> {
    let mut content = std::fs::read_to_string(template).map_err(|e| SpecfileError::Read {
        path: template.to_path_buf(),
        source: e,
    })?;

    for (key, value) in substitutions {
        content = content.replace(&format!("@{key}@"), value);
    }

    tracing::debug!(dest = %dest.display(), "writing materialized spec file");
    std::fs::write(dest, content).map_err(|e| SpecfileError::Write {
        path: dest.to_path_buf(),
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SpecfileError {
    #[error("failed to read spec template {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write spec file {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
