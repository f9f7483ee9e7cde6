//! Tarball name discovery from the materialized spec file.
//!
//! The spec's `Source:`/`Source0:` line declares the archive the package
//! build expects, usually with rpm macro references in it. Those are
//! resolved by querying the spec file itself, so the archive we produce is
//! named exactly what the build will look for.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

static SOURCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Source0?:\s+(.*)").expect("invalid Source line regex"));

static MACRO_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\{([^}]*)\}").expect("invalid macro reference regex"));

/// Query interface over a spec file, in rpm query-format syntax.
///
/// Production code uses [`RpmspecQuery`], tests use mockall-generated mocks.
pub trait SpecQuery {
    fn query(&self, queryformat: &str, specfile: &Path) -> Result<String, QueryError>;
}

/// Real query implementation shelling out to `rpmspec`.
pub struct RpmspecQuery;

impl SpecQuery for RpmspecQuery {
    fn query(&self, queryformat: &str, specfile: &Path) -> Result<String, QueryError> {
        tracing::debug!(queryformat, spec = %specfile.display(), "querying spec file");

        let output = Command::new("rpmspec")
            .args(["-q", "--srpm", "--qf", queryformat])
            .arg(specfile)
            .output()
            .map_err(|e| QueryError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| QueryError::InvalidUtf8 { source: e })
        } else {
            Err(QueryError::QueryFailed {
                queryformat: queryformat.to_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}

/// Resolve the archive name declared by the first `Source:`/`Source0:` line
/// of `specfile`.
///
/// Each `%{token}` reference in the declaration is expanded by querying the
/// spec itself; a query returning an empty string leaves the reference in
/// place. `Ok(None)` means the spec declares no source archive at all — the
/// caller decides whether that is fatal.
pub fn source_archive_name(
    specfile: &Path,
    query: &impl SpecQuery,
) -> Result<Option<String>, TarballError> {
    let content = std::fs::read_to_string(specfile).map_err(|e| TarballError::Read {
        path: specfile.to_path_buf(),
        source: e,
    })?;

    for line in content.lines() {
        let Some(captures) = SOURCE_LINE.captures(line) else {
            continue;
        };

        let declared = captures[1].to_owned();
        tracing::debug!(%declared, "found source archive declaration");

        let mut resolved = declared.clone();
        for macro_ref in MACRO_REF.captures_iter(&declared) {
            let value = query.query(&format!("%{{{}}}", &macro_ref[1]), specfile)?;
            if !value.is_empty() {
                resolved = resolved.replace(&macro_ref[0], &value);
            }
        }

        return Ok(Some(resolved));
    }

    Ok(None)
}

/// The `name-version` directory the archive contents are rooted at.
pub fn source_root_dir(specfile: &Path, query: &impl SpecQuery) -> Result<String, TarballError> {
    Ok(query.query("%{name}-%{version}", specfile)?)
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("rpmspec could not be executed — is it installed?")]
    NotFound { source: std::io::Error },

    #[error("rpmspec query {queryformat:?} failed:\n{stderr}")]
    QueryFailed { queryformat: String, stderr: String },

    #[error("rpmspec output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

#[derive(Debug, thiserror::Error)]
pub enum TarballError {
    #[error("failed to read spec file {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Query(#[from] QueryError),
}
