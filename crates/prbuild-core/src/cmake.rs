//! Build-variable extraction from CMake files.
//!
//! This is a single-pass line scanner, not a CMake parser: only canonical
//! single-line `set(NAME "VALUE")` assignments are recognized, with a
//! case-insensitive `set` and a quoted value. Conditional or multi-line
//! assignments are invisible to it — the projects this tool builds keep
//! their package name and version in exactly this form.

use regex::Regex;
use std::path::Path;

/// Return the first quoted value assigned to `name` in `file`, if any.
///
/// The captured value is trimmed of surrounding whitespace.
pub fn read_var(file: &Path, name: &str) -> crate::Result<Option<String>> {
    let pattern = format!(
        r#"^\s?[sS][eE][tT]\s?\(\s?{}\s+"([^"]+)"\s?\)\s?$"#,
        regex::escape(name)
    );
    let assignment = Regex::new(&pattern).map_err(|e| crate::Error::VarPattern {
        name: name.to_owned(),
        source: e,
    })?;

    let content = std::fs::read_to_string(file).map_err(|e| crate::Error::CmakeRead {
        path: file.to_path_buf(),
        source: e,
    })?;

    for line in content.lines() {
        if let Some(captures) = assignment.captures(line) {
            return Ok(Some(captures[1].trim().to_owned()));
        }
    }

    Ok(None)
}

/// As [`read_var`], but an absent or empty value is an error naming the variable.
pub fn read_required_var(file: &Path, name: &str) -> crate::Result<String> {
    match read_var(file, name)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(crate::Error::VarMissing {
            name: name.to_owned(),
            path: file.to_path_buf(),
        }),
    }
}
