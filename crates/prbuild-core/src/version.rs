//! Version template resolution.
//!
//! A version template looks like
//! `${LIBZYPP_MAJOR}.${LIBZYPP_MINOR}.${LIBZYPP_PATCH}`; every placeholder
//! is looked up in the project's version file and replaced.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("invalid placeholder regex"));

/// Expand every `${NAME}` placeholder in `template` from `version_file`.
///
/// Resolution is a single pass over the placeholders found in the input:
/// a looked-up value containing further placeholders is not re-expanded.
/// A placeholder whose variable is absent or empty is an error; a template
/// without placeholders passes through unchanged.
pub fn resolve_template(template: &str, version_file: &Path) -> crate::Result<String> {
    let mut resolved = template.to_owned();

    for placeholder in PLACEHOLDER.captures_iter(template) {
        let name = &placeholder[1];
        tracing::debug!(name, file = %version_file.display(), "resolving version variable");

        let value = crate::cmake::read_required_var(version_file, name)?;
        tracing::debug!(name, %value, "resolved version variable");

        resolved = resolved.replace(&format!("${{{name}}}"), &value);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn version_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn resolves_major_minor_patch() {
        let file = version_file(
            "SET(MAJOR \"1\")\nSET(MINOR \"2\")\nSET(PATCH \"3\")\n",
        );
        let resolved =
            resolve_template("${MAJOR}.${MINOR}.${PATCH}", file.path()).unwrap();
        assert_eq!(resolved, "1.2.3");
    }

    #[test]
    fn resolved_string_is_a_fixed_point() {
        let file = version_file("SET(MAJOR \"1\")\n");
        let once = resolve_template("${MAJOR}.0", file.path()).unwrap();
        let twice = resolve_template(&once, file.path()).unwrap();
        assert_eq!(once, "1.0");
        assert_eq!(once, twice);
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let file = version_file("");
        let resolved = resolve_template("17.2.0", file.path()).unwrap();
        assert_eq!(resolved, "17.2.0");
    }

    #[test]
    fn repeated_placeholder_replaced_everywhere() {
        let file = version_file("SET(V \"9\")\n");
        let resolved = resolve_template("${V}.${V}", file.path()).unwrap();
        assert_eq!(resolved, "9.9");
    }

    #[test]
    fn missing_variable_errors_with_name() {
        let file = version_file("SET(MAJOR \"1\")\n");
        let err = resolve_template("${MAJOR}.${MINOR}", file.path())
            .unwrap_err()
            .to_string();
        assert!(err.contains("MINOR"), "got: {err}");
    }
}
