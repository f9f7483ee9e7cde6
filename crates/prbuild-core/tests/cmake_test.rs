use prbuild_core::cmake;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmake_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn reads_quoted_value() {
    let file = cmake_file("SET(PACKAGE \"libzypp\")\n");
    let value = cmake::read_var(file.path(), "PACKAGE").unwrap();
    assert_eq!(value.as_deref(), Some("libzypp"));
}

#[test]
fn set_keyword_is_case_insensitive() {
    let file = cmake_file("set(PACKAGE \"libzypp\")\n");
    let value = cmake::read_var(file.path(), "PACKAGE").unwrap();
    assert_eq!(value.as_deref(), Some("libzypp"));
}

#[test]
fn variable_name_is_case_sensitive() {
    let file = cmake_file("SET(PACKAGE \"libzypp\")\n");
    let value = cmake::read_var(file.path(), "package").unwrap();
    assert_eq!(value, None);
}

#[test]
fn first_match_wins() {
    let file = cmake_file("SET(V \"first\")\nSET(V \"second\")\n");
    let value = cmake::read_var(file.path(), "V").unwrap();
    assert_eq!(value.as_deref(), Some("first"));
}

#[test]
fn value_has_no_surrounding_whitespace() {
    let file = cmake_file("SET(VERSION \"  1.2.3  \")\n");
    let value = cmake::read_var(file.path(), "VERSION").unwrap();
    assert_eq!(value.as_deref(), Some("1.2.3"));
}

#[test]
fn unquoted_assignment_is_not_matched() {
    // The scanner's documented contract: quoted single-line assignments only
    let file = cmake_file("SET(PACKAGE libzypp)\n");
    let value = cmake::read_var(file.path(), "PACKAGE").unwrap();
    assert_eq!(value, None);
}

#[test]
fn multi_line_assignment_is_not_matched() {
    let file = cmake_file("SET(PACKAGE\n  \"libzypp\")\n");
    let value = cmake::read_var(file.path(), "PACKAGE").unwrap();
    assert_eq!(value, None);
}

#[test]
fn embedded_assignment_mid_line_is_not_matched() {
    let file = cmake_file("if(FOO) SET(PACKAGE \"libzypp\") endif()\n");
    let value = cmake::read_var(file.path(), "PACKAGE").unwrap();
    assert_eq!(value, None);
}

#[test]
fn name_with_regex_metacharacters_is_literal() {
    let file = cmake_file("SET(A.B \"x\")\nSET(AxB \"y\")\n");
    let value = cmake::read_var(file.path(), "A.B").unwrap();
    assert_eq!(value.as_deref(), Some("x"));
}

#[test]
fn required_missing_errors_with_variable_name() {
    let file = cmake_file("SET(OTHER \"value\")\n");
    let err = cmake::read_required_var(file.path(), "PACKAGE")
        .unwrap_err()
        .to_string();
    assert!(err.contains("PACKAGE"), "got: {err}");
}

#[test]
fn required_whitespace_only_value_errors() {
    let file = cmake_file("SET(PACKAGE \" \")\n");
    let result = cmake::read_required_var(file.path(), "PACKAGE");
    assert!(result.is_err());
}

#[test]
fn unreadable_file_errors() {
    let result = cmake::read_var(std::path::Path::new("/nonexistent/CMakeLists.txt"), "PACKAGE");
    assert!(result.is_err());
}
