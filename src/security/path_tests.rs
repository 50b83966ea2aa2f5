use crate::security::PathSanitizer;

#[test]
fn test_valid_simple_path() {
    let result = PathSanitizer::sanitize("src/main.rs");
    assert_eq!(result.unwrap(), "src/main.rs");
}

#[test]
fn test_hidden_components_allowed() {
    let result = PathSanitizer::sanitize(".github/workflows/ci.yml");
    assert_eq!(result.unwrap(), ".github/workflows/ci.yml");
}

#[test]
fn test_reject_parent_directory_traversal() {
    let result = PathSanitizer::sanitize("../etc/passwd");
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Parent directory traversal")
    );
}

#[test]
fn test_reject_parent_in_middle() {
    let result = PathSanitizer::sanitize("project/../../outside");
    assert!(result.is_err());
}

#[test]
fn test_reject_backslash_traversal() {
    let result = PathSanitizer::sanitize("project/..\\outside");
    assert!(result.is_err());
}

#[test]
fn test_reject_absolute_unix_path() {
    let result = PathSanitizer::sanitize("/etc/passwd");
    assert!(result.unwrap_err().to_string().contains("Absolute path"));
}

#[test]
fn test_reject_empty_path() {
    let result = PathSanitizer::sanitize("");
    assert!(result.unwrap_err().to_string().contains("Empty path"));
}

#[test]
fn test_normalize_current_dir_markers() {
    let result = PathSanitizer::sanitize("./src/./main.rs");
    assert_eq!(result.unwrap(), "src/main.rs");
}

#[test]
fn test_reject_only_current_dir() {
    let result = PathSanitizer::sanitize("./.");
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("No valid components")
    );
}

#[test]
fn test_path_with_spaces_and_unicode() {
    assert_eq!(
        PathSanitizer::sanitize("My Documents/文档/readme.md").unwrap(),
        "My Documents/文档/readme.md"
    );
}
