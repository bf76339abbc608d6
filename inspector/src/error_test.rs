use super::*;

#[test]
fn display_is_the_bare_message() {
    assert_eq!(StorageError::access("no tab").to_string(), "no tab");
    assert_eq!(StorageError::parse("Invalid JSON format").to_string(), "Invalid JSON format");
    assert_eq!(StorageError::validation("Key is required").to_string(), "Key is required");
}

#[test]
fn only_access_errors_report_is_access() {
    assert!(StorageError::access("x").is_access());
    assert!(!StorageError::parse("x").is_access());
    assert!(!StorageError::validation("x").is_access());
}
