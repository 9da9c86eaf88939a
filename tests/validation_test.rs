//! Integration tests for the argument guards
//!
//! These tests verify that missing and empty arguments are reported as
//! distinct errors and that valid arguments pass through untouched.

use catalogtui::utils::validation::{check_not_blank, check_not_empty, check_not_null};
use catalogtui::ArgumentError;

#[test]
fn test_check_not_empty_rejects_empty_list() {
    let empty: Vec<i32> = Vec::new();
    let result = check_not_empty(Some(&empty), "source is empty");
    assert_eq!(
        result,
        Err(ArgumentError::InvalidArgument("source is empty".to_string()))
    );
}

#[test]
fn test_check_not_empty_rejects_missing_list() {
    let result = check_not_empty::<Vec<i32>>(None, "source == null");
    assert_eq!(
        result,
        Err(ArgumentError::NullArgument("source == null".to_string()))
    );
}

#[test]
fn test_check_not_empty_returns_same_reference() {
    let values = vec![1, 2, 3];
    let checked = check_not_empty(Some(&values), "values").unwrap();
    assert!(std::ptr::eq(checked, &values), "Should pass the reference through");
}

#[test]
fn test_check_not_empty_keeps_owned_collection() {
    let values = vec!["a".to_string()];
    let checked = check_not_empty(Some(values), "values").unwrap();
    assert_eq!(checked, vec!["a".to_string()]);
}

#[test]
fn test_check_not_blank_variants() {
    let cases = vec![
        (None, Err(ArgumentError::NullArgument("name".to_string()))),
        (Some(""), Err(ArgumentError::InvalidArgument("name".to_string()))),
        (Some("Color"), Ok("Color")),
    ];

    for (input, expected) in cases {
        assert_eq!(check_not_blank(input, "name"), expected, "input: {:?}", input);
    }
}

#[test]
fn test_check_not_null_passes_through() {
    let path = std::path::PathBuf::from("/tmp/catalog.json");
    let checked = check_not_null(Some(path.clone()), "catalog").unwrap();
    assert_eq!(checked, path);
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let null = check_not_null::<u8>(None, "x").unwrap_err();
    let invalid = check_not_blank(Some(""), "x").unwrap_err();

    assert!(matches!(null, ArgumentError::NullArgument(_)));
    assert!(matches!(invalid, ArgumentError::InvalidArgument(_)));
    assert_ne!(null, invalid);
    assert_eq!(invalid.to_string(), "invalid argument: x");
}
