//! Integration tests for the option value model

use catalogtui::OptionValue;
use std::collections::HashSet;

#[test]
fn test_equal_fields_make_interchangeable_values() {
    let samples = vec![
        (1, "Color", "Blue"),
        (2, "Size", "Small"),
        (0, "", ""),
        (-5, "Matériau", "Laine"),
    ];

    for (id, name, value) in samples {
        let a = OptionValue::new(id, name, value);
        let b = OptionValue::new(id, name, value);
        assert_eq!(a, b, "Values built from ({}, {}, {}) should be equal", id, name, value);

        let set: HashSet<OptionValue> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1, "Equal values should hash alike");
    }
}

#[test]
fn test_accessors_return_fields() {
    let value = OptionValue::new(12, "Size", "Large");
    assert_eq!(value.option_id(), Some(12));
    assert_eq!(value.name(), Some("Size"));
    assert_eq!(value.value(), Some("Large"));
}

#[test]
fn test_partially_absent_values_compare_safely() {
    let only_name: OptionValue = serde_json::from_str(r#"{"name": "Color"}"#).unwrap();
    let full = OptionValue::new(1, "Color", "Blue");

    assert_ne!(only_name, full);
    assert_ne!(full, only_name);
    assert_eq!(only_name, only_name.clone());
}

#[test]
fn test_serializes_with_catalog_keys() {
    let json = serde_json::to_value(OptionValue::new(3, "Color", "Red")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"option_id": 3, "name": "Color", "value": "Red"})
    );
}
