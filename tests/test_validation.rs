//! Validation & coercion rules, exercised directly against the engine.

use catalog_service::domain::validate::{validate_create, validate_patch};
use serde_json::json;

#[test]
fn create_applies_defaults_for_optional_fields() {
    let record = validate_create(&json!({ "name": "Mug", "price": 9.99 })).unwrap();
    assert_eq!(record.name, "Mug");
    assert_eq!(record.price, 9.99);
    assert_eq!(record.description, "");
    assert_eq!(record.category, "Uncategorized");
    assert_eq!(record.stock_quantity, 0);
    assert_eq!(record.image_url, "");
}

#[test]
fn create_trims_text_fields() {
    let record = validate_create(&json!({
        "name": "  Mug  ",
        "price": 1.0,
        "description": " plain white ",
        "category": " Kitchen ",
        "image_url": " https://example.com/mug.png "
    }))
    .unwrap();
    assert_eq!(record.name, "Mug");
    assert_eq!(record.description, "plain white");
    assert_eq!(record.category, "Kitchen");
    assert_eq!(record.image_url, "https://example.com/mug.png");
}

#[test]
fn create_reports_all_missing_required_fields_together() {
    let errors = validate_create(&json!({ "description": "no name, no price" })).unwrap_err();
    assert!(errors.iter().any(|e| e.contains("name")), "{:?}", errors);
    assert!(errors.iter().any(|e| e.contains("price")), "{:?}", errors);
    assert_eq!(errors.len(), 2);
}

#[test]
fn create_rejects_blank_name() {
    let errors = validate_create(&json!({ "name": "   ", "price": 1.0 })).unwrap_err();
    assert!(errors.iter().any(|e| e.contains("name")));
}

#[test]
fn create_coerces_numeric_strings() {
    let record = validate_create(&json!({
        "name": "Mug",
        "price": "9.99",
        "stock_quantity": "5"
    }))
    .unwrap();
    assert_eq!(record.price, 9.99);
    assert_eq!(record.stock_quantity, 5);
}

#[test]
fn create_rejects_unparseable_price() {
    let errors = validate_create(&json!({ "name": "Mug", "price": "cheap" })).unwrap_err();
    assert_eq!(errors, vec!["invalid price format".to_string()]);
}

#[test]
fn create_rejects_negative_price() {
    let errors = validate_create(&json!({ "name": "Mug", "price": -0.01 })).unwrap_err();
    assert_eq!(errors, vec!["price cannot be negative".to_string()]);
}

#[test]
fn create_rejects_negative_stock() {
    let errors =
        validate_create(&json!({ "name": "Mug", "price": 1.0, "stock_quantity": -1 })).unwrap_err();
    assert_eq!(errors, vec!["stock_quantity cannot be negative".to_string()]);
}

#[test]
fn create_rejects_fractional_stock() {
    let errors =
        validate_create(&json!({ "name": "Mug", "price": 1.0, "stock_quantity": 2.5 })).unwrap_err();
    assert_eq!(errors, vec!["invalid stock_quantity format".to_string()]);
}

#[test]
fn create_treats_null_as_absent() {
    let record = validate_create(&json!({
        "name": "Mug",
        "price": 1.0,
        "category": null,
        "description": null
    }))
    .unwrap();
    assert_eq!(record.category, "Uncategorized");
    assert_eq!(record.description, "");
}

#[test]
fn create_rejects_non_object_payload() {
    assert!(validate_create(&json!([1, 2, 3])).is_err());
    assert!(validate_create(&json!("mug")).is_err());
}

#[test]
fn patch_keeps_absent_fields_none() {
    let patch = validate_patch(&json!({ "price": 19.5 })).unwrap();
    assert_eq!(patch.price, Some(19.5));
    assert!(patch.name.is_none());
    assert!(patch.description.is_none());
    assert!(patch.category.is_none());
    assert!(patch.stock_quantity.is_none());
    assert!(patch.image_url.is_none());
}

#[test]
fn patch_of_empty_object_is_empty() {
    let patch = validate_patch(&json!({})).unwrap();
    assert!(patch.is_empty());
}

#[test]
fn patch_rejects_blank_name() {
    let errors = validate_patch(&json!({ "name": "  " })).unwrap_err();
    assert_eq!(errors, vec!["name cannot be blank".to_string()]);
}

#[test]
fn patch_applies_same_numeric_rules_as_create() {
    assert!(validate_patch(&json!({ "price": "cheap" })).is_err());
    assert!(validate_patch(&json!({ "price": -1 })).is_err());
    assert!(validate_patch(&json!({ "stock_quantity": -5 })).is_err());

    let patch = validate_patch(&json!({ "price": "2.50", "stock_quantity": "7" })).unwrap();
    assert_eq!(patch.price, Some(2.5));
    assert_eq!(patch.stock_quantity, Some(7));
}

#[test]
fn patch_collects_every_invalid_field() {
    let errors = validate_patch(&json!({
        "name": " ",
        "price": "x",
        "stock_quantity": -2
    }))
    .unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn patch_blank_category_falls_back_to_default() {
    let patch = validate_patch(&json!({ "category": "  " })).unwrap();
    assert_eq!(patch.category.as_deref(), Some("Uncategorized"));
}
