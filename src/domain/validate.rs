//! Validation and coercion of inbound product payloads.
//!
//! Write payloads arrive as raw JSON so that absent fields can be told apart
//! from supplied ones and so that numeric fields sent as strings (e.g.
//! `"price": "9.99"` from a form) can be coerced server-side. The same rules
//! apply on create and, per supplied field, on update. Validation always
//! runs before the repository is touched.

use crate::domain::product::{NewProduct, ProductPatch, DEFAULT_CATEGORY};
use serde_json::Value as JsonValue;

/// Validates a create payload into a record ready for insertion.
///
/// Every problem is collected before returning, so a payload missing both
/// `name` and `price` reports both fields in one rejection.
pub fn validate_create(payload: &JsonValue) -> Result<NewProduct, Vec<String>> {
    let obj = match payload.as_object() {
        Some(o) => o,
        None => return Err(vec!["request body must be a JSON object".to_string()]),
    };

    let mut errors: Vec<String> = Vec::new();

    let name = match supplied(obj, "name") {
        None => {
            errors.push("name is required".to_string());
            None
        }
        Some(v) => match coerce_text(v, "name") {
            Ok(s) if s.is_empty() => {
                errors.push("name is required".to_string());
                None
            }
            Ok(s) => Some(s),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    };

    let price = match supplied(obj, "price") {
        None => {
            errors.push("price is required".to_string());
            None
        }
        Some(v) => match coerce_price(v) {
            Ok(p) => Some(p),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    };

    let stock_quantity = match supplied(obj, "stock_quantity") {
        None => Some(0),
        Some(v) => match coerce_stock(v) {
            Ok(n) => Some(n),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    };

    let description = optional_text(obj, "description", "", &mut errors);
    let category = optional_text(obj, "category", DEFAULT_CATEGORY, &mut errors);
    let image_url = optional_text(obj, "image_url", "", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewProduct {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        price: price.unwrap_or_default(),
        category: category.unwrap_or_default(),
        stock_quantity: stock_quantity.unwrap_or_default(),
        image_url: image_url.unwrap_or_default(),
    })
}

/// Validates an update payload into a partial patch.
///
/// Fields that are absent stay `None` and are left untouched downstream. A
/// supplied `name` must still be non-blank after trimming; supplied numeric
/// fields follow the create rules.
pub fn validate_patch(payload: &JsonValue) -> Result<ProductPatch, Vec<String>> {
    let obj = match payload.as_object() {
        Some(o) => o,
        None => return Err(vec!["request body must be a JSON object".to_string()]),
    };

    let mut errors: Vec<String> = Vec::new();
    let mut patch = ProductPatch::default();

    if let Some(v) = supplied(obj, "name") {
        match coerce_text(v, "name") {
            Ok(s) if s.is_empty() => errors.push("name cannot be blank".to_string()),
            Ok(s) => patch.name = Some(s),
            Err(e) => errors.push(e),
        }
    }

    if let Some(v) = supplied(obj, "price") {
        match coerce_price(v) {
            Ok(p) => patch.price = Some(p),
            Err(e) => errors.push(e),
        }
    }

    if let Some(v) = supplied(obj, "stock_quantity") {
        match coerce_stock(v) {
            Ok(n) => patch.stock_quantity = Some(n),
            Err(e) => errors.push(e),
        }
    }

    if let Some(v) = supplied(obj, "description") {
        match coerce_text(v, "description") {
            Ok(s) => patch.description = Some(s),
            Err(e) => errors.push(e),
        }
    }

    if let Some(v) = supplied(obj, "category") {
        match coerce_text(v, "category") {
            // A category blanked out on update falls back to the default
            // rather than being stored empty.
            Ok(s) if s.is_empty() => patch.category = Some(DEFAULT_CATEGORY.to_string()),
            Ok(s) => patch.category = Some(s),
            Err(e) => errors.push(e),
        }
    }

    if let Some(v) = supplied(obj, "image_url") {
        match coerce_text(v, "image_url") {
            Ok(s) => patch.image_url = Some(s),
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(patch)
}

/// Explicit `null` is treated like an absent field.
fn supplied<'a>(obj: &'a serde_json::Map<String, JsonValue>, key: &str) -> Option<&'a JsonValue> {
    match obj.get(key) {
        Some(JsonValue::Null) | None => None,
        Some(v) => Some(v),
    }
}

fn optional_text(
    obj: &serde_json::Map<String, JsonValue>,
    key: &str,
    default: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match supplied(obj, key) {
        None => Some(default.to_string()),
        Some(v) => match coerce_text(v, key) {
            Ok(s) if s.is_empty() => Some(default.to_string()),
            Ok(s) => Some(s),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    }
}

fn coerce_text(v: &JsonValue, field: &str) -> Result<String, String> {
    match v.as_str() {
        Some(s) => Ok(s.trim().to_string()),
        None => Err(format!("{} must be a string", field)),
    }
}

fn coerce_price(v: &JsonValue) -> Result<f64, String> {
    let parsed = if let Some(n) = v.as_f64() {
        Some(n)
    } else if let Some(s) = v.as_str() {
        s.trim().parse::<f64>().ok()
    } else {
        None
    };
    match parsed {
        Some(p) if p.is_finite() => {
            if p < 0.0 {
                Err("price cannot be negative".to_string())
            } else {
                Ok(p)
            }
        }
        _ => Err("invalid price format".to_string()),
    }
}

fn coerce_stock(v: &JsonValue) -> Result<i32, String> {
    let parsed = if let Some(n) = v.as_i64() {
        Some(n)
    } else if let Some(s) = v.as_str() {
        s.trim().parse::<i64>().ok()
    } else {
        None
    };
    match parsed {
        None => Err("invalid stock_quantity format".to_string()),
        Some(n) if n < 0 => Err("stock_quantity cannot be negative".to_string()),
        Some(n) if n > i32::MAX as i64 => Err("stock_quantity out of range".to_string()),
        Some(n) => Ok(n as i32),
    }
}
