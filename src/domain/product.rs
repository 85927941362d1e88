//! Catalog domain types: the product entity and the shapes that move
//! through the repository boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Category assigned when a create payload leaves the field out or blank.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A stored catalog row. `id` and `created_at` are assigned by the store and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i32,
    pub image_url: String,
    /// ISO-8601 on the wire; governs the default newest-first listing order.
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// A fully-validated record ready for insertion. Only the validation engine
/// produces these, so a `NewProduct` always satisfies the catalog invariants
/// (`price >= 0`, `stock_quantity >= 0`, non-blank name, non-empty category).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i32,
    pub image_url: String,
}

/// Partial update payload. `None` means the field was not supplied and must
/// be left untouched; there are no in-band sentinel values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock_quantity.is_none()
            && self.image_url.is_none()
    }
}

/// Listing filter. The category match is exact (case-sensitive) equality;
/// the limit caps the returned row count when present.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// Aggregate block served by `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogStats {
    pub total_products: i64,
    pub total_categories: i64,
    pub total_stock: i64,
    /// Mean of `price` over all rows, rounded to 2 decimal places (0 when
    /// the catalog is empty).
    pub average_price: f64,
    /// Row count per distinct category, keyed by category name.
    #[schema(value_type = Object)]
    pub per_category_count: BTreeMap<String, i64>,
}

impl CatalogStats {
    pub fn empty() -> Self {
        CatalogStats {
            total_products: 0,
            total_categories: 0,
            total_stock: 0,
            average_price: 0.0,
            per_category_count: BTreeMap::new(),
        }
    }
}
