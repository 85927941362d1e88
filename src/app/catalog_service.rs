//! Catalog use cases.
//!
//! This module sits between the HTTP surface and the product store. Each use
//! case validates its input (for writes), performs at most one repository
//! write, and returns a typed result. Errors never escape as panics or raw
//! storage failures: everything is folded into `CatalogError`, and the HTTP
//! surface owns the sole mapping from error kind to status code.

use crate::domain::product::{CatalogStats, ListFilter, Product};
use crate::domain::validate;
use crate::storage::repository::ProductRepository;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum CatalogError {
    /// Malformed or out-of-range input. The store is never touched; each
    /// entry names one offending field.
    Validation(Vec<String>),
    /// The referenced product id does not exist.
    NotFound(i32),
    /// Connectivity, constraint, or unexpected store failure.
    Storage(anyhow::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation(reasons) => write!(f, "{}", reasons.join(", ")),
            CatalogError::NotFound(id) => write!(f, "Product {} not found", id),
            CatalogError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<anyhow::Error> for CatalogError {
    fn from(e: anyhow::Error) -> Self {
        CatalogError::Storage(e)
    }
}

/// Result of the unfiltered/filtered listing: the returned page plus the
/// full row count for the same query when the caller asked for a capped page.
#[derive(Debug)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total: Option<i64>,
}

/// Delete confirmation; carries the removed product's name for the caller.
#[derive(Debug)]
pub struct DeletedProduct {
    pub id: i32,
    pub name: String,
}

pub struct CatalogService {
    repo: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Lists products newest-first, optionally filtered by exact category
    /// and capped to `limit` rows.
    pub async fn list_products(
        &self,
        category: Option<String>,
        limit: Option<i64>,
    ) -> Result<ProductListing, CatalogError> {
        let filter = ListFilter {
            category: category.clone(),
            limit,
        };
        let products = self.repo.list(&filter).await?;
        // Only a capped page needs the separate total row count.
        let total = match limit {
            Some(_) => Some(self.repo.count(category.as_deref()).await?),
            None => None,
        };
        Ok(ProductListing { products, total })
    }

    pub async fn get_product(&self, id: i32) -> Result<Product, CatalogError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Exact-match, case-sensitive category listing, newest-first.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let filter = ListFilter {
            category: Some(category.to_string()),
            limit: None,
        };
        Ok(self.repo.list(&filter).await?)
    }

    pub async fn create_product(&self, payload: &JsonValue) -> Result<Product, CatalogError> {
        let record = validate::validate_create(payload).map_err(CatalogError::Validation)?;
        Ok(self.repo.create(record).await?)
    }

    /// Partial update: only the fields supplied in the payload change.
    pub async fn update_product(
        &self,
        id: i32,
        payload: &JsonValue,
    ) -> Result<Product, CatalogError> {
        let patch = validate::validate_patch(payload).map_err(CatalogError::Validation)?;
        self.repo
            .update(id, &patch)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    pub async fn delete_product(&self, id: i32) -> Result<DeletedProduct, CatalogError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;
        Ok(DeletedProduct {
            id: removed.id,
            name: removed.name,
        })
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.repo.list_distinct_categories().await?)
    }

    pub async fn stats(&self) -> Result<CatalogStats, CatalogError> {
        Ok(self.repo.aggregate_stats().await?)
    }

    /// Total product count; doubles as the health probe's store check.
    pub async fn product_count(&self) -> Result<i64, CatalogError> {
        Ok(self.repo.count(None).await?)
    }
}
