//! In-memory product repository.
//!
//! Implements the same contract as the Postgres store, including ordering
//! and the stats aggregation. Backs the test suite and DB-less development
//! runs (`ALLOW_MEMORY_STORE=true`); contents vanish when the process exits.

use crate::domain::product::{CatalogStats, ListFilter, NewProduct, Product, ProductPatch};
use crate::storage::repository::ProductRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryProductRepository {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    // Ids are never reused, even after deletes.
    next_id: i32,
    products: Vec<Product>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, record: NewProduct) -> anyhow::Result<Product> {
        let mut state = self.inner.lock().await;
        state.next_id += 1;
        let product = Product {
            id: state.next_id,
            name: record.name,
            description: record.description,
            price: record.price,
            category: record.category,
            stock_quantity: record.stock_quantity,
            image_url: record.image_url,
            created_at: Utc::now(),
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Product>> {
        let state = self.inner.lock().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Product>> {
        let state = self.inner.lock().await;
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|p| filter.category.as_deref().map_or(true, |c| p.category == c))
            .cloned()
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        if let Some(limit) = filter.limit {
            products.truncate(limit.max(0) as usize);
        }
        Ok(products)
    }

    async fn count(&self, category: Option<&str>) -> anyhow::Result<i64> {
        let state = self.inner.lock().await;
        let count = state
            .products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .count();
        Ok(count as i64)
    }

    async fn list_distinct_categories(&self) -> anyhow::Result<Vec<String>> {
        let state = self.inner.lock().await;
        let categories: BTreeSet<String> = state
            .products
            .iter()
            .filter(|p| !p.category.is_empty())
            .map(|p| p.category.clone())
            .collect();
        Ok(categories.into_iter().collect())
    }

    async fn aggregate_stats(&self) -> anyhow::Result<CatalogStats> {
        let state = self.inner.lock().await;
        if state.products.is_empty() {
            return Ok(CatalogStats::empty());
        }

        let total_products = state.products.len() as i64;
        let total_stock: i64 = state.products.iter().map(|p| p.stock_quantity as i64).sum();
        let mean = state.products.iter().map(|p| p.price).sum::<f64>() / total_products as f64;
        let average_price = (mean * 100.0).round() / 100.0;

        let mut per_category_count: BTreeMap<String, i64> = BTreeMap::new();
        for p in &state.products {
            *per_category_count.entry(p.category.clone()).or_insert(0) += 1;
        }

        Ok(CatalogStats {
            total_products,
            total_categories: per_category_count.len() as i64,
            total_stock,
            average_price,
            per_category_count,
        })
    }

    async fn update(&self, id: i32, patch: &ProductPatch) -> anyhow::Result<Option<Product>> {
        let mut state = self.inner.lock().await;
        let product = match state.products.iter_mut().find(|p| p.id == id) {
            Some(p) => p,
            None => return Ok(None),
        };
        if let Some(name) = &patch.name {
            product.name = name.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = &patch.category {
            product.category = category.clone();
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(image_url) = &patch.image_url {
            product.image_url = image_url.clone();
        }
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<Option<Product>> {
        let mut state = self.inner.lock().await;
        match state.products.iter().position(|p| p.id == id) {
            Some(idx) => Ok(Some(state.products.remove(idx))),
            None => Ok(None),
        }
    }
}
