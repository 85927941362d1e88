//! Abstract persistence boundary for the product catalog.

use crate::domain::product::{CatalogStats, ListFilter, NewProduct, Product, ProductPatch};
use async_trait::async_trait;

/// Contract every product store implements.
///
/// Callers hand in records that already passed validation; the store is
/// responsible for id/timestamp assignment, ordering and aggregation.
/// Missing rows are reported as `Ok(None)`, not as errors; an `Err` always
/// means the store itself failed.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a validated record. The store assigns `id` and `created_at`
    /// and returns the stored row.
    async fn create(&self, record: NewProduct) -> anyhow::Result<Product>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Product>>;

    /// Lists products ordered newest-first (`created_at` descending, id as
    /// tiebreak). Applies the filter's exact-match category and row limit
    /// when present; no limit means all rows.
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Product>>;

    /// Row count for the given category filter, ignoring any limit.
    async fn count(&self, category: Option<&str>) -> anyhow::Result<i64>;

    /// Distinct non-empty categories, sorted lexicographically.
    async fn list_distinct_categories(&self) -> anyhow::Result<Vec<String>>;

    async fn aggregate_stats(&self) -> anyhow::Result<CatalogStats>;

    /// Applies only the fields present in the patch and leaves the rest
    /// untouched. Returns `None` when the id does not exist.
    async fn update(&self, id: i32, patch: &ProductPatch) -> anyhow::Result<Option<Product>>;

    /// Hard delete. Returns the removed row when the id existed.
    async fn delete(&self, id: i32) -> anyhow::Result<Option<Product>>;
}
