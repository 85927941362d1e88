//! Postgres-backed product repository.
//!
//! One table, `products`, created on connect if missing. Every write is a
//! single `INSERT`/`UPDATE`/`DELETE ... RETURNING` statement, so each use
//! case commits or rolls back atomically inside the store.

use crate::domain::product::{CatalogStats, ListFilter, NewProduct, Product, ProductPatch};
use crate::storage::repository::ProductRepository;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, QueryBuilder, Row};
use std::collections::BTreeMap;

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, category, stock_quantity, image_url, created_at";

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Connects to Postgres and makes sure the `products` table exists.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price DOUBLE PRECISION NOT NULL,
                category TEXT NOT NULL DEFAULT 'Uncategorized',
                stock_quantity INTEGER NOT NULL DEFAULT 0,
                image_url TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Wraps an existing pool (used by tests that manage their own schema).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, record: NewProduct) -> anyhow::Result<Product> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, price, category, stock_quantity, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .bind(&record.category)
        .bind(record.stock_quantity)
        .bind(&record.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Product>> {
        let mut qb: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
        if let Some(category) = &filter.category {
            qb.push(" WHERE category = ").push_bind(category);
        }
        // The id tiebreak keeps the order deterministic when rows share a
        // creation timestamp.
        qb.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = filter.limit {
            qb.push(" LIMIT ").push_bind(limit);
        }
        let products = qb.build_query_as::<Product>().fetch_all(&self.pool).await?;
        Ok(products)
    }

    async fn count(&self, category: Option<&str>) -> anyhow::Result<i64> {
        let count: i64 = match category {
            Some(category) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category = $1")
                    .bind(category)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM products")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count)
    }

    async fn list_distinct_categories(&self) -> anyhow::Result<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM products
             WHERE category IS NOT NULL AND category <> ''
             ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn aggregate_stats(&self) -> anyhow::Result<CatalogStats> {
        let totals = sqlx::query(
            "SELECT COUNT(*) AS total_products,
                    COUNT(DISTINCT category) AS total_categories,
                    COALESCE(SUM(stock_quantity), 0)::BIGINT AS total_stock,
                    COALESCE(ROUND(AVG(price)::numeric, 2), 0)::DOUBLE PRECISION AS average_price
             FROM products",
        )
        .fetch_one(&self.pool)
        .await?;

        let mut per_category_count = BTreeMap::new();
        let rows = sqlx::query(
            "SELECT category, COUNT(*) AS product_count
             FROM products GROUP BY category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;
        for row in rows {
            per_category_count.insert(
                row.try_get::<String, _>("category")?,
                row.try_get::<i64, _>("product_count")?,
            );
        }

        Ok(CatalogStats {
            total_products: totals.try_get("total_products")?,
            total_categories: totals.try_get("total_categories")?,
            total_stock: totals.try_get("total_stock")?,
            average_price: totals.try_get("average_price")?,
            per_category_count,
        })
    }

    async fn update(&self, id: i32, patch: &ProductPatch) -> anyhow::Result<Option<Product>> {
        if patch.is_empty() {
            // Nothing to change; still report whether the row exists.
            return self.get_by_id(id).await;
        }

        let mut qb: QueryBuilder<sqlx::Postgres> = QueryBuilder::new("UPDATE products SET ");
        {
            let mut fields = qb.separated(", ");
            if let Some(name) = &patch.name {
                fields.push("name = ").push_bind_unseparated(name);
            }
            if let Some(description) = &patch.description {
                fields.push("description = ").push_bind_unseparated(description);
            }
            if let Some(price) = patch.price {
                fields.push("price = ").push_bind_unseparated(price);
            }
            if let Some(category) = &patch.category {
                fields.push("category = ").push_bind_unseparated(category);
            }
            if let Some(stock_quantity) = patch.stock_quantity {
                fields
                    .push("stock_quantity = ")
                    .push_bind_unseparated(stock_quantity);
            }
            if let Some(image_url) = &patch.image_url {
                fields.push("image_url = ").push_bind_unseparated(image_url);
            }
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {}", PRODUCT_COLUMNS));

        let product = qb
            .build_query_as::<Product>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }
}
