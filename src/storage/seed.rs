//! Idempotent sample-data loader.
//!
//! Populates an empty catalog with a handful of fixture products so a fresh
//! deployment has something to browse. Runs once at server startup, never as
//! part of request handling; products already present (matched by name) are
//! left alone, so repeated startups do not duplicate rows.

use sqlx::PgPool;

struct SampleProduct {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    stock_quantity: i32,
    image_url: &'static str,
}

const SAMPLE_PRODUCTS: &[SampleProduct] = &[
    SampleProduct {
        name: "Laptop Pro",
        description: "High-performance laptop for professionals",
        price: 1299.99,
        category: "Electronics",
        stock_quantity: 15,
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=300",
    },
    SampleProduct {
        name: "Smartphone X",
        description: "Latest smartphone with amazing camera",
        price: 899.99,
        category: "Electronics",
        stock_quantity: 25,
        image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=300",
    },
    SampleProduct {
        name: "Coffee Maker",
        description: "Automatic coffee maker for perfect brew",
        price: 129.99,
        category: "Home",
        stock_quantity: 8,
        image_url: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=300",
    },
    SampleProduct {
        name: "Running Shoes",
        description: "Comfortable running shoes for daily exercise",
        price: 89.99,
        category: "Sports",
        stock_quantity: 30,
        image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=300",
    },
];

/// Inserts any missing fixture products inside one transaction and returns
/// how many rows were added.
pub async fn ensure_sample_data(pool: &PgPool) -> anyhow::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted: u64 = 0;

    for sample in SAMPLE_PRODUCTS {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE name = $1)")
                .bind(sample.name)
                .fetch_one(tx.as_mut())
                .await?;
        if exists {
            continue;
        }

        sqlx::query(
            "INSERT INTO products (name, description, price, category, stock_quantity, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(sample.name)
        .bind(sample.description)
        .bind(sample.price)
        .bind(sample.category)
        .bind(sample.stock_quantity)
        .bind(sample.image_url)
        .execute(tx.as_mut())
        .await?;
        inserted += 1;
    }

    tx.commit().await?;
    Ok(inserted)
}
