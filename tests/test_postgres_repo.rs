//! Postgres repository test. Needs a live database; set `DATABASE_URL` to
//! run it, otherwise it skips. The test cleans up the rows it creates, so it
//! can share a database with a running dev server.

use catalog_service::domain::product::ListFilter;
use catalog_service::storage::seed;
use catalog_service::{PgProductRepository, ProductRepository};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

#[tokio::test]
async fn postgres_roundtrip_update_delete() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping postgres_roundtrip_update_delete");
        return Ok(());
    };

    let repo = PgProductRepository::connect(&database_url).await?;
    let category = unique_name("it-cat");

    let record = catalog_service::domain::validate::validate_create(&json!({
        "name": unique_name("it-mug"),
        "price": "9.99",
        "category": category,
        "stock_quantity": 4
    }))
    .map_err(|e| e.join(", "))?;
    let created = repo.create(record).await?;
    assert!(created.id > 0);
    assert_eq!(created.price, 9.99);
    assert_eq!(created.category, category);

    // Round-trips through the row mapping unchanged.
    let fetched = repo.get_by_id(created.id).await?.expect("row should exist");
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.stock_quantity, 4);

    // Category listing sees exactly the one row, newest first.
    let listed = repo
        .list(&ListFilter {
            category: Some(category.clone()),
            limit: None,
        })
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(repo.count(Some(&category)).await?, 1);

    // Partial update touches only the supplied columns.
    let patch = catalog_service::domain::validate::validate_patch(&json!({ "price": 12.5 }))
        .map_err(|e| e.join(", "))?;
    let updated = repo.update(created.id, &patch).await?.expect("row should exist");
    assert_eq!(updated.price, 12.5);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.created_at, created.created_at);

    // Stats include the row; exact totals depend on shared data, so only
    // check the per-category slice this test owns.
    let stats = repo.aggregate_stats().await?;
    assert!(stats.total_products >= 1);
    assert_eq!(stats.per_category_count.get(&category), Some(&1));
    assert!(repo.list_distinct_categories().await?.contains(&category));

    // Hard delete, then the id is gone for good.
    let removed = repo.delete(created.id).await?.expect("row should exist");
    assert_eq!(removed.id, created.id);
    assert!(repo.get_by_id(created.id).await?.is_none());
    assert!(repo.delete(created.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn seed_loader_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping seed_loader_is_idempotent");
        return Ok(());
    };

    let repo = PgProductRepository::connect(&database_url).await?;

    // Whatever the first pass inserted, a second pass must add nothing.
    seed::ensure_sample_data(repo.pool()).await?;
    let inserted_again = seed::ensure_sample_data(repo.pool()).await?;
    assert_eq!(inserted_again, 0);

    Ok(())
}
