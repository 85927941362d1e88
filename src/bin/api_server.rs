// src/bin/api_server.rs

use axum::Router;
use catalog_service::infra::config;
use catalog_service::storage::seed;
use catalog_service::transport;
use catalog_service::CatalogService;
use catalog_service::MemoryProductRepository;
use catalog_service::PgProductRepository;
use catalog_service::ProductRepository;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Repository Initialization ---
    println!("> Initializing product repository...");
    let repo: Arc<dyn ProductRepository> = match config::database_url() {
        Some(database_url) => {
            let repo = PgProductRepository::connect(&database_url).await?;
            if config::seed_sample_data() {
                let inserted = seed::ensure_sample_data(repo.pool()).await?;
                println!("> Seed loader inserted {} sample product(s).", inserted);
            }
            println!("> Connected to Postgres.");
            Arc::new(repo)
        }
        None if config::allow_memory_store() => {
            println!("> DATABASE_URL not set; using the in-memory store (ALLOW_MEMORY_STORE=true).");
            Arc::new(MemoryProductRepository::new())
        }
        None => {
            return Err(
                "DATABASE_URL must be set (or ALLOW_MEMORY_STORE=true for an in-memory catalog)"
                    .into(),
            );
        }
    };

    let catalog = Arc::new(CatalogService::new(repo));
    let app_state = transport::http::AppState { catalog };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = transport::http::create_router(app_state);
    let base_path = config::api_base_path();
    let app = if base_path.is_empty() {
        routes
    } else {
        println!("> Mounting routes under base path '{}'.", base_path);
        Router::new().nest(&base_path, routes)
    };
    let app = app
        .fallback(transport::http::handler_404)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(CatchPanicLayer::custom(transport::http::handler_panic));

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> Catalog API listening on http://{}", bind_addr);
    println!("> Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    println!("> Graceful shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        eprintln!("> Failed to listen for Ctrl+C; running until killed.");
        std::future::pending::<()>().await;
    }
    println!("\n> Shutdown signal received (Ctrl+C).");
}
