use crate::domain::product::{CatalogStats, Product};
use crate::transport::http::handlers::{categories, health, products, stats};
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::list_by_category_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler,
        categories::list_categories_handler,
        stats::stats_handler
    ),
    components(schemas(ApiResponse, Product, CatalogStats))
)]
#[allow(dead_code)]
pub struct ApiDoc;

/// Builds the catalog route table.
///
/// `/products/category/{category}` must resolve to the by-category listing
/// and never be parsed as a product id; axum's matcher prefers the literal
/// `category` segment over the parametrized `/products/{id}` sibling, so the
/// two routes coexist safely.
///
/// No fallback is attached here so the table can be nested under an optional
/// base path; callers add [`handler_404`] at the outermost router.
pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .route(
            "/products/category/:category",
            get(products::list_by_category_handler),
        )
        .route("/categories", get(categories::list_categories_handler))
        .route("/stats", get(stats::stats_handler))
        .with_state(app_state)
}

/// Uniform 404 envelope for unmatched routes.
pub async fn handler_404() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::err("route not found")),
    )
}

/// Last-resort conversion of a panicking handler into the generic 500
/// envelope; wired into `CatchPanicLayer` so one bad request cannot take the
/// process down. The panic detail stays in the server log.
pub fn handler_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    use axum::response::IntoResponse;

    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    eprintln!("> Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::err("internal server error")),
    )
        .into_response()
}
