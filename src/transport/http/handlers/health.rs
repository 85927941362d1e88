use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store reachable)"),
        (status = 503, description = "Service is unhealthy (store unreachable)")
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    // A real repository call, so the probe covers store connectivity too.
    match state.catalog.product_count().await {
        Ok(products_count) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "healthy",
                "message": "Catalog server is running",
                "products_count": products_count
            })),
        )
            .into_response(),
        Err(e) => {
            eprintln!("> Health probe failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unhealthy",
                    "error": "store unreachable"
                })),
            )
                .into_response()
        }
    }
}
