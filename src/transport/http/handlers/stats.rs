use crate::transport::http::types::{error_response, ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Catalog aggregate statistics", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.stats().await {
        Ok(stats) => (StatusCode::OK, Json(ApiResponse::ok(json!(stats)))).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
