use crate::transport::http::types::{error_response, ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Distinct categories, sorted", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_categories_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list_categories().await {
        Ok(categories) => {
            let mut resp = ApiResponse::ok(json!(categories));
            resp.count = Some(categories.len());
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}
