use crate::app::catalog_service::{CatalogError, CatalogService};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

/// Uniform JSON envelope for every catalog response.
#[derive(Serialize, Debug, Default, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    /// Size of the returned set on listing responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Full row count for the query, present when the page was capped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Echo of the requested category on by-category listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            ..Default::default()
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// The single place where error kinds become status codes. Storage detail is
/// logged server-side and replaced with a generic message on the wire.
pub fn error_response(err: CatalogError) -> (StatusCode, Json<ApiResponse>) {
    match err {
        CatalogError::Validation(_) => (StatusCode::BAD_REQUEST, Json(ApiResponse::err(err.to_string()))),
        CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, Json(ApiResponse::err(err.to_string()))),
        CatalogError::Storage(e) => {
            eprintln!("> Storage error: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err("internal server error")),
            )
        }
    }
}

pub fn json_400(err: JsonRejection) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::err(format!("Invalid JSON body: {}", err))),
    )
}
