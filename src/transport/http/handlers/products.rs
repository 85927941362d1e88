use crate::transport::http::types::{error_response, json_400, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use utoipa::IntoParams;

#[derive(Deserialize, Debug, IntoParams)]
pub struct ListProductsQuery {
    /// Exact-match category filter.
    pub category: Option<String>,
    /// Caps the returned row count. Non-numeric or negative values are
    /// ignored, like a missing parameter.
    pub limit: Option<String>,
}

/// Returns 404 in the uniform envelope when a path id is not numeric. The
/// literal `/products/category/...` routes are matched before this ever
/// runs, so `"category"` never reaches the parse.
fn parse_id(raw: &str) -> Result<i32, (StatusCode, Json<ApiResponse>)> {
    raw.parse::<i32>().map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!("Product {} not found", raw))),
        )
    })
}

#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Products listed newest-first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> impl IntoResponse {
    let limit = query
        .limit
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n >= 0);

    match state.catalog.list_products(query.category, limit).await {
        Ok(listing) => {
            let mut resp = ApiResponse::ok(json!(listing.products));
            resp.count = Some(listing.products.len());
            resp.total = listing.total;
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp.into_response(),
    };

    match state.catalog.get_product(id).await {
        Ok(product) => (StatusCode::OK, Json(ApiResponse::ok(json!(product)))).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/products/category/{category}",
    params(("category" = String, Path, description = "Exact category name (case-sensitive)")),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    match state.catalog.list_by_category(&category).await {
        Ok(products) => {
            let mut resp = ApiResponse::ok(json!(products));
            resp.count = Some(products.len());
            resp.category = Some(category);
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/products"
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(v) => v,
        Err(e) => return json_400(e).into_response(),
    };

    match state.catalog.create_product(&payload).await {
        Ok(product) => {
            let mut resp = ApiResponse::ok(json!(product));
            resp.message = Some("Product created successfully".to_string());
            (StatusCode::CREATED, Json(resp)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product updated", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp.into_response(),
    };
    let Json(payload) = match payload {
        Ok(v) => v,
        Err(e) => return json_400(e).into_response(),
    };

    match state.catalog.update_product(id, &payload).await {
        Ok(product) => {
            let mut resp = ApiResponse::ok(json!(product));
            resp.message = Some("Product updated successfully".to_string());
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp.into_response(),
    };

    match state.catalog.delete_product(id).await {
        Ok(deleted) => {
            let mut resp = ApiResponse::ok(json!({ "id": deleted.id, "name": deleted.name }));
            resp.message = Some(format!("Product '{}' deleted successfully", deleted.name));
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}
