use axum::{Json, http::StatusCode};

use crate::api::response::ApiResponse;

/// GET /health
pub async fn health() -> (StatusCode, Json<ApiResponse<&'static str>>) {
    (StatusCode::OK, Json(ApiResponse::success("ok")))
}
