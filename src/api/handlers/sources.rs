use axum::{Json, http::StatusCode};
use serde::Serialize;

use crate::aggregators::classification::{
    CARBON_FREE_KEYS, FALLBACK_COLOR, RENEWABLE_KEYS, STACK_ORDER, SourceInfo, source_catalog,
};
use crate::api::response::ApiResponse;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SourceCatalog {
    pub sources: Vec<SourceInfo>,
    pub stack_order: Vec<&'static str>,
    pub renewable: Vec<&'static str>,
    pub low_carbon: Vec<&'static str>,
    pub fallback_color: &'static str,
}

/// GET /api/sources - Colours, labels and classification for chart legends
pub async fn get_sources() -> (StatusCode, Json<ApiResponse<SourceCatalog>>) {
    let catalog = SourceCatalog {
        sources: source_catalog(),
        stack_order: STACK_ORDER.to_vec(),
        renewable: RENEWABLE_KEYS.to_vec(),
        low_carbon: CARBON_FREE_KEYS.to_vec(),
        fallback_color: FALLBACK_COLOR,
    };

    (StatusCode::OK, Json(ApiResponse::success(catalog)))
}
