use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, response::ApiResponse, validation::validate_zone},
    grid_data::{
        processor_enums::{GetHistoryInputArgs, GridDataProcessorInput, GridDataProcessorOutput},
        types::{DashboardData, DataSourceKind, TimeRange},
    },
    utils::app_config::AppConfig,
};

/// Query parameters shared by the history endpoints
#[derive(Debug, Deserialize, Default)]
pub struct HistoryParams {
    pub zone: Option<String>,
    pub range: Option<String>,
    pub source: Option<String>,
}

/// GET /api/dashboard - Enriched chart series plus summary.
/// `data` is null when the range has no records yet.
pub async fn get_dashboard(
    State(app_config): State<AppConfig>,
    Query(params): Query<HistoryParams>,
) -> Result<(StatusCode, Json<ApiResponse<DashboardData>>), ApiError> {
    let args = history_args(&app_config, &params)?;

    let action = ActionRouterInput::GridData(GridDataProcessorInput::GetDashboard(args));

    let result = action
        .process(app_config)
        .await
        .map_err(ApiError::from_processor_error)?;

    match result {
        ActionRouterOutput::GridData(GridDataProcessorOutput::GetDashboard(Some(data))) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(data))))
        }
        ActionRouterOutput::GridData(GridDataProcessorOutput::GetDashboard(None)) => {
            Ok((StatusCode::OK, Json(ApiResponse::empty())))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/data - Provider history as received, no aggregation
pub async fn get_raw_history(
    State(app_config): State<AppConfig>,
    Query(params): Query<HistoryParams>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let args = history_args(&app_config, &params)?;

    let action = ActionRouterInput::GridData(GridDataProcessorInput::GetRawHistory(args));

    let result = action
        .process(app_config)
        .await
        .map_err(ApiError::from_processor_error)?;

    match result {
        ActionRouterOutput::GridData(GridDataProcessorOutput::GetRawHistory(body)) => {
            Ok((StatusCode::OK, Json(body)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// Fills in configured defaults and validates what the caller sent.
fn history_args(app_config: &AppConfig, params: &HistoryParams) -> Result<GetHistoryInputArgs, ApiError> {
    let zone = validate_zone(params.zone.as_deref().unwrap_or(&app_config.default_zone))?;

    let range = match params.range.as_deref() {
        Some(r) => r.parse::<TimeRange>().map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => TimeRange::default(),
    };

    let source = match params.source.as_deref() {
        Some(s) => s.parse::<DataSourceKind>().map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => app_config.data_source,
    };

    Ok(GetHistoryInputArgs { zone, range, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderConfig;

    fn app_config() -> AppConfig {
        AppConfig::new(ProviderConfig::default(), "IN", DataSourceKind::Live, None)
    }

    #[test]
    fn test_defaults_come_from_config() {
        let args = history_args(&app_config(), &HistoryParams::default()).unwrap();
        assert_eq!(
            args,
            GetHistoryInputArgs {
                zone: "IN".to_string(),
                range: TimeRange::OneYear,
                source: DataSourceKind::Live,
            }
        );
    }

    #[test]
    fn test_params_override_defaults() {
        let params = HistoryParams {
            zone: Some("DE".to_string()),
            range: Some("5y".to_string()),
            source: Some("mock".to_string()),
        };
        let args = history_args(&app_config(), &params).unwrap();
        assert_eq!(args.zone, "DE");
        assert_eq!(args.range, TimeRange::FiveYears);
        assert_eq!(args.source, DataSourceKind::Mock);
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        for params in [
            HistoryParams { zone: Some(String::new()), ..Default::default() },
            HistoryParams { range: Some("1W".to_string()), ..Default::default() },
            HistoryParams { source: Some("cache".to_string()), ..Default::default() },
        ] {
            assert!(matches!(history_args(&app_config(), &params), Err(ApiError::BadRequest(_))));
        }
    }
}
