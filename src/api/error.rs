use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::response::ApiResponse;
use crate::provider::ProviderError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Provider answered with a failure status; forwarded as-is
    Upstream(StatusCode, String),
    InternalError(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    /// Maps a processor failure to a response. Details go to the log, the
    /// client only sees a generic message.
    pub fn from_processor_error(err: anyhow::Error) -> Self {
        match err.downcast_ref::<ProviderError>() {
            Some(provider_err) => {
                tracing::error!("Provider request failed: {}", provider_err);
                match provider_err.upstream_status() {
                    Some(status) => Self::Upstream(status, "Failed to fetch data".to_string()),
                    None => Self::internal_error("Internal Server Error"),
                }
            }
            None => {
                tracing::error!("API Error: {:#}", err);
                Self::internal_error("Internal Server Error")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(status, _) => *status,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::Upstream(_, msg) => msg.clone(),
            ApiError::InternalError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = ApiResponse::<serde_json::Value>::error(self.message());

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_forwarded() {
        let err = ProviderError::Status {
            status: StatusCode::UNAUTHORIZED,
            endpoint: "power-breakdown/history".to_string(),
        };
        let api_err = ApiError::from_processor_error(err.into());

        assert_eq!(api_err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(api_err.message(), "Failed to fetch data");
    }

    #[test]
    fn test_other_failures_are_internal() {
        let api_err = ApiError::from_processor_error(anyhow::anyhow!("boom"));
        assert_eq!(api_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.message(), "Internal Server Error");

        let decode = ApiError::from_processor_error(ProviderError::Decode("eof".to_string()).into());
        assert_eq!(decode.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::not_found("Route").message(), "Route not found");
    }
}
