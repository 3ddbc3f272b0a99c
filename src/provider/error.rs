use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider returned {status} from {endpoint}")]
    Status { status: StatusCode, endpoint: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Unexpected provider response shape: {0}")]
    UnexpectedShape(String),
}

impl ProviderError {
    /// Upstream status to forward to our own callers, if there is one.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
