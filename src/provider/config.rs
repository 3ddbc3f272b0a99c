use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.electricitymap.org/v3";

/// Connection settings for the Electricity Maps API
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Sent as the `auth-token` header. Empty means unauthenticated; the
    /// provider rejects the request, we do not.
    pub api_token: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
        }
    }
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = env::var("ELECTRICITY_MAPS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_token = env::var("ELECTRICITY_MAPS_API_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("ELECTRICITY_MAPS_API_TOKEN not set in environment, live requests will be rejected");
            String::new()
        });

        Self::new(base_url, api_token)
    }
}
