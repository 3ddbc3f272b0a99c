use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::grid_data::types::DataSourceKind;
use crate::provider::{ElectricityMapsClient, ProviderConfig};

pub const DEFAULT_ZONE: &str = "IN";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ElectricityMapsClient,
    /// Zone used when a request does not name one
    pub default_zone: String,
    /// Source used when a request does not name one
    pub data_source: DataSourceKind,
    /// Fixes the mock generator's output when set
    pub mock_seed: Option<u64>,
}

impl AppConfig {
    pub fn new(
        provider: ProviderConfig,
        default_zone: impl Into<String>,
        data_source: DataSourceKind,
        mock_seed: Option<u64>,
    ) -> Self {
        Self {
            provider: ElectricityMapsClient::new(provider),
            default_zone: default_zone.into(),
            data_source,
            mock_seed,
        }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let provider = ProviderConfig::from_env();

        let default_zone = env::var("DEFAULT_ZONE").unwrap_or_else(|_| DEFAULT_ZONE.to_string());

        let data_source = match env::var("DATA_SOURCE") {
            Ok(v) => v.parse::<DataSourceKind>().context("DATA_SOURCE")?,
            Err(_) => DataSourceKind::default(),
        };

        let mock_seed = match env::var("MOCK_SEED") {
            Ok(v) => Some(v.trim().parse::<u64>().context("MOCK_SEED must be an unsigned integer")?),
            Err(_) => None,
        };

        Ok(Self::new(provider, default_zone, data_source, mock_seed))
    }
}
