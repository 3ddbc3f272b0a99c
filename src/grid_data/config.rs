use chrono::{DateTime, Utc};

use crate::simulator::SimulatorConfig;
use crate::utils::app_config::AppConfig;

/// Per-call settings for the grid data processor
#[derive(Clone, Debug, Default)]
pub struct GridDataConfig {
    /// Seed for the mock generator; fresh entropy when unset
    pub mock_seed: Option<u64>,
    /// Reference time for the requested window; wall clock when unset
    pub as_of: Option<DateTime<Utc>>,
    pub simulator: SimulatorConfig,
}

impl GridDataConfig {
    pub fn from_app_config(app_config: &AppConfig) -> Self {
        Self {
            mock_seed: app_config.mock_seed,
            ..Default::default()
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }
}
