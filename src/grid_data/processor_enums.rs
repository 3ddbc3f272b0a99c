use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grid_data::types::{DashboardData, DataSourceKind, TimeRange};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetHistoryInputArgs {
    pub zone: String,
    pub range: TimeRange,
    pub source: DataSourceKind,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum GridDataProcessorInput {
    /// Enriched series plus summary, `None` when there is no data
    GetDashboard(GetHistoryInputArgs),
    /// Provider body as received (or the generated records for mock)
    GetRawHistory(GetHistoryInputArgs),
}

#[derive(Serialize, Debug)]
pub enum GridDataProcessorOutput {
    GetDashboard(Option<DashboardData>),
    GetRawHistory(Value),
}
