pub mod config;
pub mod processor;
pub mod processor_enums;
pub mod types;

pub use config::GridDataConfig;
pub use processor_enums::{GetHistoryInputArgs, GridDataProcessorInput, GridDataProcessorOutput};
pub use types::{DashboardData, DataSourceKind, EnrichedRecord, RawRecord, TimeRange};
