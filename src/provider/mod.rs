pub mod client;
pub mod config;
pub mod error;
pub mod normalize;

pub use client::{ElectricityMapsClient, ProviderEndpoint, ProviderPayload};
pub use config::ProviderConfig;
pub use error::ProviderError;
pub use normalize::normalize_records;
