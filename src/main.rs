use dotenvy::dotenv;
use std::env;

use gridmix_back_end::api::{self, config::ApiConfig};
use gridmix_back_end::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    // Load API configuration
    let api_config = ApiConfig::from_env();
    tracing::info!("API configuration loaded successfully");

    // Load AppConfig (provider client and data source)
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        "Application configuration loaded successfully (source: {}, default zone: {})",
        app_config.data_source,
        app_config.default_zone
    );

    let router = api::router(app_config);

    let addr = api_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting GridMix API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
