use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::aggregators::enrich;
use crate::grid_data::config::GridDataConfig;
use crate::grid_data::processor_enums::{GetHistoryInputArgs, GridDataProcessorInput, GridDataProcessorOutput};
use crate::grid_data::types::{DataSourceKind, RawRecord};
use crate::provider::normalize_records;
use crate::simulator::generate_with_config;
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<GridDataConfig, GridDataProcessorOutput> for GridDataProcessorInput {
    async fn process(
        &self,
        app_config: &mut AppConfig,
        local_config: &mut GridDataConfig,
    ) -> anyhow::Result<GridDataProcessorOutput> {
        match self {
            GridDataProcessorInput::GetDashboard(args) => {
                let records = load_records(app_config, local_config, args).await?;
                let data = enrich(&records);

                match &data {
                    Some(d) => tracing::info!(
                        "Aggregated {} records for {} ({}, {}), avg intensity {}",
                        d.chart_data.len(),
                        args.zone,
                        args.range,
                        args.source,
                        d.avg_intensity
                    ),
                    None => tracing::info!("No records for {} ({}, {})", args.zone, args.range, args.source),
                }

                Ok(GridDataProcessorOutput::GetDashboard(data))
            }
            GridDataProcessorInput::GetRawHistory(args) => match args.source {
                DataSourceKind::Mock => {
                    let records = mock_records(local_config, args);
                    Ok(GridDataProcessorOutput::GetRawHistory(serde_json::to_value(records)?))
                }
                DataSourceKind::Live => {
                    let payload = app_config
                        .provider
                        .fetch_history(&args.zone, args.range, local_config.now())
                        .await?;
                    Ok(GridDataProcessorOutput::GetRawHistory(payload.body))
                }
            },
        }
    }
}

async fn load_records(
    app_config: &AppConfig,
    local_config: &GridDataConfig,
    args: &GetHistoryInputArgs,
) -> anyhow::Result<Vec<RawRecord>> {
    match args.source {
        DataSourceKind::Mock => Ok(mock_records(local_config, args)),
        DataSourceKind::Live => {
            let payload = app_config
                .provider
                .fetch_history(&args.zone, args.range, local_config.now())
                .await?;
            tracing::debug!("Provider answered from {:?}", payload.endpoint);
            Ok(normalize_records(&payload.body)?)
        }
    }
}

fn mock_records(local_config: &GridDataConfig, args: &GetHistoryInputArgs) -> Vec<RawRecord> {
    let mut rng = match local_config.mock_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!("Generating mock {} history (zone {} is not simulated separately)", args.range, args.zone);
    generate_with_config(&local_config.simulator, args.range, local_config.now(), &mut rng)
}
