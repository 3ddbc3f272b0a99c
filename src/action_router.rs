use crate::grid_data::config::GridDataConfig;
use crate::grid_data::processor_enums::{GridDataProcessorInput, GridDataProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;
use anyhow::Result;

pub enum ActionRouterInput {
    GridData(GridDataProcessorInput),
}

pub enum ActionRouterOutput {
    GridData(GridDataProcessorOutput),
}

impl ActionRouterInput {
    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        match self {
            ActionRouterInput::GridData(processor) => {
                let mut config = GridDataConfig::from_app_config(&app_config);

                let res = processor.process(&mut app_config.clone(), &mut config).await?;

                Ok(ActionRouterOutput::GridData(res))
            }
        }
    }
}
