pub mod config;
pub mod history;

pub use config::SimulatorConfig;
pub use history::{generate_mock_history, generate_with_config};
