// Public library interface for gridmix-back-end
pub mod action_router;
pub mod aggregators;
pub mod api;
pub mod cli_helper;
pub mod cli_utils;
pub mod grid_data;
pub mod provider;
pub mod simulator;
pub mod utils;
