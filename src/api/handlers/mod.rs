pub mod grid_data;
pub mod health;
pub mod sources;
