pub mod config;
pub mod gismeteo;
pub mod state;
