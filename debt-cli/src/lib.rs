pub mod app;
pub mod config;
pub mod logging;
pub mod state;
pub mod utils;
pub mod views;
