pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod recompute;
pub mod scoring;

pub use config::AppConfig;
pub use errors::*;
