//! Top 50 Songs Dashboard Library
//!
//! Loads the Spotify top 50 songs table once, aggregates it into per-artist
//! and per-genre counts and serves the resulting charts over HTTP.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod server;

// Re-export commonly used types for convenience
pub use dashboard::{Dashboard, DashboardSettings, DashboardVariant};
pub use dataset::{load_dataset, DataSource, Dataset, Song};
pub use server::{run_server, RequestsLoggingLevel};
