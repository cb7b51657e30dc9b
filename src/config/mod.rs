mod file_config;

pub use file_config::{DashboardConfig, FileConfig};

use crate::dashboard::{DashboardSettings, DashboardVariant};
use crate::dataset::DataSource;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/pakkhee/DataVisual/main/top50.csv";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_source: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub fetch_timeout_sec: u64,
    pub variant: DashboardVariant,
    pub artist_options: usize,
    pub subtitle: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            data_source: DEFAULT_DATA_URL.to_string(),
            port: 3001,
            logging_level: RequestsLoggingLevel::Path,
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
            fetch_timeout_sec: 30,
            variant: DashboardVariant::Interactive,
            artist_options: crate::dashboard::DEFAULT_ARTIST_OPTIONS,
            subtitle: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_source: DataSource,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub fetch_timeout_sec: u64,
    pub dashboard: DashboardSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_source = DataSource::from(file.data_source.as_deref().unwrap_or(&cli.data_source));
        if let DataSource::Url(url) = &data_source {
            if url.len() <= "https://".len() {
                bail!("data_source is not a valid URL: {}", url);
            }
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(dir) = &frontend_dir_path {
            let path = PathBuf::from(dir);
            if !path.exists() {
                bail!("Frontend directory does not exist: {:?}", path);
            }
            if !path.is_dir() {
                bail!("frontend_dir_path is not a directory: {:?}", path);
            }
        }

        let fetch_timeout_sec = file.fetch_timeout_sec.unwrap_or(cli.fetch_timeout_sec);
        if fetch_timeout_sec == 0 {
            bail!("fetch_timeout_sec must be greater than 0");
        }

        // Dashboard settings - merge file config with CLI
        let dashboard_file = file.dashboard.unwrap_or_default();
        let variant = match dashboard_file.variant {
            Some(s) => match parse_variant(&s) {
                Some(variant) => variant,
                None => bail!("Unknown dashboard variant: {}", s),
            },
            None => cli.variant,
        };
        let artist_options = dashboard_file.artist_options.unwrap_or(cli.artist_options);
        if artist_options == 0 {
            bail!("artist_options must be greater than 0");
        }
        let subtitle = dashboard_file.subtitle.or_else(|| cli.subtitle.clone());

        Ok(Self {
            data_source,
            port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            fetch_timeout_sec,
            dashboard: DashboardSettings {
                variant,
                artist_options,
                subtitle,
            },
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_sec)
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_variant(s: &str) -> Option<DashboardVariant> {
    DashboardVariant::from_str(s, true).ok()
}
