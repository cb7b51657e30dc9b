use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use top50_dashboard::config::{AppConfig, CliConfig, FileConfig, DEFAULT_DATA_URL};
use top50_dashboard::dashboard::DEFAULT_ARTIST_OPTIONS;
use top50_dashboard::server::ServerConfig;
use top50_dashboard::{load_dataset, run_server, Dashboard, DashboardVariant, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// URL or local path of the top 50 songs CSV (Latin-1 encoded).
    #[clap(long, default_value = DEFAULT_DATA_URL)]
    pub data_source: String,

    /// Which dashboard to serve.
    #[clap(long, value_enum, default_value_t = DashboardVariant::Interactive)]
    pub variant: DashboardVariant,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of layout and figures in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Timeout in seconds for fetching the CSV.
    #[clap(long, default_value_t = 30)]
    pub fetch_timeout_sec: u64,

    /// Number of top artists offered in the artist checklist.
    #[clap(long, default_value_t = DEFAULT_ARTIST_OPTIONS)]
    pub artist_options: usize,

    /// Line shown under the dashboard heading.
    #[clap(long)]
    pub subtitle: Option<String>,

    /// Path to a TOML config file. Its values override the CLI ones.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Load the dataset, log a summary and exit.
    #[clap(long)]
    pub check_only: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            data_source: self.data_source.clone(),
            port: self.port,
            logging_level: self.logging_level.clone(),
            content_cache_age_sec: self.content_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
            fetch_timeout_sec: self.fetch_timeout_sec,
            variant: self.variant,
            artist_options: self.artist_options,
            subtitle: self.subtitle.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config from {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let dataset = load_dataset(&app_config.data_source, app_config.fetch_timeout())
        .await
        .with_context(|| format!("Failed to load dataset from {}", app_config.data_source))?;

    if cli_args.check_only {
        info!("Dataset check passed, exiting.");
        return Ok(());
    }

    let dashboard = Arc::new(Dashboard::new(Arc::new(dataset), app_config.dashboard.clone()));
    info!(
        "Serving the {} dashboard, {} artists offered.",
        dashboard.variant(),
        dashboard.artist_options().len()
    );

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        content_cache_age_sec: app_config.content_cache_age_sec,
        frontend_dir_path: app_config.frontend_dir_path,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(server_config, dashboard).await
}
