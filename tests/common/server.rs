//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server loaded from its own fixture CSV.

use super::constants::*;
use super::fixtures::create_test_csv;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use top50_dashboard::server::{server::make_app, RequestsLoggingLevel, ServerConfig};
use top50_dashboard::{load_dataset, Dashboard, DashboardSettings, DashboardVariant, DataSource};

/// Test server instance with an isolated dataset
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_csv_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns the interactive dashboard on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with_variant(DashboardVariant::Interactive).await
    }

    /// Spawns a new test server on a random port
    ///
    /// This function:
    /// 1. Writes the fixture CSV to a temp dir
    /// 2. Loads it through the regular dataset loader
    /// 3. Binds to a random port (127.0.0.1:0)
    /// 4. Spawns the server in a background task
    /// 5. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if the fixture can't be loaded, the port can't be bound
    /// or the server doesn't become ready within timeout.
    pub async fn spawn_with_variant(variant: DashboardVariant) -> Self {
        let (temp_csv_dir, csv_path) = create_test_csv().expect("Failed to create test CSV");

        let dataset = load_dataset(&DataSource::File(csv_path), Duration::from_secs(1))
            .await
            .expect("Failed to load test CSV");

        let settings = DashboardSettings {
            variant,
            ..Default::default()
        };
        let dashboard = Arc::new(Dashboard::new(Arc::new(dataset), settings));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: TEST_CACHE_AGE_SEC,
            frontend_dir_path: None,
        };

        let app = make_app(config, dashboard).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _temp_csv_dir: temp_csv_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the /v1/stats endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/v1/stats", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
