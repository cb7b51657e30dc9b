use axum::extract::FromRef;

use crate::dashboard::Dashboard;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The dashboard only reads the baseline dataset, no lock is needed.
pub type SharedDashboard = Arc<Dashboard>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub dashboard: SharedDashboard,
}

impl FromRef<ServerState> for SharedDashboard {
    fn from_ref(input: &ServerState) -> Self {
        input.dashboard.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
