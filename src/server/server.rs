use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::dashboard::{DashboardError, SelectionEvent};
use tower_http::services::ServeDir;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

#[allow(unused_imports)]
use super::slowdown_request;
use super::{http_cache, log_requests, state::*, ServerConfig};

const DASHBOARD_PAGE: &str = include_str!("dashboard.html");

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub variant: String,
    pub songs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

async fn get_stats(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        variant: state.dashboard.variant().to_string(),
        songs: state.dashboard.dataset().len(),
    };
    Json(stats)
}

async fn get_layout(State(dashboard): State<SharedDashboard>) -> impl IntoResponse {
    Json(dashboard.layout())
}

async fn get_figures(State(dashboard): State<SharedDashboard>) -> impl IntoResponse {
    Json(dashboard.initial_figures())
}

async fn post_update(
    State(dashboard): State<SharedDashboard>,
    Json(event): Json<SelectionEvent>,
) -> Response {
    debug!("Selection changed: {:?}", event);
    match dashboard.dispatch(&event) {
        Ok(update) => {
            debug!(
                "Updated {} with {} points",
                update.output,
                update.figure.point_count()
            );
            Json(update).into_response()
        }
        Err(err @ DashboardError::InvalidSelection { .. }) => {
            warn!("Rejected selection: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

impl ServerState {
    fn new(config: ServerConfig, dashboard: SharedDashboard) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            dashboard,
        }
    }
}

pub fn make_app(config: ServerConfig, dashboard: SharedDashboard) -> Result<Router> {
    let state = ServerState::new(config.clone(), dashboard);

    let content_routes: Router = Router::new()
        .route("/layout", get(get_layout))
        .route("/figures", get(get_figures))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let api_routes: Router = Router::new()
        .route("/stats", get(get_stats))
        .route("/update", post(post_update))
        .with_state(state.clone())
        .merge(content_routes);

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)),
    };

    #[allow(unused_mut)]
    let mut app: Router = home_router.nest("/v1", api_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, dashboard: SharedDashboard) -> Result<()> {
    let port = config.port;
    let app = make_app(config, dashboard)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    Ok(axum::serve(listener, app).await?)
}
