//! Dev-only middleware delaying each request, to see how the page behaves
//! when callbacks answer late.
#![allow(dead_code)] // Only layered with the `slowdown` feature

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

const MIN_DELAY_MS: u64 = 200;
const MAX_DELAY_MS: u64 = 1500;

pub async fn slowdown_request(request: Request<Body>, next: Next) -> Response {
    let delay = rand::rng().random_range(MIN_DELAY_MS..=MAX_DELAY_MS);
    debug!("Slowing down {} by {}ms", request.uri().path(), delay);
    tokio::time::sleep(Duration::from_millis(delay)).await;
    next.run(request).await
}
