//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all dashboard endpoints.
//!
//! When API routes or request formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap_or_else(|err| panic!("GET {} failed: {}", path, err))
    }

    // ========================================================================
    // Page and Content Endpoints
    // ========================================================================

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    /// GET /v1/stats
    pub async fn get_stats(&self) -> Response {
        self.get("/v1/stats").await
    }

    /// GET /v1/layout
    pub async fn get_layout(&self) -> Response {
        self.get("/v1/layout").await
    }

    /// GET /v1/figures
    pub async fn get_figures(&self) -> Response {
        self.get("/v1/figures").await
    }

    // ========================================================================
    // Callback Endpoint
    // ========================================================================

    /// POST /v1/update
    pub async fn post_update(&self, control: &str, value: Value) -> Response {
        self.client
            .post(format!("{}/v1/update", self.base_url))
            .json(&json!({ "control": control, "value": value }))
            .send()
            .await
            .expect("Update request failed")
    }

    /// POST /v1/update with an arbitrary body
    pub async fn post_raw_update(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/v1/update", self.base_url))
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("Update request failed")
    }

    /// Checks the given artists in the artist checklist
    pub async fn update_artists(&self, artists: &[&str]) -> Response {
        self.post_update("artist-checklist", json!(artists)).await
    }

    /// Picks a genre count in the radio items
    pub async fn update_genre_count(&self, top_n: i64) -> Response {
        self.post_update("genre-count-radio", json!(top_n)).await
    }
}
