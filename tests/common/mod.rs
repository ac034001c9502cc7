//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::path::PathBuf;

use tempfile::TempDir;
use voogle::api::{ApiClient, Credentials};
use voogle::config::ApiConfig;

pub const VIDEO_ID: &str = "0b7d7c1a-6a4c-4f43-9d55-3b1f1c5a9e10";
pub const OTHER_VIDEO_ID: &str = "5f0e4d7b-2c8a-4e1b-8a9f-0c6d3e2b1a47";

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Client pointed at `base_url` with the mock's accepted credentials.
pub fn authed_client(base_url: &str) -> ApiClient {
    anonymous_client(base_url).with_credentials(Credentials::new(
        mock_api::USERNAME,
        mock_api::PASSWORD,
    ))
}

pub fn anonymous_client(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    })
    .expect("Failed to build client")
}

/// JSON body of a list response.
pub fn video_list(videos: &[(&str, &str, &str)]) -> String {
    let entries: Vec<serde_json::Value> = videos
        .iter()
        .map(|(id, title, status)| {
            serde_json::json!({
                "id": id,
                "title": title,
                "status": status,
                "uploadedAt": "2022-03-01T10:00:00Z",
            })
        })
        .collect();
    serde_json::json!({ "videos": entries, "_lastpage": 1 }).to_string()
}
