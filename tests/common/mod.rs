//! Shared fixtures for integration tests.

#![allow(dead_code)]

use axum::{http::header, routing::get, Router};
use std::path::PathBuf;
use tokio::net::TcpListener;

use sensor_dashboard::config::{Config, Deployment, SensorLogFile};

/// Config pointing the dashboard at `data_base_url`, with a fixed colour seed.
pub fn test_config(data_base_url: &str) -> Config {
    Config {
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        data_base_url: data_base_url.to_string(),
        data_fetch_timeout_seconds: Some(5),
        sensor_log_dir: PathBuf::from("."),
        sensor_log_files: Vec::new(),
        chart_color_seed: Some(7),
        sort_readings: true,
        deployment: Deployment::Local,
    }
}

pub fn with_log_files(mut config: Config, files: &[(&str, PathBuf)]) -> Config {
    config.sensor_log_files = files
        .iter()
        .map(|(name, path)| SensorLogFile {
            sensor_type: (*name).to_string(),
            path: path.clone(),
        })
        .collect();
    config
}

/// Serve `body` as `GET /data` on an ephemeral port; returns the base URL.
pub async fn serve_data(body: &'static str) -> String {
    let app = Router::new().route(
        "/data",
        get(move || async move { ([(header::CONTENT_TYPE, "application/json")], body) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Fresh, empty scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "sensor-dashboard-{name}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
