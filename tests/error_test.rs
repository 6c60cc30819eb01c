//! Tests for the HTTP mapping of `AppError`.
//!
//! Run with: cargo test --test error_test

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use sensor_dashboard::error::AppError;

async fn respond(error: AppError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body["error"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn upstream_failures_are_bad_gateway() {
    let (status, message) = respond(AppError::Fetch("Request failed: refused".into())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(message.contains("refused"));

    let (status, _) = respond(AppError::Decode("expected value".into())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn internal_failures_hide_their_detail() {
    let (status, message) = respond(AppError::Internal("serializer exploded".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, "Internal server error");
}

#[tokio::test]
async fn not_found_keeps_its_message() {
    let (status, message) = respond(AppError::NotFound("Sensor type 'X' not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, "Sensor type 'X' not found");
}
