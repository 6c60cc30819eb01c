use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Sensor data fetch failed: {0}")]
    Fetch(String),

    #[error("Sensor data is not valid JSON: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Fetch(msg) => {
                tracing::error!("Sensor data fetch failed: {msg}");
                (StatusCode::BAD_GATEWAY, format!("Sensor data fetch failed: {msg}"))
            }
            Self::Decode(msg) => {
                tracing::error!("Sensor data decode failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Sensor data is not valid JSON: {msg}"),
                )
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
