use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::sensors::models::SensorGroups;

/// Client for the `/data` endpoint serving readings grouped by sensor type.
pub struct SensorDataClient {
    http_client: Client,
    data_url: String,
}

impl SensorDataClient {
    /// Build a client for `config.data_url()`.
    ///
    /// No timeout is set unless `DATA_FETCH_TIMEOUT_SECONDS` is configured.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.data_fetch_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            data_url: config.data_url(),
        })
    }

    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Fetch every sensor group in one request. No retry.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Fetch` if the request fails or returns an error status,
    /// and `AppError::Decode` if the body is not a sensor-group document.
    pub async fn fetch_sensor_groups(&self) -> AppResult<SensorGroups> {
        let response = self
            .http_client
            .get(&self.data_url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Fetch(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Fetch(format!("Failed to get response text: {e}")))?;

        let groups: SensorGroups = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse sensor data response"
            );
            AppError::Decode(e.to_string())
        })?;

        tracing::debug!(
            url = %self.data_url,
            sensor_types = groups.len(),
            "Fetched sensor data"
        );
        Ok(groups)
    }
}
