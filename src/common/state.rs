use std::sync::Arc;

use crate::config::Config;
use crate::sensors::SensorDataClient;
use crate::services::dashboard::ChartSettings;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data_client: Arc<SensorDataClient>,
}

impl AppState {
    pub fn new(config: Config, data_client: SensorDataClient) -> Self {
        Self {
            config: Arc::new(config),
            data_client: Arc::new(data_client),
        }
    }

    #[must_use]
    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings::from(self.config.as_ref())
    }
}
