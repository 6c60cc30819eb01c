use serde::Serialize;
use utoipa::ToSchema;

use crate::charts::{build_sensor_chart, ChartConfig, ColorGenerator};
use crate::config::Config;
use crate::error::AppResult;
use crate::sensors::{SensorDataClient, SensorGroups};

/// Element every chart surface is appended to.
pub const CHARTS_CONTAINER_ID: &str = "charts-area";
pub const SURFACE_MAX_WIDTH_PX: u32 = 1000;
pub const SURFACE_HEIGHT_PX: u32 = 400;

/// Canvas a single chart is drawn into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChartSurface {
    pub id: String,
    pub max_width_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SensorChart {
    pub sensor_type: String,
    pub surface: ChartSurface,
    pub config: ChartConfig,
}

/// Charts of one page load, in the order they are appended to the container.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Dashboard {
    pub container_id: String,
    pub charts: Vec<SensorChart>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            container_id: CHARTS_CONTAINER_ID.to_string(),
            charts: Vec::new(),
        }
    }
}

impl Dashboard {
    /// Append a chart on a fresh surface.
    pub fn append(&mut self, sensor_type: &str, config: ChartConfig) {
        let surface = ChartSurface {
            id: format!("chart-{}", self.charts.len()),
            max_width_px: SURFACE_MAX_WIDTH_PX,
            height_px: SURFACE_HEIGHT_PX,
        };
        self.charts.push(SensorChart {
            sensor_type: sensor_type.to_string(),
            surface,
            config,
        });
    }
}

/// How series are coloured and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSettings {
    pub sort_readings: bool,
    pub color_seed: Option<u64>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            sort_readings: true,
            color_seed: None,
        }
    }
}

impl From<&Config> for ChartSettings {
    fn from(config: &Config) -> Self {
        Self {
            sort_readings: config.sort_readings,
            color_seed: config.chart_color_seed,
        }
    }
}

/// One chart per sensor type with at least one reading, in group order.
#[must_use]
pub fn build_dashboard(groups: &SensorGroups, settings: ChartSettings) -> Dashboard {
    let mut colors = ColorGenerator::from_seed(settings.color_seed);
    let mut dashboard = Dashboard::default();

    for group in groups {
        if group.readings.is_empty() {
            tracing::debug!(sensor_type = %group.sensor_type, "Skipping empty sensor group");
            continue;
        }
        let config = build_sensor_chart(
            &group.sensor_type,
            &group.readings,
            &mut colors,
            settings.sort_readings,
        );
        dashboard.append(&group.sensor_type, config);
    }

    dashboard
}

/// Fetch the sensor data once and build its dashboard.
///
/// # Errors
///
/// Propagates the fetch error; no chart is built in that case.
pub async fn load_dashboard(
    client: &SensorDataClient,
    settings: ChartSettings,
) -> AppResult<Dashboard> {
    let (_, dashboard) = fetch_dashboard(client, settings).await?;
    Ok(dashboard)
}

/// Like [`load_dashboard`], also handing back the fetched groups for the raw
/// data tables of the page.
///
/// # Errors
///
/// Propagates the fetch error; no chart is built in that case.
pub async fn fetch_dashboard(
    client: &SensorDataClient,
    settings: ChartSettings,
) -> AppResult<(SensorGroups, Dashboard)> {
    let groups = client.fetch_sensor_groups().await?;
    let dashboard = build_dashboard(&groups, settings);
    tracing::info!(
        sensor_types = groups.len(),
        charts = dashboard.charts.len(),
        "Dashboard built"
    );
    Ok((groups, dashboard))
}
