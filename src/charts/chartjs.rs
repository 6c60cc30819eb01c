//! Chart.js line-chart configuration, serialized exactly as `new Chart(canvas, config)` expects.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::charts::color::Rgb;

pub const X_AXIS_TITLE: &str = "Timestamp";
pub const Y_AXIS_TITLE: &str = "Value";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Line chart titled `Sensor Type: <sensor_type>` over a minute-unit time axis.
    #[must_use]
    pub fn line(sensor_type: &str, datasets: Vec<Dataset>) -> Self {
        Self {
            chart_type: ChartType::Line,
            data: ChartData { datasets },
            options: ChartOptions {
                plugins: Plugins {
                    title: Title::shown(format!("Sensor Type: {sensor_type}")),
                },
                responsive: true,
                scales: Scales {
                    x: TimeScale {
                        scale_type: ScaleType::Time,
                        time: TimeOptions {
                            unit: TimeUnit::Minute,
                        },
                        title: Title::shown(X_AXIS_TITLE),
                    },
                    y: LinearScale {
                        scale_type: ScaleType::Linear,
                        title: Title::shown(Y_AXIS_TITLE),
                        begin_at_zero: false,
                    },
                },
            },
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.options.plugins.title.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<ChartPoint>,
    pub border_width: u32,
    #[schema(value_type = String, example = "rgb(12, 150, 73)")]
    pub border_color: Rgb,
    pub fill: bool,
}

/// A `y` of `null` leaves a gap in the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ChartPoint {
    pub x: DateTime<Utc>,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartOptions {
    pub plugins: Plugins,
    pub responsive: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Plugins {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

impl Title {
    fn shown(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Time,
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimeScale {
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    pub time: TimeOptions,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimeOptions {
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinearScale {
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    pub title: Title,
    pub begin_at_zero: bool,
}
