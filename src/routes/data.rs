use axum::{
    extract::{Path, State},
    Json,
};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::sensors::{SensorGroups, SensorReading};
use crate::services::log_files;

/// All sensor readings grouped by sensor type
///
/// Reads every configured sensor log on each request. Sensors without a log
/// file or without valid lines are returned with an empty array.
#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "Readings grouped by sensor type", body = std::collections::HashMap<String, Vec<SensorReading>>),
    ),
    tag = "data"
)]
pub async fn get_sensor_data(State(state): State<AppState>) -> Json<SensorGroups> {
    Json(log_files::load_sensor_groups(&state.config.sensor_log_files).await)
}

/// Readings of a single sensor type
#[utoipa::path(
    get,
    path = "/data/{sensor_type}",
    params(
        ("sensor_type" = String, Path, description = "Sensor name as configured in SENSOR_LOG_FILES"),
    ),
    responses(
        (status = 200, description = "Readings of the sensor", body = Vec<SensorReading>),
        (status = 404, description = "Sensor type not configured"),
    ),
    tag = "data"
)]
pub async fn get_sensor_type_data(
    State(state): State<AppState>,
    Path(sensor_type): Path<String>,
) -> AppResult<Json<Vec<SensorReading>>> {
    let file = state
        .config
        .sensor_log_files
        .iter()
        .find(|f| f.sensor_type == sensor_type)
        .ok_or_else(|| AppError::NotFound(format!("Sensor type '{sensor_type}' not found")))?;

    Ok(Json(
        log_files::read_log_file(&file.path, &file.sensor_type).await,
    ))
}
