pub mod dashboard;
pub mod data;
pub mod health;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::charts::chartjs;
use crate::common::AppState;
use crate::sensors::SensorReading;
use crate::services::dashboard::{ChartSurface, Dashboard, SensorChart};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        data::get_sensor_data,
        data::get_sensor_type_data,
        dashboard::get_charts,
    ),
    components(
        schemas(
            SensorReading,
            Dashboard,
            SensorChart,
            ChartSurface,
            chartjs::ChartConfig,
            chartjs::Dataset,
            chartjs::ChartPoint,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "data", description = "Sensor readings grouped by sensor type"),
        (name = "charts", description = "Chart.js configurations built from the sensor data"),
    ),
    info(
        title = "Sensor Dashboard API",
        description = "Per-sensor-type time-series charts for mesh sensor readings",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    tracing::info!(
        data_url = %state.data_client.data_url(),
        sensors = state.config.sensor_log_files.len(),
        sort_readings = state.config.sort_readings,
        "Building router"
    );

    let data_routes = Router::new()
        .route("/data", get(data::get_sensor_data))
        .route("/data/{sensor_type}", get(data::get_sensor_type_data));

    let dashboard_routes = Router::new()
        .route("/", get(dashboard::dashboard_page))
        .route("/charts", get(dashboard::get_charts));

    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .merge(data_routes)
        .merge(dashboard_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
