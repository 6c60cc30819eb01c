use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};

use serde::Serialize;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::sensors::SensorGroups;
use crate::services::dashboard::{self, Dashboard};

/// Dashboard page: one chart per sensor type, then the raw readings as tables.
///
/// Sensor data is fetched once per page load. A failed fetch yields an error
/// response and no page.
pub async fn dashboard_page(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (groups, dashboard) =
        dashboard::fetch_dashboard(&state.data_client, state.chart_settings()).await?;
    let html = render_dashboard_html(&dashboard, &groups)?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

/// Chart descriptions of one dashboard load
#[utoipa::path(
    get,
    path = "/charts",
    responses(
        (status = 200, description = "Charts built from the sensor data", body = Dashboard),
        (status = 502, description = "Sensor data could not be fetched or parsed"),
    ),
    tag = "charts"
)]
pub async fn get_charts(State(state): State<AppState>) -> AppResult<Json<Dashboard>> {
    let dashboard = dashboard::load_dashboard(&state.data_client, state.chart_settings()).await?;
    Ok(Json(dashboard))
}

/// Render the page hosting `dashboard`, with `groups` shown as raw data tables.
///
/// # Errors
///
/// Returns `AppError::Internal` if the charts or readings cannot be serialized.
pub fn render_dashboard_html(dashboard: &Dashboard, groups: &SensorGroups) -> AppResult<String> {
    let charts_json = embeddable_json(&dashboard.charts)?;
    let groups_json = embeddable_json(groups)?;

    Ok(DASHBOARD_HTML
        .replace("{{CONTAINER_ID}}", &dashboard.container_id)
        .replace("{{CHARTS_JSON}}", &charts_json)
        .replace("{{GROUPS_JSON}}", &groups_json))
}

fn embeddable_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize page data: {e}")))?
        // keep sensor-supplied strings from closing the script element
        .replace('<', "\\u003c"))
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sensor Dashboard</title>
    <style>
        :root {
            --bg: #f8fafc;
            --surface: #ffffff;
            --border: #e2e8f0;
            --text: #1e293b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 1.5rem;
        }
        h1 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1.5rem; }

        #{{CONTAINER_ID}} {
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }
        #{{CONTAINER_ID}} canvas {
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            padding: 0.75rem;
        }

        h2 { font-size: 1rem; font-weight: 600; margin: 2rem 0 0.75rem; }
        .readings-table {
            width: 100%;
            border-collapse: collapse;
            background: var(--surface);
            border: 1px solid var(--border);
            font-size: 0.8rem;
            font-variant-numeric: tabular-nums;
        }
        .readings-table th, .readings-table td {
            padding: 0.35rem 0.6rem;
            border-bottom: 1px solid var(--border);
            text-align: left;
        }
        .readings-table th { background: var(--bg); font-weight: 600; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Sensor Dashboard</h1>
        <div id="{{CONTAINER_ID}}"></div>
        <div id="tables-area"></div>
    </div>

    <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
    <script src="https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3"></script>
    <script type="application/json" id="chart-configs">{{CHARTS_JSON}}</script>
    <script type="application/json" id="sensor-groups">{{GROUPS_JSON}}</script>
<script>
const charts = JSON.parse(document.getElementById('chart-configs').textContent);
const container = document.getElementById('{{CONTAINER_ID}}');

charts.forEach(({ surface, config }) => {
    const canvas = document.createElement('canvas');
    canvas.id = surface.id;
    canvas.style.maxWidth = `${surface.max_width_px}px`;
    canvas.style.height = `${surface.height_px}px`;
    container.appendChild(canvas);
    new Chart(canvas, config);
});

// Raw readings, one table per sensor type with data
const groups = JSON.parse(document.getElementById('sensor-groups').textContent);
const tables = document.getElementById('tables-area');

const cellText = v => (v !== null && typeof v === 'object') ? JSON.stringify(v) : String(v ?? '');
const dataOf = r => (r.data && typeof r.data === 'object' && !Array.isArray(r.data)) ? r.data : {};

Object.entries(groups).forEach(([sensorType, readings]) => {
    if (!readings.length) return;

    const columns = [];
    readings.forEach(r => {
        Object.keys(dataOf(r)).forEach(k => {
            if (!columns.includes(k)) columns.push(k);
        });
    });

    const heading = document.createElement('h2');
    heading.textContent = `Sensor Type: ${sensorType}`;
    tables.appendChild(heading);

    const table = document.createElement('table');
    table.className = 'readings-table';
    const headRow = table.createTHead().insertRow();
    ['timestamp', ...columns].forEach(c => {
        const th = document.createElement('th');
        th.textContent = c;
        headRow.appendChild(th);
    });

    const body = table.createTBody();
    readings.forEach(r => {
        const row = body.insertRow();
        row.insertCell().textContent = cellText(r.timestamp);
        columns.forEach(c => {
            row.insertCell().textContent = cellText(dataOf(r)[c]);
        });
    });
    tables.appendChild(table);
});
</script>
</body>
</html>
"##;
