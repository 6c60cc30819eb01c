//! Sensor readings from per-sensor log files.
//!
//! Each log line carries a free-form prefix followed by a JSON object:
//!
//! ```text
//! 2024-01-01T00:00:00Z [mesh] node-3 {"sensor_type": "light", "lux": 120}
//! ```
//!
//! The trimmed prefix becomes the reading's timestamp and the object its data.
//! Lines that do not fit this shape are skipped with a warning.

use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::SensorLogFile;
use crate::sensors::models::{SensorGroups, SensorReading, SENSOR_TYPE_KEY};

static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)(\{.*\})\s*$").expect("log line pattern is valid"));

/// Outcome of parsing a single log line.
#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    Blank,
    Reading(SensorReading),
    /// No trailing JSON object on the line
    Malformed,
    /// Trailing `{...}` that is not a JSON object
    InvalidJson(String),
}

/// Parse one log line for `sensor_type`.
///
/// `sensor_type` is added to the data when the logged object lacks one.
#[must_use]
pub fn parse_log_line(line: &str, sensor_type: &str) -> LogLine {
    let line = line.trim();
    if line.is_empty() {
        return LogLine::Blank;
    }

    let Some(captures) = LINE_PATTERN.captures(line) else {
        return LogLine::Malformed;
    };
    let prefix = captures.get(1).map_or("", |m| m.as_str()).trim();
    let json = captures.get(2).map_or("", |m| m.as_str()).trim();

    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(mut data)) => {
            data.entry(SENSOR_TYPE_KEY)
                .or_insert_with(|| Value::String(sensor_type.to_string()));
            LogLine::Reading(SensorReading::new(prefix, Value::Object(data)))
        }
        Ok(_) => LogLine::InvalidJson("not a JSON object".to_string()),
        Err(e) => LogLine::InvalidJson(e.to_string()),
    }
}

/// Read every parseable reading from `path`.
///
/// A missing file yields no readings. A read error stops at the failing line and
/// keeps what was read before it.
pub async fn read_log_file(path: &Path, sensor_type: &str) -> Vec<SensorReading> {
    let mut readings = Vec::new();

    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), sensor_type, "Log file not found");
            return readings;
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to open log file");
            return readings;
        }
    };

    let mut lines = BufReader::new(file).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error reading log file");
                break;
            }
        };

        match parse_log_line(&line, sensor_type) {
            LogLine::Blank => {}
            LogLine::Reading(reading) => readings.push(reading),
            LogLine::Malformed => {
                tracing::warn!(path = %path.display(), line = %line.trim(), "Malformed or no-JSON line");
            }
            LogLine::InvalidJson(e) => {
                tracing::warn!(path = %path.display(), error = %e, line = %line.trim(), "JSON parse error");
            }
        }
    }

    tracing::info!(sensor_type, entries = readings.len(), "Loaded log entries");
    readings
}

/// Load every configured sensor, in configuration order. Empty groups are kept.
pub async fn load_sensor_groups(files: &[SensorLogFile]) -> SensorGroups {
    let mut groups = SensorGroups::new();
    for file in files {
        let readings = read_log_file(&file.path, &file.sensor_type).await;
        groups.insert(file.sensor_type.clone(), readings);
    }
    groups
}
