use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

/// Sensors served from log files when `SENSOR_LOG_FILES` is not set.
pub const DEFAULT_SENSOR_LOG_FILES: &[(&str, &str)] = &[
    ("BH1750", "bh1750.log"),
    ("DHT22", "dht22.log"),
    ("MPU6050", "mpu6050.log"),
    ("MQ135", "mq135.log"),
    ("QMC5883L", "qmc5883l.log"),
];

/// One sensor backed by a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorLogFile {
    pub sensor_type: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Data endpoint consumed by the dashboard
    pub data_base_url: String,
    pub data_fetch_timeout_seconds: Option<u64>,

    // Log-file source behind GET /data
    pub sensor_log_dir: PathBuf,
    pub sensor_log_files: Vec<SensorLogFile>,

    // Chart construction
    pub chart_color_seed: Option<u64>,
    pub sort_readings: bool,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `DATA_BASE_URL` is not an http(s) URL
    /// or `SENSOR_LOG_FILES` contains an entry without `=`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let data_base_url = env::var("DATA_BASE_URL")
            .unwrap_or_else(|_| format!("http://127.0.0.1:{api_port}"));
        if !(data_base_url.starts_with("http://") || data_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "DATA_BASE_URL",
                reason: format!("expected an http(s) URL, got '{data_base_url}'"),
            });
        }

        let sensor_log_dir = PathBuf::from(
            env::var("SENSOR_LOG_DIR").unwrap_or_else(|_| ".".to_string()),
        );
        let sensor_log_files = match env::var("SENSOR_LOG_FILES") {
            Ok(raw) => parse_sensor_log_files(&raw, &sensor_log_dir)?,
            Err(_) => DEFAULT_SENSOR_LOG_FILES
                .iter()
                .map(|(name, file)| SensorLogFile {
                    sensor_type: (*name).to_string(),
                    path: sensor_log_dir.join(file),
                })
                .collect(),
        };

        Ok(Self {
            // API settings
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port,

            // Data endpoint
            data_base_url: data_base_url.trim_end_matches('/').to_string(),
            data_fetch_timeout_seconds: env::var("DATA_FETCH_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok()),

            // Log-file source
            sensor_log_dir,
            sensor_log_files,

            // Chart construction
            chart_color_seed: env::var("CHART_COLOR_SEED")
                .ok()
                .and_then(|s| s.parse().ok()),
            sort_readings: env::var("SORT_READINGS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// URL of the sensor-group document fetched on every page load.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("{}/data", self.data_base_url)
    }
}

/// Parse `name=path,name=path` pairs; relative paths are resolved against `dir`.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` for an entry without `=` or with an empty name.
pub fn parse_sensor_log_files(
    raw: &str,
    dir: &std::path::Path,
) -> Result<Vec<SensorLogFile>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, path) = entry.split_once('=').ok_or_else(|| ConfigError::Invalid {
                name: "SENSOR_LOG_FILES",
                reason: format!("entry '{entry}' is not of the form name=path"),
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Invalid {
                    name: "SENSOR_LOG_FILES",
                    reason: format!("entry '{entry}' has an empty sensor name"),
                });
            }
            Ok(SensorLogFile {
                sensor_type: name.to_string(),
                path: dir.join(path.trim()),
            })
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
