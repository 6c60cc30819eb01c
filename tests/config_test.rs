//! Tests for environment-driven configuration.
//!
//! Run with: cargo test --test config_test

use std::path::PathBuf;

use sensor_dashboard::config::{parse_sensor_log_files, Config, ConfigError, Deployment};

const VARS: &[&str] = &[
    "API_HOST",
    "API_PORT",
    "DATA_BASE_URL",
    "DATA_FETCH_TIMEOUT_SECONDS",
    "SENSOR_LOG_DIR",
    "SENSOR_LOG_FILES",
    "CHART_COLOR_SEED",
    "SORT_READINGS",
    "DEPLOYMENT",
];

fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let all: Vec<(&str, Option<&str>)> = VARS
        .iter()
        .map(|name| {
            let value = vars.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(all, f)
}

#[test]
fn defaults_point_the_dashboard_at_this_service() {
    let config = with_env(&[], || Config::from_env().unwrap());

    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.data_url(), "http://127.0.0.1:3000/data");
    assert_eq!(config.data_fetch_timeout_seconds, None);
    assert_eq!(config.chart_color_seed, None);
    assert!(config.sort_readings);
    assert_eq!(config.deployment, Deployment::Local);

    let sensors: Vec<_> = config
        .sensor_log_files
        .iter()
        .map(|f| f.sensor_type.as_str())
        .collect();
    assert_eq!(sensors, ["BH1750", "DHT22", "MPU6050", "MQ135", "QMC5883L"]);
    assert_eq!(config.sensor_log_files[0].path, PathBuf::from("./bh1750.log"));
}

#[test]
fn overrides_are_read_from_the_environment() {
    let config = with_env(
        &[
            ("API_PORT", "8080"),
            ("DATA_BASE_URL", "https://mesh.local/api/"),
            ("DATA_FETCH_TIMEOUT_SECONDS", "10"),
            ("SENSOR_LOG_DIR", "/var/log/mesh"),
            ("SENSOR_LOG_FILES", "light=light.log, gas = gas.log"),
            ("CHART_COLOR_SEED", "99"),
            ("SORT_READINGS", "false"),
            ("DEPLOYMENT", "production"),
        ],
        || Config::from_env().unwrap(),
    );

    assert_eq!(config.api_port, 8080);
    assert_eq!(config.data_url(), "https://mesh.local/api/data");
    assert_eq!(config.data_fetch_timeout_seconds, Some(10));
    assert_eq!(config.chart_color_seed, Some(99));
    assert!(!config.sort_readings);
    assert_eq!(config.deployment, Deployment::Prod);
    assert_eq!(config.sensor_log_files.len(), 2);
    assert_eq!(config.sensor_log_files[1].sensor_type, "gas");
    assert_eq!(
        config.sensor_log_files[1].path,
        PathBuf::from("/var/log/mesh/gas.log")
    );
}

#[test]
fn non_http_data_url_is_rejected() {
    let result = with_env(&[("DATA_BASE_URL", "ftp://mesh.local")], Config::from_env);

    assert!(matches!(
        result,
        Err(ConfigError::Invalid {
            name: "DATA_BASE_URL",
            ..
        })
    ));
}

#[test]
fn sensor_log_entries_need_a_name_and_path() {
    let dir = PathBuf::from("logs");

    assert!(parse_sensor_log_files("light", &dir).is_err());
    assert!(parse_sensor_log_files("=light.log", &dir).is_err());

    let files = parse_sensor_log_files("light=light.log,,", &dir).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, PathBuf::from("logs/light.log"));
}
