//! Unit tests for numeric field discovery.
//!
//! Run with: cargo test --test discovery_unit_test

use serde_json::json;
use std::collections::BTreeSet;

use sensor_dashboard::charts::discover_numeric_fields;
use sensor_dashboard::sensors::SensorReading;

fn reading(data: serde_json::Value) -> SensorReading {
    SensorReading::new("2024-01-01T00:00:00Z", data)
}

fn set(fields: &[&str]) -> BTreeSet<String> {
    fields.iter().map(ToString::to_string).collect()
}

#[test]
fn numeric_fields_exclude_sensor_type_and_non_numbers() {
    let readings = vec![reading(json!({
        "sensor_type": "gas",
        "co2": 412.5,
        "tvoc": 12,
        "unit": "ppm",
        "ok": true,
        "raw": [1, 2],
        "missing": null,
    }))];

    assert_eq!(discover_numeric_fields(&readings), set(&["co2", "tvoc"]));
}

#[test]
fn fields_are_the_union_across_readings() {
    let readings = vec![
        reading(json!({"sensor_type": "temperature_humidity", "temperature_c": 21.4})),
        reading(json!({"sensor_type": "temperature_humidity", "humidity": 40})),
        reading(json!({"sensor_type": "temperature_humidity", "temperature_c": 21.6, "heat_index": 22.0})),
    ];

    assert_eq!(
        discover_numeric_fields(&readings),
        set(&["heat_index", "humidity", "temperature_c"])
    );
}

#[test]
fn discovery_ignores_reading_order() {
    let readings = vec![
        reading(json!({"sensor_type": "imu", "ax": 0.1})),
        reading(json!({"sensor_type": "imu", "ay": -0.2, "label": "x"})),
        reading(json!({"sensor_type": "imu", "az": 9.81})),
    ];
    let mut reversed = readings.clone();
    reversed.reverse();

    let forward = discover_numeric_fields(&readings);
    assert_eq!(forward, discover_numeric_fields(&reversed));
    assert_eq!(forward, discover_numeric_fields(&[readings.clone(), readings].concat()));
}

#[test]
fn a_field_numeric_in_any_reading_is_discovered() {
    let readings = vec![
        reading(json!({"sensor_type": "light", "lux": "n/a"})),
        reading(json!({"sensor_type": "light", "lux": 120})),
    ];

    assert_eq!(discover_numeric_fields(&readings), set(&["lux"]));
}

#[test]
fn malformed_data_contributes_nothing() {
    let readings = vec![
        reading(serde_json::Value::Null),
        reading(json!("not an object")),
        reading(json!([1, 2, 3])),
        reading(json!({"sensor_type": "light"})),
    ];

    assert!(discover_numeric_fields(&readings).is_empty());
    assert!(discover_numeric_fields(&[]).is_empty());
}
