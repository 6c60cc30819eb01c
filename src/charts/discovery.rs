use std::collections::BTreeSet;

use crate::sensors::models::{SensorReading, SENSOR_TYPE_KEY};

/// Union of the numeric fields present across `readings`.
///
/// A field counts when its value is a JSON number in at least one reading.
/// `sensor_type` is never a field. Readings whose `data` is missing or not an
/// object contribute nothing. The result does not depend on reading order.
#[must_use]
pub fn discover_numeric_fields(readings: &[SensorReading]) -> BTreeSet<String> {
    readings
        .iter()
        .filter_map(SensorReading::fields)
        .flat_map(|fields| fields.iter())
        .filter(|(key, value)| key.as_str() != SENSOR_TYPE_KEY && value.is_number())
        .map(|(key, _)| key.clone())
        .collect()
}
