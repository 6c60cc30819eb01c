use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;

/// Key every reading's `data` carries to name its sensor; never plotted.
pub const SENSOR_TYPE_KEY: &str = "sensor_type";

/// One record from `GET /data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SensorReading {
    /// ISO-8601 string (or epoch milliseconds) as reported by the server.
    /// Kept untyped so one odd reading cannot fail the whole document.
    #[serde(default)]
    #[schema(value_type = String)]
    pub timestamp: Value,
    /// Open field map: `sensor_type` plus sensor-specific measurements
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Value,
}

impl SensorReading {
    #[must_use]
    pub fn new(timestamp: impl Into<Value>, data: Value) -> Self {
        Self {
            timestamp: timestamp.into(),
            data,
        }
    }

    /// The `data` payload, if it is a JSON object.
    #[must_use]
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.data.as_object()
    }

    /// Value of `field` when it holds a JSON number.
    #[must_use]
    pub fn numeric(&self, field: &str) -> Option<f64> {
        self.fields()?.get(field)?.as_f64()
    }

    /// Timestamp on the time axis: ISO-8601 strings and epoch-millisecond
    /// numbers are accepted, anything else is `None`.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        match &self.timestamp {
            Value::String(raw) => parse_timestamp(raw),
            Value::Number(millis) => millis
                .as_i64()
                .or_else(|| millis.as_f64().filter(|m| m.is_finite()).map(|m| m as i64))
                .and_then(DateTime::from_timestamp_millis),
            _ => None,
        }
    }
}

/// Parse an ISO-8601 timestamp. Forms without an offset are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// All readings reported under one sensor-type key.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SensorGroup {
    pub sensor_type: String,
    pub readings: Vec<SensorReading>,
}

/// Response body of `GET /data`: sensor type -> readings.
///
/// Serialized as a JSON object. Key order is kept exactly as received, which
/// is also the order charts are laid out in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorGroups(Vec<SensorGroup>);

impl SensorGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, replacing the readings of an existing key in place.
    pub fn insert(&mut self, sensor_type: impl Into<String>, readings: Vec<SensorReading>) {
        let sensor_type = sensor_type.into();
        match self.0.iter_mut().find(|g| g.sensor_type == sensor_type) {
            Some(group) => group.readings = readings,
            None => self.0.push(SensorGroup {
                sensor_type,
                readings,
            }),
        }
    }

    #[must_use]
    pub fn get(&self, sensor_type: &str) -> Option<&[SensorReading]> {
        self.0
            .iter()
            .find(|g| g.sensor_type == sensor_type)
            .map(|g| g.readings.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SensorGroup> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SensorGroups {
    type Item = &'a SensorGroup;
    type IntoIter = std::slice::Iter<'a, SensorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Vec<SensorReading>)> for SensorGroups {
    fn from_iter<I: IntoIterator<Item = (String, Vec<SensorReading>)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (sensor_type, readings) in iter {
            groups.insert(sensor_type, readings);
        }
        groups
    }
}

impl Serialize for SensorGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|g| (&g.sensor_type, &g.readings)))
    }
}

impl<'de> Deserialize<'de> for SensorGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = SensorGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping sensor types to arrays of readings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut groups = SensorGroups::new();
                while let Some((sensor_type, readings)) =
                    map.next_entry::<String, Vec<SensorReading>>()?
                {
                    groups.insert(sensor_type, readings);
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}
