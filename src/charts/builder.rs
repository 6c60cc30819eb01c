use crate::charts::chartjs::{ChartConfig, ChartPoint, Dataset};
use crate::charts::color::{ColorGenerator, Rgb};
use crate::charts::discovery::discover_numeric_fields;
use crate::sensors::models::SensorReading;

/// One line's worth of points for a single numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub field_name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build the series for `field` from `readings`.
    ///
    /// Every reading with a parseable timestamp yields a point; the value is
    /// `None` where the field is absent or not a number. With `sort_by_time`
    /// the points are stably ordered by timestamp, otherwise they keep the
    /// reading order.
    #[must_use]
    pub fn from_readings(field: &str, readings: &[SensorReading], sort_by_time: bool) -> Self {
        let mut points: Vec<ChartPoint> = readings
            .iter()
            .filter_map(|reading| {
                let x = reading.parsed_timestamp()?;
                Some(ChartPoint {
                    x,
                    y: reading.numeric(field),
                })
            })
            .collect();

        if sort_by_time {
            points.sort_by_key(|p| p.x);
        }

        Self {
            field_name: field.to_string(),
            points,
        }
    }

    #[must_use]
    pub fn into_dataset(self, color: Rgb) -> Dataset {
        Dataset {
            label: self.field_name,
            data: self.points,
            border_width: 1,
            border_color: color,
            fill: false,
        }
    }
}

/// Build the chart for one sensor type: one series per discovered numeric field.
pub fn build_sensor_chart(
    sensor_type: &str,
    readings: &[SensorReading],
    colors: &mut ColorGenerator,
    sort_by_time: bool,
) -> ChartConfig {
    let fields = discover_numeric_fields(readings);

    let mut used = Vec::with_capacity(fields.len());
    let datasets = fields
        .iter()
        .map(|field| {
            let color = colors.next_distinct(&used);
            used.push(color);
            ChartSeries::from_readings(field, readings, sort_by_time).into_dataset(color)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        sensor_type,
        readings = readings.len(),
        series = datasets.len(),
        "Built sensor chart"
    );

    ChartConfig::line(sensor_type, datasets)
}
