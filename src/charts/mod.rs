pub mod builder;
pub mod chartjs;
pub mod color;
pub mod discovery;

pub use builder::{build_sensor_chart, ChartSeries};
pub use chartjs::ChartConfig;
pub use color::{ColorGenerator, Rgb};
pub use discovery::discover_numeric_fields;
