pub mod client;
pub mod models;

pub use client::SensorDataClient;
pub use models::{SensorGroup, SensorGroups, SensorReading};
