//! Sensor Dashboard - per-sensor-type time-series charts for mesh sensor readings
//!
//! This library exposes the core modules for testing and reuse.

pub mod charts;
pub mod common;
pub mod config;
pub mod error;
pub mod routes;
pub mod sensors;
pub mod services;
