//! Percept Module
//!
//! Immutable value records passed between pipeline stages.
//! Created fresh each cycle, never persisted.

pub mod types;

pub use types::{EnvironmentalPercepts, LandUse, ThermalActivityRecord, WeatherReading};
