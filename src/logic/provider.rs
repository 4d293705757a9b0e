//! Environmental Data Provider
//!
//! Capability consumed by the perceive step. Implementations (mock or live
//! satellite/weather APIs) live outside this crate.

use thiserror::Error;

use super::percept::{LandUse, ThermalActivityRecord, WeatherReading};

/// Provider could not supply a reading
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("{source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
    #[error("{source_name} returned an invalid response: {reason}")]
    InvalidResponse { source_name: String, reason: String },
    #[error("{source_name} timed out")]
    Timeout { source_name: String },
}

impl ProviderError {
    pub fn unavailable(source_name: &str, reason: impl Into<String>) -> Self {
        ProviderError::Unavailable {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Source of environmental readings for a coordinate.
///
/// Every call is blocking. Retry/backoff, if any, belongs to the implementation.
pub trait EnvironmentalDataProvider: Send + Sync {
    /// Ambient thermal reading (Kelvin)
    fn get_thermal_data(&self, lat: f64, lon: f64) -> Result<f64, ProviderError>;

    fn get_land_cover(&self, lat: f64, lon: f64) -> Result<LandUse, ProviderError>;

    fn get_weather_data(&self, lat: f64, lon: f64) -> Result<WeatherReading, ProviderError>;

    /// Vegetation density index (0-1)
    fn get_vegetation_density(&self, lat: f64, lon: f64) -> Result<f64, ProviderError>;

    /// Distance to the nearest asset (km)
    fn get_asset_proximity(&self, lat: f64, lon: f64) -> Result<f64, ProviderError>;

    /// Nearest hotspot within `radius_m`, if any
    fn get_thermal_activity_nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
    ) -> Result<Option<ThermalActivityRecord>, ProviderError>;
}
