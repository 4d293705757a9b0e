//! Rule Thresholds
//!
//! Configuration cho default rules.
//! Rule engine không biết threshold - rules capture chúng lúc register.

use serde::{Deserialize, Serialize};

use crate::constants::*;

// ============================================================================
// RULE THRESHOLDS
// ============================================================================

/// Thresholds closed over by the default rule set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// high_temperature_forest: thermal above (K)
    pub thermal: f64,
    /// high_temperature_forest: humidity below (%)
    pub humidity: f64,
    /// extreme_weather: wind speed above (km/h)
    pub wind_speed: f64,
    /// extreme_weather: humidity below (%)
    pub extreme_humidity_max: f64,
    /// extreme_weather and asset_proximity: thermal above (K)
    pub elevated_thermal_min: f64,
    /// vegetation_thermal: density above
    pub dense_vegetation_min: f64,
    /// vegetation_thermal: thermal above (K)
    pub vegetation_thermal_min: f64,
    /// vegetation_thermal: humidity below (%)
    pub vegetation_humidity_max: f64,
    /// asset_proximity: distance below (km)
    pub asset_distance_max_km: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            thermal: DEFAULT_THERMAL_THRESHOLD,
            humidity: DEFAULT_HUMIDITY_THRESHOLD,
            wind_speed: DEFAULT_WIND_SPEED_THRESHOLD,
            extreme_humidity_max: DEFAULT_EXTREME_HUMIDITY_MAX,
            elevated_thermal_min: DEFAULT_ELEVATED_THERMAL_MIN,
            dense_vegetation_min: DEFAULT_DENSE_VEGETATION_MIN,
            vegetation_thermal_min: DEFAULT_VEGETATION_THERMAL_MIN,
            vegetation_humidity_max: DEFAULT_VEGETATION_HUMIDITY_MAX,
            asset_distance_max_km: DEFAULT_ASSET_DISTANCE_MAX_KM,
        }
    }
}
