//! Default Wildfire Rules
//!
//! Built-in condition-action rules. Names and messages are part of the
//! decision output contract; do not reword them.

use std::sync::Arc;

use crate::logic::percept::{EnvironmentalPercepts, LandUse};
use super::config::RuleThresholds;
use super::rule::{ConditionRule, RuleError};

pub const HIGH_TEMPERATURE_FOREST: &str = "high_temperature_forest";
pub const EXTREME_WEATHER: &str = "extreme_weather";
pub const VEGETATION_THERMAL: &str = "vegetation_thermal";
pub const ASSET_PROXIMITY: &str = "asset_proximity";

pub const HIGH_TEMPERATURE_FOREST_MSG: &str =
    "🔥 CRITICAL wildfire risk: High temperature in forest with low humidity";
pub const EXTREME_WEATHER_MSG: &str = "⚠️ HIGH wildfire risk: Extreme weather conditions";
pub const VEGETATION_THERMAL_MSG: &str =
    "🌲 HIGH wildfire risk: Dense vegetation with elevated temperature";
pub const ASSET_PROXIMITY_MSG: &str = "🏘️ MEDIUM wildfire risk: Potential threat to nearby assets";

fn fire_if(condition: bool, message: &str) -> Result<Option<String>, RuleError> {
    Ok(condition.then(|| message.to_string()))
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

/// Hot, dry forest
pub struct HighTemperatureForestRule {
    pub thermal_min: f64,
    pub humidity_max: f64,
}

impl ConditionRule for HighTemperatureForestRule {
    fn name(&self) -> &str {
        HIGH_TEMPERATURE_FOREST
    }

    fn evaluate(&self, p: &EnvironmentalPercepts) -> Result<Option<String>, RuleError> {
        fire_if(
            p.thermal > self.thermal_min
                && p.landuse == LandUse::Forest
                && p.humidity < self.humidity_max,
            HIGH_TEMPERATURE_FOREST_MSG,
        )
    }
}

/// Strong wind, very dry air, elevated temperature
pub struct ExtremeWeatherRule {
    pub wind_speed_min: f64,
    pub humidity_max: f64,
    pub thermal_min: f64,
}

impl ConditionRule for ExtremeWeatherRule {
    fn name(&self) -> &str {
        EXTREME_WEATHER
    }

    fn evaluate(&self, p: &EnvironmentalPercepts) -> Result<Option<String>, RuleError> {
        fire_if(
            p.wind_speed > self.wind_speed_min
                && p.humidity < self.humidity_max
                && p.thermal > self.thermal_min,
            EXTREME_WEATHER_MSG,
        )
    }
}

/// Dense fuel load under heat
pub struct VegetationThermalRule {
    pub density_min: f64,
    pub thermal_min: f64,
    pub humidity_max: f64,
}

impl ConditionRule for VegetationThermalRule {
    fn name(&self) -> &str {
        VEGETATION_THERMAL
    }

    fn evaluate(&self, p: &EnvironmentalPercepts) -> Result<Option<String>, RuleError> {
        fire_if(
            p.vegetation_density > self.density_min
                && p.thermal > self.thermal_min
                && p.humidity < self.humidity_max,
            VEGETATION_THERMAL_MSG,
        )
    }
}

/// Warm vegetated land close to assets
pub struct AssetProximityRule {
    pub distance_max_km: f64,
    pub thermal_min: f64,
}

impl ConditionRule for AssetProximityRule {
    fn name(&self) -> &str {
        ASSET_PROXIMITY
    }

    fn evaluate(&self, p: &EnvironmentalPercepts) -> Result<Option<String>, RuleError> {
        fire_if(
            p.asset_proximity < self.distance_max_km
                && p.thermal > self.thermal_min
                && p.landuse.is_vegetated(),
            ASSET_PROXIMITY_MSG,
        )
    }
}

/// Default rule set in registration order
pub fn default_rules(t: &RuleThresholds) -> Vec<Arc<dyn ConditionRule>> {
    vec![
        Arc::new(HighTemperatureForestRule {
            thermal_min: t.thermal,
            humidity_max: t.humidity,
        }),
        Arc::new(ExtremeWeatherRule {
            wind_speed_min: t.wind_speed,
            humidity_max: t.extreme_humidity_max,
            thermal_min: t.elevated_thermal_min,
        }),
        Arc::new(VegetationThermalRule {
            density_min: t.dense_vegetation_min,
            thermal_min: t.vegetation_thermal_min,
            humidity_max: t.vegetation_humidity_max,
        }),
        Arc::new(AssetProximityRule {
            distance_max_km: t.asset_distance_max_km,
            thermal_min: t.elevated_thermal_min,
        }),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
