//! Agent Configuration
//!
//! Loaded from environment variables (and an optional `.env` file).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use super::fusion::ThermalFusion;
use super::rules::RuleThresholds;

/// Reflex agent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Critical thermal threshold (K); also the fusion override value
    pub thermal_threshold: f64,

    /// Humidity threshold for hot forests (%)
    pub humidity_threshold: f64,

    /// Wind speed threshold for extreme weather (km/h)
    pub wind_speed_threshold: f64,

    /// Hotspot detections older than this are ignored
    pub max_thermal_age_hours: f64,

    /// Reserved, not enforced on weather data yet
    pub max_weather_age_hours: f64,

    /// Radius for nearby hotspot lookups (meters)
    pub hotspot_search_radius_m: u32,

    /// Deadline for the perceive step in `run_with_timeout`
    pub provider_timeout_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            thermal_threshold: DEFAULT_THERMAL_THRESHOLD,
            humidity_threshold: DEFAULT_HUMIDITY_THRESHOLD,
            wind_speed_threshold: DEFAULT_WIND_SPEED_THRESHOLD,
            max_thermal_age_hours: DEFAULT_MAX_THERMAL_AGE_HOURS,
            max_weather_age_hours: DEFAULT_MAX_WEATHER_AGE_HOURS,
            hotspot_search_radius_m: DEFAULT_HOTSPOT_SEARCH_RADIUS_M,
            provider_timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
        }
    }
}

impl AgentConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load from any key lookup; unparseable values fall back to defaults
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            thermal_threshold: parse_or(&lookup, ENV_THERMAL_THRESHOLD, defaults.thermal_threshold),
            humidity_threshold: parse_or(&lookup, ENV_HUMIDITY_THRESHOLD, defaults.humidity_threshold),
            wind_speed_threshold: parse_or(&lookup, ENV_WIND_SPEED_THRESHOLD, defaults.wind_speed_threshold),
            max_thermal_age_hours: parse_or(&lookup, ENV_MAX_THERMAL_AGE_HOURS, defaults.max_thermal_age_hours),
            max_weather_age_hours: parse_or(&lookup, ENV_MAX_WEATHER_AGE_HOURS, defaults.max_weather_age_hours),
            hotspot_search_radius_m: parse_or(&lookup, ENV_HOTSPOT_SEARCH_RADIUS_M, defaults.hotspot_search_radius_m),
            provider_timeout_ms: parse_or(&lookup, ENV_PROVIDER_TIMEOUT_MS, defaults.provider_timeout_ms),
        }
    }

    /// Load from a JSON document; missing keys take defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Thresholds for the default rule set
    pub fn rule_thresholds(&self) -> RuleThresholds {
        RuleThresholds {
            thermal: self.thermal_threshold,
            humidity: self.humidity_threshold,
            wind_speed: self.wind_speed_threshold,
            ..Default::default()
        }
    }

    /// Fusion settings; the override value is the critical thermal threshold
    pub fn thermal_fusion(&self) -> ThermalFusion {
        ThermalFusion::new(self.max_thermal_age_hours, self.thermal_threshold)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid value for {}: '{}', using default", key, raw);
            default
        }),
        None => default,
    }
}

// ============================================================================
// TESTS
// ============================================================================
