//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default threshold, only edit this file.

// ============================================
// Rule thresholds
// ============================================

/// Thermal reading above which a forest is considered at critical risk (Kelvin)
pub const DEFAULT_THERMAL_THRESHOLD: f64 = 330.0;

/// Humidity below which a hot forest is considered at critical risk (%)
pub const DEFAULT_HUMIDITY_THRESHOLD: f64 = 30.0;

/// Wind speed above which weather is considered extreme (km/h)
pub const DEFAULT_WIND_SPEED_THRESHOLD: f64 = 15.0;

/// Humidity below which weather is considered extreme (%)
pub const DEFAULT_EXTREME_HUMIDITY_MAX: f64 = 20.0;

/// Thermal floor shared by the extreme weather and asset proximity rules (Kelvin)
pub const DEFAULT_ELEVATED_THERMAL_MIN: f64 = 315.0;

/// Vegetation density above which fuel load is considered dense
pub const DEFAULT_DENSE_VEGETATION_MIN: f64 = 0.6;

/// Thermal floor for the dense vegetation rule (Kelvin)
pub const DEFAULT_VEGETATION_THERMAL_MIN: f64 = 325.0;

/// Humidity ceiling for the dense vegetation rule (%)
pub const DEFAULT_VEGETATION_HUMIDITY_MAX: f64 = 40.0;

/// Distance under which an asset is considered exposed (km)
pub const DEFAULT_ASSET_DISTANCE_MAX_KM: f64 = 5.0;

// ============================================
// Fusion / perception
// ============================================

/// Hotspot detections older than this are ignored
pub const DEFAULT_MAX_THERMAL_AGE_HOURS: f64 = 6.0;

/// Reserved: weather age limit, not enforced yet
pub const DEFAULT_MAX_WEATHER_AGE_HOURS: f64 = 12.0;

/// Hotspots at or below this confidence never override the ambient reading
pub const HOTSPOT_CONFIDENCE_MIN: f64 = 0.5;

/// Search radius for nearby hotspot lookups (meters)
pub const DEFAULT_HOTSPOT_SEARCH_RADIUS_M: u32 = 5_000;

/// Deadline for a single perceive step (milliseconds)
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 10_000;

// ============================================
// Decision scoring
// ============================================

/// Confidence contributed by each triggered rule
pub const CONFIDENCE_PER_RULE: f64 = 0.3;

/// Separator used when joining triggered rule messages
pub const ALERT_SEPARATOR: &str = "; ";

// ============================================
// Environment variable names
// ============================================

pub const ENV_THERMAL_THRESHOLD: &str = "THERMAL_THRESHOLD";
pub const ENV_HUMIDITY_THRESHOLD: &str = "HUMIDITY_THRESHOLD";
pub const ENV_WIND_SPEED_THRESHOLD: &str = "WIND_SPEED_THRESHOLD";
pub const ENV_MAX_THERMAL_AGE_HOURS: &str = "MAX_THERMAL_AGE_HOURS";
pub const ENV_MAX_WEATHER_AGE_HOURS: &str = "MAX_WEATHER_AGE_HOURS";
pub const ENV_HOTSPOT_SEARCH_RADIUS_M: &str = "HOTSPOT_SEARCH_RADIUS_M";
pub const ENV_PROVIDER_TIMEOUT_MS: &str = "PROVIDER_TIMEOUT_MS";
