//! Percept Types
//!
//! Core types cho một chu kỳ perceive.
//! KHÔNG chứa logic validate - chỉ data structures.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// LAND USE
// ============================================================================

/// Land cover classification reported by the provider.
///
/// Only `Urban`, `Forest` and `Grassland` are accepted by the guardrail;
/// anything else is kept verbatim in `Other` so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LandUse {
    Urban,
    Forest,
    Grassland,
    Other(String),
}

impl LandUse {
    /// Exact, case-sensitive match; anything else is `Other`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "urban" => LandUse::Urban,
            "forest" => LandUse::Forest,
            "grassland" => LandUse::Grassland,
            _ => LandUse::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LandUse::Urban => "urban",
            LandUse::Forest => "forest",
            LandUse::Grassland => "grassland",
            LandUse::Other(raw) => raw.as_str(),
        }
    }

    /// Member of the closed set {urban, forest, grassland}
    pub fn is_known(&self) -> bool {
        !matches!(self, LandUse::Other(_))
    }

    /// Forest or grassland
    pub fn is_vegetated(&self) -> bool {
        matches!(self, LandUse::Forest | LandUse::Grassland)
    }
}

impl From<String> for LandUse {
    fn from(raw: String) -> Self {
        LandUse::parse(&raw)
    }
}

impl From<LandUse> for String {
    fn from(landuse: LandUse) -> Self {
        landuse.as_str().to_string()
    }
}

impl std::fmt::Display for LandUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ENVIRONMENTAL PERCEPTS
// ============================================================================

/// One snapshot of sensed conditions at a point and time.
///
/// A non-finite float marks a reading the provider could not supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalPercepts {
    /// Temperature in Kelvin
    pub thermal: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
    pub landuse: LandUse,
    /// Vegetation density index (0-1)
    pub vegetation_density: f64,
    /// Distance to nearest asset (km)
    pub asset_proximity: f64,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// PROVIDER READINGS
// ============================================================================

/// Weather reading from the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
}

/// Nearby hotspot detection, consumed only by thermal fusion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalActivityRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Detection confidence (0-1)
    pub confidence: f64,
    /// Distance to the detection (meters)
    pub distance_m: f64,
    /// Raw acquisition timestamp as reported (ISO 8601)
    pub acquisition: Option<String>,
}

impl ThermalActivityRecord {
    pub fn new(confidence: f64, acquired_at: DateTime<Utc>) -> Self {
        Self {
            latitude: None,
            longitude: None,
            confidence,
            distance_m: 0.0,
            acquisition: Some(acquired_at.to_rfc3339()),
        }
    }

    /// Parse the acquisition timestamp.
    ///
    /// Accepts RFC 3339 and offset-less ISO 8601 (read as UTC).
    pub fn acquired_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.acquisition.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Hours elapsed between acquisition and `now`
    pub fn age_hours(&self, now: DateTime<Utc>) -> Option<f64> {
        let acquired = self.acquired_at()?;
        Some((now - acquired).num_milliseconds() as f64 / 3_600_000.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_landuse_parse() {
        assert_eq!(LandUse::parse("forest"), LandUse::Forest);
        assert_eq!(LandUse::parse("grassland"), LandUse::Grassland);
        assert_eq!(LandUse::parse(" Forest "), LandUse::Other(" Forest ".to_string()));
        assert!(!LandUse::parse("Forest").is_known());
        assert_eq!(LandUse::parse("space"), LandUse::Other("space".to_string()));
        assert!(!LandUse::parse("space").is_known());
        assert!(LandUse::Forest.is_vegetated());
        assert!(!LandUse::Urban.is_vegetated());
    }

    #[test]
    fn test_landuse_serde_as_string() {
        let json = serde_json::to_string(&LandUse::Forest).unwrap();
        assert_eq!(json, "\"forest\"");
        let parsed: LandUse = serde_json::from_str("\"space\"").unwrap();
        assert_eq!(parsed, LandUse::Other("space".to_string()));
    }

    #[test]
    fn test_acquisition_formats() {
        let mut record = ThermalActivityRecord::new(0.8, Utc::now());
        assert!(record.acquired_at().is_some());

        record.acquisition = Some("2024-07-01T12:30:00.123456+00:00".to_string());
        assert!(record.acquired_at().is_some());

        record.acquisition = Some("2024-07-01T12:30:00".to_string());
        assert!(record.acquired_at().is_some());

        record.acquisition = Some("yesterday".to_string());
        assert!(record.acquired_at().is_none());

        record.acquisition = None;
        assert!(record.acquired_at().is_none());
    }

    #[test]
    fn test_age_hours() {
        let now = Utc::now();
        let record = ThermalActivityRecord::new(0.9, now - Duration::minutes(150));
        let age = record.age_hours(now).unwrap();
        assert!((age - 2.5).abs() < 1e-6);
    }
}
