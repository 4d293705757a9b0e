//! Percept Validation
//!
//! CHỈ chứa logic kiểm tra - không sửa percepts.
//! Input: EnvironmentalPercepts
//! Output: ValidationReport / bool

use crate::logic::percept::{EnvironmentalPercepts, LandUse};
use super::types::{ValidationReport, Violation};

// ============================================================================
// PHYSICAL RANGES
// ============================================================================

pub const THERMAL_RANGE: (f64, f64) = (200.0, 400.0);
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
pub const WIND_SPEED_RANGE: (f64, f64) = (0.0, 200.0);
pub const VEGETATION_RANGE: (f64, f64) = (0.0, 1.0);
pub const ASSET_PROXIMITY_RANGE: (f64, f64) = (0.0, f64::INFINITY);
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

// ============================================================================
// GUARD
// ============================================================================

/// Pre-decision gate rejecting incomplete or implausible percepts.
///
/// Stateless; every check runs so all violations reach the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationGuard;

impl ValidationGuard {
    pub fn new() -> Self {
        Self
    }

    /// Run every check and collect the violations
    pub fn check(&self, percepts: &EnvironmentalPercepts) -> ValidationReport {
        let mut violations = Vec::new();

        check_range(&mut violations, "thermal", percepts.thermal, THERMAL_RANGE);
        check_range(&mut violations, "humidity", percepts.humidity, HUMIDITY_RANGE);
        check_range(&mut violations, "wind_speed", percepts.wind_speed, WIND_SPEED_RANGE);
        check_range(
            &mut violations,
            "vegetation_density",
            percepts.vegetation_density,
            VEGETATION_RANGE,
        );
        check_range(
            &mut violations,
            "asset_proximity",
            percepts.asset_proximity,
            ASSET_PROXIMITY_RANGE,
        );
        check_range(&mut violations, "latitude", percepts.latitude, LATITUDE_RANGE);
        check_range(&mut violations, "longitude", percepts.longitude, LONGITUDE_RANGE);
        check_landuse(&mut violations, &percepts.landuse);

        for violation in &violations {
            log::warn!("Percept validation failed: {}", violation);
        }

        ValidationReport { violations }
    }

    /// True when the percepts may be handed to the rule engine
    pub fn validate(&self, percepts: &EnvironmentalPercepts) -> bool {
        let report = self.check(percepts);
        if !report.is_valid() {
            log::warn!(
                "Rejected percepts at ({}, {}): {} violation(s)",
                percepts.latitude,
                percepts.longitude,
                report.violations.len()
            );
        }
        report.is_valid()
    }
}

/// Validate with the default guard
pub fn validate(percepts: &EnvironmentalPercepts) -> bool {
    ValidationGuard::new().validate(percepts)
}

fn check_range(out: &mut Vec<Violation>, field: &'static str, value: f64, (min, max): (f64, f64)) {
    if !value.is_finite() {
        out.push(Violation::Missing { field });
    } else if value < min || value > max {
        out.push(Violation::OutOfRange { field, value, min, max });
    }
}

fn check_landuse(out: &mut Vec<Violation>, landuse: &LandUse) {
    match landuse {
        LandUse::Other(raw) if raw.trim().is_empty() => {
            out.push(Violation::Missing { field: "landuse" });
        }
        LandUse::Other(raw) => {
            out.push(Violation::UnknownLandUse { value: raw.clone() });
        }
        _ => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================
