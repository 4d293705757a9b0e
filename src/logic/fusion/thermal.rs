//! Temporal Thermal Fusion
//!
//! Quyết định hotspot có được override thermal reading hay không.
//! Input: baseline thermal + optional ThermalActivityRecord
//! Output: FusedThermal (baseline hoặc override constant - không nội suy)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_THERMAL_AGE_HOURS, DEFAULT_THERMAL_THRESHOLD, HOTSPOT_CONFIDENCE_MIN,
};
use crate::logic::guard::validate::THERMAL_RANGE;
use crate::logic::percept::ThermalActivityRecord;

// ============================================================================
// OUTCOME TYPES
// ============================================================================

/// Why the fused value is what it is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FusionOutcome {
    /// No hotspot reported nearby
    NoDetection,
    /// Ambient reading missing or implausible; left for the guardrail to reject
    InvalidBaseline,
    /// Acquisition timestamp missing, unparseable or in the future
    Unusable,
    /// Detection older than the age limit
    Stale { age_hours: f64 },
    /// Detection confidence at or below the minimum
    LowConfidence { confidence: f64 },
    /// Ambient reading already at or above the override value
    AmbientHotter { confidence: f64, age_hours: f64 },
    /// Thermal replaced by the override value
    Overridden { confidence: f64, age_hours: f64 },
}

impl FusionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            FusionOutcome::NoDetection => "no_detection",
            FusionOutcome::InvalidBaseline => "invalid_baseline",
            FusionOutcome::Unusable => "unusable",
            FusionOutcome::Stale { .. } => "stale",
            FusionOutcome::LowConfidence { .. } => "low_confidence",
            FusionOutcome::AmbientHotter { .. } => "ambient_hotter",
            FusionOutcome::Overridden { .. } => "overridden",
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, FusionOutcome::Overridden { .. })
    }
}

/// Result of fusing the ambient reading with a hotspot detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusedThermal {
    /// Either the baseline reading or the override value, never lower than the baseline
    pub value: f64,
    pub outcome: FusionOutcome,
}

// ============================================================================
// FUSION
// ============================================================================

/// Recency-gated hotspot override
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalFusion {
    /// Detections older than this are ignored
    pub max_thermal_age_hours: f64,
    /// Value substituted for the ambient reading on override (Kelvin)
    pub override_thermal: f64,
    /// Confidence must be strictly above this
    pub min_confidence: f64,
}

impl Default for ThermalFusion {
    fn default() -> Self {
        Self {
            max_thermal_age_hours: DEFAULT_MAX_THERMAL_AGE_HOURS,
            override_thermal: DEFAULT_THERMAL_THRESHOLD,
            min_confidence: HOTSPOT_CONFIDENCE_MIN,
        }
    }
}

impl ThermalFusion {
    pub fn new(max_thermal_age_hours: f64, override_thermal: f64) -> Self {
        Self {
            max_thermal_age_hours,
            override_thermal,
            ..Default::default()
        }
    }

    /// Fuse against the current wall clock
    pub fn fuse(&self, baseline: f64, record: Option<&ThermalActivityRecord>) -> FusedThermal {
        self.fuse_at(baseline, record, Utc::now())
    }

    /// Fuse against an explicit `now`
    pub fn fuse_at(
        &self,
        baseline: f64,
        record: Option<&ThermalActivityRecord>,
        now: DateTime<Utc>,
    ) -> FusedThermal {
        let outcome = self.assess(baseline, record, now);
        let value = if outcome.is_override() {
            self.override_thermal
        } else {
            baseline
        };
        FusedThermal { value, outcome }
    }

    fn assess(
        &self,
        baseline: f64,
        record: Option<&ThermalActivityRecord>,
        now: DateTime<Utc>,
    ) -> FusionOutcome {
        let Some(record) = record else {
            return FusionOutcome::NoDetection;
        };

        let (min, max) = THERMAL_RANGE;
        if !baseline.is_finite() || baseline < min || baseline > max {
            log::warn!(
                "Ambient thermal {}K is not a usable reading, hotspot override skipped",
                baseline
            );
            return FusionOutcome::InvalidBaseline;
        }

        let age_hours = match record.age_hours(now) {
            Some(age) if age >= 0.0 => age,
            Some(age) => {
                log::warn!(
                    "Thermal detection unusable: acquisition {:.2}h in the future",
                    -age
                );
                return FusionOutcome::Unusable;
            }
            None => {
                log::warn!(
                    "Thermal detection unusable: acquisition timestamp {:?} could not be parsed",
                    record.acquisition
                );
                return FusionOutcome::Unusable;
            }
        };

        // Age gate comes first: an old detection is ignored whatever its confidence
        if age_hours > self.max_thermal_age_hours {
            log::info!(
                "Ignoring stale thermal detection: {:.1}h old (max {:.1}h), confidence {:.2}",
                age_hours,
                self.max_thermal_age_hours,
                record.confidence
            );
            return FusionOutcome::Stale { age_hours };
        }

        if record.confidence.is_nan() || record.confidence <= self.min_confidence {
            log::debug!(
                "Thermal detection below confidence gate: {:.2} <= {:.2}",
                record.confidence,
                self.min_confidence
            );
            return FusionOutcome::LowConfidence {
                confidence: record.confidence,
            };
        }

        // Override only raises the reading
        if baseline >= self.override_thermal {
            log::info!(
                "Hotspot confirmed (confidence {:.2}, {:.1}h ago), keeping hotter ambient {}K",
                record.confidence,
                age_hours,
                baseline
            );
            return FusionOutcome::AmbientHotter {
                confidence: record.confidence,
                age_hours,
            };
        }

        log::info!(
            "Thermal override: hotspot confidence {:.2}, detected {:.1}h ago -> {}K",
            record.confidence,
            age_hours,
            self.override_thermal
        );
        FusionOutcome::Overridden {
            confidence: record.confidence,
            age_hours,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
