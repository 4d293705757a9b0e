//! Guardrail Types
//!
//! Violation records produced by the validation gate.

use serde::Serialize;

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failed guardrail check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Violation {
    /// Reading absent (non-finite or empty)
    Missing { field: &'static str },
    /// Reading outside its physically valid range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Land use outside the closed set
    UnknownLandUse { value: String },
}

impl Violation {
    pub fn field(&self) -> &'static str {
        match self {
            Violation::Missing { field } => *field,
            Violation::OutOfRange { field, .. } => *field,
            Violation::UnknownLandUse { .. } => "landuse",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Missing { field } => write!(f, "{} is missing", field),
            Violation::OutOfRange { field, value, min, max } => {
                if max.is_infinite() {
                    write!(f, "{} = {} is below {}", field, value, min)
                } else {
                    write!(f, "{} = {} outside [{}, {}]", field, value, min, max)
                }
            }
            Violation::UnknownLandUse { value } => {
                write!(f, "landuse '{}' not in {{urban, forest, grassland}}", value)
            }
        }
    }
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// Outcome of running every guardrail check
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_violation_for(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
