//! Decision Types
//!
//! Core types cho rule engine output.
//! KHÔNG chứa logic evaluate - chỉ data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Ordinal wildfire risk, LOW < MEDIUM < HIGH < CRITICAL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Keyword scan over free-text rule messages.
    ///
    /// Priority is CRITICAL, then HIGH, then MEDIUM across the whole text,
    /// case-insensitive substring match. No keyword means LOW.
    pub fn from_alert_text(text: &str) -> Self {
        let upper = text.to_uppercase();
        if upper.contains("CRITICAL") {
            RiskLevel::Critical
        } else if upper.contains("HIGH") {
            RiskLevel::High
        } else if upper.contains("MEDIUM") {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// MEDIUM and above
    pub fn is_actionable(&self) -> bool {
        *self >= RiskLevel::Medium
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DECISION
// ============================================================================

/// Rule engine output for one set of percepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireDecision {
    pub risk_level: RiskLevel,
    /// Triggered rule messages joined with "; "
    pub alert_message: Option<String>,
    /// Heuristic score (0-1), not a calibrated probability
    pub confidence: f64,
    /// Names of rules that fired, in registration order
    pub triggered_rules: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl WildfireDecision {
    /// Decision with no triggered rules
    pub fn quiet(timestamp: DateTime<Utc>) -> Self {
        Self {
            risk_level: RiskLevel::Low,
            alert_message: None,
            confidence: 0.0,
            triggered_rules: Vec::new(),
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert!(!RiskLevel::Low.is_actionable());
        assert!(RiskLevel::Medium.is_actionable());
    }

    #[test]
    fn test_keyword_priority() {
        assert_eq!(RiskLevel::from_alert_text("HIGH risk; CRITICAL risk"), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_alert_text("medium then high"), RiskLevel::High);
        assert_eq!(RiskLevel::from_alert_text("Medium exposure"), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_alert_text("Test alert"), RiskLevel::Low);
        assert_eq!(RiskLevel::from_alert_text(""), RiskLevel::Low);
    }

    #[test]
    fn test_decision_json_contract() {
        let decision = WildfireDecision {
            risk_level: RiskLevel::High,
            alert_message: Some("HIGH wildfire risk".to_string()),
            confidence: 0.3,
            triggered_rules: vec!["extreme_weather".to_string()],
            timestamp: Utc::now(),
        };
        let value: serde_json::Value = serde_json::from_str(&decision.to_json().unwrap()).unwrap();

        assert_eq!(value["risk_level"], "HIGH");
        assert_eq!(value["alert_message"], "HIGH wildfire risk");
        assert_eq!(value["triggered_rules"][0], "extreme_weather");
        assert!(value["timestamp"].is_string());

        let quiet = WildfireDecision::quiet(Utc::now());
        let value: serde_json::Value = serde_json::from_str(&quiet.to_json().unwrap()).unwrap();
        assert!(value["alert_message"].is_null());
        assert_eq!(value["risk_level"], "LOW");
    }
}
