//! Rule Engine
//!
//! CHỈ chứa logic evaluate + aggregate - không có rule definitions.
//! Input: EnvironmentalPercepts (đã qua guardrail)
//! Output: WildfireDecision

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::constants::{ALERT_SEPARATOR, CONFIDENCE_PER_RULE};
use crate::logic::percept::EnvironmentalPercepts;
use super::config::RuleThresholds;
use super::defaults::default_rules;
use super::rule::{ConditionRule, FnRule, RuleError};
use super::types::{RiskLevel, WildfireDecision};

// ============================================================================
// RULE ENGINE
// ============================================================================

/// Ordered, named collection of condition-action rules.
///
/// Registration goes through `&self` so rules can be added while the owning
/// agent is already serving requests. Each engine owns its own registry.
#[derive(Default)]
pub struct RuleEngine {
    rules: RwLock<Vec<Arc<dyn ConditionRule>>>,
}

impl RuleEngine {
    /// Empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine pre-loaded with the default wildfire rules
    pub fn with_default_rules(thresholds: &RuleThresholds) -> Self {
        let engine = Self::new();
        for rule in default_rules(thresholds) {
            engine.register_rule(rule);
        }
        engine
    }

    /// Append a rule object
    pub fn register_rule(&self, rule: Arc<dyn ConditionRule>) {
        log::debug!("Registered rule '{}'", rule.name());
        self.rules.write().push(rule);
    }

    /// Append an infallible predicate
    pub fn register<F>(&self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&EnvironmentalPercepts) -> Option<String> + Send + Sync + 'static,
    {
        self.register_fallible(name, move |p| Ok(predicate(p)));
    }

    /// Append a predicate that may report a fault
    pub fn register_fallible<F>(&self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&EnvironmentalPercepts) -> Result<Option<String>, RuleError> + Send + Sync + 'static,
    {
        self.register_rule(Arc::new(FnRule::new(name, predicate)));
    }

    /// Rule names in registration order
    pub fn rule_names(&self) -> Vec<String> {
        self.rules.read().iter().map(|r| r.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// Evaluate every rule and aggregate into a decision.
    ///
    /// A rule that errors or panics is logged and skipped; the rest still run.
    pub fn evaluate(&self, percepts: &EnvironmentalPercepts) -> WildfireDecision {
        // Snapshot so a rule can register another rule without deadlocking
        let rules: Vec<Arc<dyn ConditionRule>> = self.rules.read().clone();

        let mut triggered_rules = Vec::new();
        let mut alerts = Vec::new();

        for rule in &rules {
            match catch_unwind(AssertUnwindSafe(|| rule.evaluate(percepts))) {
                Ok(Ok(Some(message))) if !message.is_empty() => {
                    triggered_rules.push(rule.name().to_string());
                    alerts.push(message);
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    log::error!("Error evaluating rule {}: {}", rule.name(), e);
                }
                Err(panic) => {
                    log::error!(
                        "Error evaluating rule {}: panicked: {}",
                        rule.name(),
                        panic_message(panic.as_ref())
                    );
                }
            }
        }

        if alerts.is_empty() {
            return WildfireDecision::quiet(Utc::now());
        }

        let alert_message = alerts.join(ALERT_SEPARATOR);

        WildfireDecision {
            risk_level: RiskLevel::from_alert_text(&alert_message),
            confidence: aggregate_confidence(triggered_rules.len()),
            alert_message: Some(alert_message),
            triggered_rules,
            timestamp: Utc::now(),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// min(0.3 x triggered, 1.0); saturates at four rules
pub fn aggregate_confidence(triggered: usize) -> f64 {
    (CONFIDENCE_PER_RULE * triggered as f64).min(1.0)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
