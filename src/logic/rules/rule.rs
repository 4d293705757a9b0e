//! Condition-Action Rules (Extensible)
//!
//! Cho phép thêm rules custom mà không sửa core logic.
//! A rule is a named, stateless predicate over percepts.

use thiserror::Error;

use crate::logic::percept::EnvironmentalPercepts;

/// Fault raised inside a single rule predicate
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("rule evaluation failed: {reason}")]
    Evaluation { reason: String },
}

impl RuleError {
    pub fn evaluation(reason: impl Into<String>) -> Self {
        RuleError::Evaluation {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// Named predicate returning a risk-bearing message when it fires
pub trait ConditionRule: Send + Sync {
    fn name(&self) -> &str;

    /// `Ok(None)` = did not fire
    fn evaluate(&self, percepts: &EnvironmentalPercepts) -> Result<Option<String>, RuleError>;
}

// ============================================================================
// CLOSURE RULE
// ============================================================================

/// Rule backed by a closure; thresholds are captured at registration time
pub struct FnRule<F> {
    name: String,
    predicate: F,
}

impl<F> FnRule<F>
where
    F: Fn(&EnvironmentalPercepts) -> Result<Option<String>, RuleError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> ConditionRule for FnRule<F>
where
    F: Fn(&EnvironmentalPercepts) -> Result<Option<String>, RuleError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, percepts: &EnvironmentalPercepts) -> Result<Option<String>, RuleError> {
        (self.predicate)(percepts)
    }
}

impl<F> std::fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}
