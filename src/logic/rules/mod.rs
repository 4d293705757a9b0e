//! Rules Module
//!
//! Condition-action rule engine cho wildfire risk.
//! ĐÂY là nơi ra quyết định - guardrail đã chạy trước đó.
//!
//! ## Structure
//! - `types`: Core types (RiskLevel, WildfireDecision)
//! - `config`: Rule thresholds
//! - `rule`: Extensible rule trait + closure rules
//! - `defaults`: Built-in wildfire rules
//! - `engine`: Evaluation and aggregation
//!
//! ## Usage
//! ```ignore
//! use crate::logic::rules::{RuleEngine, RuleThresholds};
//!
//! let engine = RuleEngine::with_default_rules(&RuleThresholds::default());
//! engine.register("drought", |p| (p.humidity < 10.0).then(|| "HIGH risk: drought".into()));
//! let decision = engine.evaluate(&percepts);
//! ```

pub mod types;
pub mod config;
pub mod rule;
pub mod defaults;
pub mod engine;

pub use types::{RiskLevel, WildfireDecision};
pub use config::RuleThresholds;
pub use rule::{ConditionRule, FnRule, RuleError};
pub use defaults::default_rules;
pub use engine::{aggregate_confidence, RuleEngine};
