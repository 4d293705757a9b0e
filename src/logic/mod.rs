//! Logic Module - Decision Engines
//!
//! Chứa các engines: Guard, Fusion, Rule Engine, Reflex Agent.
//!
//! ## Structure
//! - `percept/` - Percept data types (readings, hotspot records)
//! - `provider` - External data provider capability
//! - `guard/` - Validation guardrail (range/presence checks)
//! - `fusion/` - Temporal thermal fusion (hotspot override)
//! - `rules/` - Condition-action rule engine
//! - `agent/` - Reflex agent orchestrator

pub mod config;
pub mod percept;
pub mod provider;
pub mod guard;
pub mod fusion;
pub mod rules;
pub mod agent;
