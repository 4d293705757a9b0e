//! Wildfire Reflex Agent - Core Library
//!
//! Assesses wildfire risk at a geographic point from environmental readings.
//! Pipeline per cycle: perceive -> validate -> decide -> act.
//!
//! ## Usage
//! ```ignore
//! use wildfire_agent::logic::agent::ReflexAgent;
//!
//! let agent = ReflexAgent::new(provider);
//! match agent.run(34.05, -118.24)? {
//!     Some(decision) => println!("{}", decision.risk_level),
//!     None => println!("percepts rejected, no decision"),
//! }
//! ```

pub mod constants;
pub mod logic;

pub use logic::agent::{AgentError, AlertSink, LogAlertSink, ReflexAgent};
pub use logic::config::AgentConfig;
pub use logic::percept::{EnvironmentalPercepts, LandUse, ThermalActivityRecord, WeatherReading};
pub use logic::provider::{EnvironmentalDataProvider, ProviderError};
pub use logic::rules::{RiskLevel, RuleEngine, WildfireDecision};
