//! Agent Module
//!
//! Reflex agent orchestrator: perceive -> validate -> decide -> act.
//!
//! ## Structure
//! - `reflex`: ReflexAgent, CyclePhase, AgentError
//! - `alert`: Act step hook (AlertSink)

pub mod alert;
pub mod reflex;

#[cfg(test)]
mod tests;

pub use alert::{AlertSink, LogAlertSink};
pub use reflex::{AgentError, CyclePhase, ReflexAgent};
