//! Alert Hook
//!
//! Side-effecting act step, kept apart from decide so decision logic
//! stays testable without notifications.

use crate::logic::rules::WildfireDecision;

/// Receives every decision produced by a completed cycle
pub trait AlertSink: Send + Sync {
    fn notify(&self, decision: &WildfireDecision);
}

/// Writes alerts to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn notify(&self, decision: &WildfireDecision) {
        match &decision.alert_message {
            Some(message) => {
                log::warn!(
                    "WILDFIRE ALERT [{}] (confidence {:.2}): {}",
                    decision.risk_level,
                    decision.confidence,
                    message
                );
            }
            None => {
                log::info!("No alerts. Risk level: {}", decision.risk_level);
            }
        }
    }
}
