//! Reflex Agent Orchestrator
//!
//! Một chu kỳ: PERCEIVING -> VALIDATING -> DECIDING -> ACTING -> DONE.
//! Percepts không hợp lệ -> ABORTED, không có decision.
//! Agent không giữ state giữa các chu kỳ.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::logic::config::AgentConfig;
use crate::logic::fusion::ThermalFusion;
use crate::logic::guard::{ValidationGuard, ValidationReport};
use crate::logic::percept::EnvironmentalPercepts;
use crate::logic::provider::{EnvironmentalDataProvider, ProviderError};
use crate::logic::rules::{RuleEngine, WildfireDecision};
use super::alert::{AlertSink, LogAlertSink};

// ============================================================================
// ERRORS & PHASES
// ============================================================================

/// Cycle failure surfaced to the caller
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("data provider failure: {0}")]
    Provider(#[from] ProviderError),
    #[error("perceive step exceeded {millis}ms deadline")]
    Timeout { millis: u64 },
    #[error("perceive task failed: {0}")]
    Runtime(String),
}

/// Pipeline stage within one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Perceiving,
    Validating,
    Aborted,
    Deciding,
    Acting,
    Done,
}

impl CyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Perceiving => "PERCEIVING",
            CyclePhase::Validating => "VALIDATING",
            CyclePhase::Aborted => "ABORTED",
            CyclePhase::Deciding => "DECIDING",
            CyclePhase::Acting => "ACTING",
            CyclePhase::Done => "DONE",
        }
    }
}

fn enter(phase: CyclePhase, lat: f64, lon: f64) {
    log::debug!("[cycle ({}, {})] {}", lat, lon, phase.as_str());
}

// ============================================================================
// REFLEX AGENT
// ============================================================================

/// Stateless wildfire reflex agent.
///
/// Owns its rule engine; `run` may be called concurrently on one instance.
pub struct ReflexAgent {
    provider: Arc<dyn EnvironmentalDataProvider>,
    rule_engine: RuleEngine,
    guard: ValidationGuard,
    fusion: ThermalFusion,
    alert_sink: Box<dyn AlertSink>,
    config: AgentConfig,
}

impl ReflexAgent {
    /// Agent with default configuration and the default rule set
    pub fn new(provider: Arc<dyn EnvironmentalDataProvider>) -> Self {
        Self::with_config(provider, AgentConfig::default())
    }

    /// Agent configured from environment variables
    pub fn from_env(provider: Arc<dyn EnvironmentalDataProvider>) -> Self {
        Self::with_config(provider, AgentConfig::from_env())
    }

    pub fn with_config(provider: Arc<dyn EnvironmentalDataProvider>, config: AgentConfig) -> Self {
        let rule_engine = RuleEngine::with_default_rules(&config.rule_thresholds());
        log::info!(
            "ReflexAgent initialized with {} rules (thermal threshold {}K, max hotspot age {}h)",
            rule_engine.len(),
            config.thermal_threshold,
            config.max_thermal_age_hours
        );
        Self {
            provider,
            rule_engine,
            guard: ValidationGuard::new(),
            fusion: config.thermal_fusion(),
            alert_sink: Box::new(LogAlertSink),
            config,
        }
    }

    /// Replace the notification hook
    pub fn with_alert_sink(mut self, sink: Box<dyn AlertSink>) -> Self {
        self.alert_sink = sink;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    /// Register a custom rule; allowed before or after serving starts
    pub fn add_rule<F>(&self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&EnvironmentalPercepts) -> Option<String> + Send + Sync + 'static,
    {
        self.rule_engine.register(name, predicate);
    }

    // ------------------------------------------------------------------------
    // Pipeline stages
    // ------------------------------------------------------------------------

    /// Gather readings and apply thermal fusion
    pub fn perceive(&self, lat: f64, lon: f64) -> Result<EnvironmentalPercepts, ProviderError> {
        perceive_with(
            self.provider.as_ref(),
            &self.fusion,
            self.config.hotspot_search_radius_m,
            lat,
            lon,
        )
    }

    /// Guardrail gate
    pub fn validate(&self, percepts: &EnvironmentalPercepts) -> bool {
        self.validate_report(percepts).is_valid()
    }

    /// Guardrail gate with every violation listed
    pub fn validate_report(&self, percepts: &EnvironmentalPercepts) -> ValidationReport {
        self.guard.check(percepts)
    }

    /// Pure: delegates to the rule engine, no notification
    pub fn decide(&self, percepts: &EnvironmentalPercepts) -> WildfireDecision {
        log::info!("Evaluating percepts with rule engine");
        let decision = self.rule_engine.evaluate(percepts);
        log::info!(
            "Decision: {} risk, {} rules triggered",
            decision.risk_level,
            decision.triggered_rules.len()
        );
        decision
    }

    /// Notification hook
    pub fn act(&self, decision: &WildfireDecision) {
        self.alert_sink.notify(decision);
    }

    // ------------------------------------------------------------------------
    // Cycles
    // ------------------------------------------------------------------------

    /// One full cycle. `Ok(None)` means the percepts were rejected.
    pub fn run(&self, lat: f64, lon: f64) -> Result<Option<WildfireDecision>, AgentError> {
        log::info!("Running wildfire detection for location ({}, {})", lat, lon);

        enter(CyclePhase::Perceiving, lat, lon);
        let percepts = self.perceive(lat, lon).map_err(|e| {
            log::error!("Error perceiving environmental data: {}", e);
            AgentError::from(e)
        })?;

        Ok(self.complete_cycle(percepts))
    }

    /// One full cycle with a deadline on the perceive step.
    ///
    /// The provider runs on the blocking pool; on expiry the call is
    /// abandoned and `AgentError::Timeout` is returned.
    pub async fn run_with_timeout(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Option<WildfireDecision>, AgentError> {
        log::info!("Running wildfire detection for location ({}, {})", lat, lon);
        enter(CyclePhase::Perceiving, lat, lon);

        let provider = Arc::clone(&self.provider);
        let fusion = self.fusion;
        let radius_m = self.config.hotspot_search_radius_m;
        let task = tokio::task::spawn_blocking(move || {
            perceive_with(provider.as_ref(), &fusion, radius_m, lat, lon)
        });

        let percepts = match tokio::time::timeout(self.config.provider_timeout(), task).await {
            Err(_) => {
                log::error!(
                    "Perceive at ({}, {}) exceeded {}ms, abandoning cycle",
                    lat,
                    lon,
                    self.config.provider_timeout_ms
                );
                return Err(AgentError::Timeout {
                    millis: self.config.provider_timeout_ms,
                });
            }
            Ok(Err(join_err)) => return Err(AgentError::Runtime(join_err.to_string())),
            Ok(Ok(result)) => result.map_err(|e| {
                log::error!("Error perceiving environmental data: {}", e);
                AgentError::from(e)
            })?,
        };

        Ok(self.complete_cycle(percepts))
    }

    fn complete_cycle(&self, percepts: EnvironmentalPercepts) -> Option<WildfireDecision> {
        let (lat, lon) = (percepts.latitude, percepts.longitude);

        enter(CyclePhase::Validating, lat, lon);
        let report = self.validate_report(&percepts);
        if !report.is_valid() {
            enter(CyclePhase::Aborted, lat, lon);
            log::warn!(
                "Percepts at ({}, {}) rejected, no decision: {}",
                lat,
                lon,
                report.summary()
            );
            return None;
        }

        enter(CyclePhase::Deciding, lat, lon);
        let decision = self.decide(&percepts);

        enter(CyclePhase::Acting, lat, lon);
        self.act(&decision);

        enter(CyclePhase::Done, lat, lon);
        Some(decision)
    }
}

impl std::fmt::Debug for ReflexAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReflexAgent")
            .field("rule_engine", &self.rule_engine)
            .field("fusion", &self.fusion)
            .field("config", &self.config)
            .finish()
    }
}

/// Perceive step, free of `&self` so it can run on the blocking pool
fn perceive_with(
    provider: &dyn EnvironmentalDataProvider,
    fusion: &ThermalFusion,
    radius_m: u32,
    lat: f64,
    lon: f64,
) -> Result<EnvironmentalPercepts, ProviderError> {
    log::info!("Perceiving environmental data at ({}, {})", lat, lon);

    let baseline_thermal = provider.get_thermal_data(lat, lon)?;
    let landuse = provider.get_land_cover(lat, lon)?;
    let weather = provider.get_weather_data(lat, lon)?;
    let vegetation_density = provider.get_vegetation_density(lat, lon)?;
    let asset_proximity = provider.get_asset_proximity(lat, lon)?;

    // Not a percept field: a failed lookup only disables the override
    let hotspot = match provider.get_thermal_activity_nearby(lat, lon, radius_m) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Hotspot lookup failed, using ambient thermal only: {}", e);
            None
        }
    };

    let fused = fusion.fuse(baseline_thermal, hotspot.as_ref());

    let percepts = EnvironmentalPercepts {
        thermal: fused.value,
        humidity: weather.humidity,
        wind_speed: weather.wind_speed,
        landuse,
        vegetation_density,
        asset_proximity,
        timestamp: Utc::now(),
        latitude: lat,
        longitude: lon,
    };

    log::info!(
        "Percepts gathered: thermal={}K ({}), humidity={}%, landuse={}",
        percepts.thermal,
        fused.outcome.as_str(),
        percepts.humidity,
        percepts.landuse
    );
    Ok(percepts)
}
