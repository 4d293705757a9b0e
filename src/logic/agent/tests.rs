//! Scenario Tests for the Reflex Agent
//!
//! Chạy toàn bộ pipeline với provider giả lập.

#[cfg(test)]
mod scenario_tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration as StdDuration;

    use chrono::{Duration, Utc};
    use parking_lot::Mutex;

    use crate::logic::agent::{AgentError, AlertSink, ReflexAgent};
    use crate::logic::config::AgentConfig;
    use crate::logic::percept::{EnvironmentalPercepts, LandUse, ThermalActivityRecord, WeatherReading};
    use crate::logic::provider::{EnvironmentalDataProvider, ProviderError};
    use crate::logic::rules::{RiskLevel, WildfireDecision};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Fixed readings, optional faults and latency
    #[derive(Clone)]
    struct StubProvider {
        thermal: f64,
        landuse: LandUse,
        weather: WeatherReading,
        vegetation: f64,
        assets: f64,
        hotspot: Option<ThermalActivityRecord>,
        fail_thermal: bool,
        fail_hotspot: bool,
        delay: Option<StdDuration>,
        last_radius: Arc<Mutex<Option<u32>>>,
    }

    impl StubProvider {
        fn new(thermal: f64, humidity: f64, wind: f64, landuse: LandUse, vegetation: f64, assets: f64) -> Self {
            Self {
                thermal,
                landuse,
                weather: WeatherReading { humidity, wind_speed: wind },
                vegetation,
                assets,
                hotspot: None,
                fail_thermal: false,
                fail_hotspot: false,
                delay: None,
                last_radius: Arc::new(Mutex::new(None)),
            }
        }

        /// thermal=340, humidity=10, wind=30, forest, vegetation=0.95, assets=1.0
        fn extreme() -> Self {
            Self::new(340.0, 10.0, 30.0, LandUse::Forest, 0.95, 1.0)
        }

        /// thermal=280, humidity=80, wind=5, urban, vegetation=0.1, assets=0.5
        fn calm_urban() -> Self {
            Self::new(280.0, 80.0, 5.0, LandUse::Urban, 0.1, 0.5)
        }

        fn with_hotspot(mut self, confidence: f64, hours_ago: i64) -> Self {
            self.hotspot = Some(ThermalActivityRecord::new(
                confidence,
                Utc::now() - Duration::hours(hours_ago),
            ));
            self
        }
    }

    impl EnvironmentalDataProvider for StubProvider {
        fn get_thermal_data(&self, _lat: f64, _lon: f64) -> Result<f64, ProviderError> {
            if let Some(delay) = self.delay {
                thread::sleep(delay);
            }
            if self.fail_thermal {
                return Err(ProviderError::unavailable("thermal", "MODIS feed down"));
            }
            Ok(self.thermal)
        }

        fn get_land_cover(&self, _lat: f64, _lon: f64) -> Result<LandUse, ProviderError> {
            Ok(self.landuse.clone())
        }

        fn get_weather_data(&self, _lat: f64, _lon: f64) -> Result<WeatherReading, ProviderError> {
            Ok(self.weather)
        }

        fn get_vegetation_density(&self, _lat: f64, _lon: f64) -> Result<f64, ProviderError> {
            Ok(self.vegetation)
        }

        fn get_asset_proximity(&self, _lat: f64, _lon: f64) -> Result<f64, ProviderError> {
            Ok(self.assets)
        }

        fn get_thermal_activity_nearby(
            &self,
            _lat: f64,
            _lon: f64,
            radius_m: u32,
        ) -> Result<Option<ThermalActivityRecord>, ProviderError> {
            *self.last_radius.lock() = Some(radius_m);
            if self.fail_hotspot {
                return Err(ProviderError::Timeout {
                    source_name: "firms".to_string(),
                });
            }
            Ok(self.hotspot.clone())
        }
    }

    /// Collects every decision passed to the act step
    #[derive(Clone, Default)]
    struct RecordingSink {
        received: Arc<Mutex<Vec<WildfireDecision>>>,
    }

    impl AlertSink for RecordingSink {
        fn notify(&self, decision: &WildfireDecision) {
            self.received.lock().push(decision.clone());
        }
    }

    fn agent_with(provider: StubProvider) -> (ReflexAgent, RecordingSink) {
        init_logger();
        let sink = RecordingSink::default();
        let agent = ReflexAgent::new(Arc::new(provider)).with_alert_sink(Box::new(sink.clone()));
        (agent, sink)
    }

    // ------------------------------------------------------------------------
    // Full cycles
    // ------------------------------------------------------------------------

    #[test]
    fn test_extreme_conditions_full_cycle() {
        let (agent, sink) = agent_with(StubProvider::extreme());

        let decision = agent.run(45.5, -122.6).unwrap().expect("decision");
        assert!(decision.risk_level >= RiskLevel::High);
        assert!(decision.triggered_rules.len() >= 2);
        assert!(decision.confidence >= 0.6);
        assert!(decision.alert_message.is_some());

        let received = sink.received.lock();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], decision);
    }

    #[test]
    fn test_calm_urban_full_cycle() {
        let (agent, sink) = agent_with(StubProvider::calm_urban());

        let percepts = agent.perceive(34.05, -118.24).unwrap();
        assert!(agent.validate(&percepts));

        let decision = agent.run(34.05, -118.24).unwrap().expect("decision");
        assert!(decision.triggered_rules.is_empty());
        assert_eq!(decision.risk_level, RiskLevel::Low);
        assert_eq!(decision.confidence, 0.0);
        assert!(decision.alert_message.is_none());

        // Quiet decisions still reach the act step
        assert_eq!(sink.received.lock().len(), 1);
    }

    #[test]
    fn test_invalid_percepts_abort_without_decision() {
        let mut provider = StubProvider::calm_urban();
        provider.weather.humidity = 150.0;
        let (agent, sink) = agent_with(provider);

        let outcome = agent.run(34.05, -118.24).unwrap();
        assert!(outcome.is_none());
        assert!(sink.received.lock().is_empty());
    }

    #[test]
    fn test_invalid_coordinates_abort() {
        let (agent, sink) = agent_with(StubProvider::extreme());
        assert!(agent.run(95.0, 0.0).unwrap().is_none());
        assert!(sink.received.lock().is_empty());
    }

    #[test]
    fn test_unknown_landuse_abort() {
        let mut provider = StubProvider::extreme();
        provider.landuse = LandUse::parse("space");
        let (agent, _sink) = agent_with(provider);

        let percepts = agent.perceive(10.0, 10.0).unwrap();
        assert!(!agent.validate(&percepts));
        let report = agent.validate_report(&percepts);
        assert!(!report.is_valid());
        assert!(report.has_violation_for("landuse"));
        assert!(agent.run(10.0, 10.0).unwrap().is_none());
    }

    #[test]
    fn test_provider_failure_is_surfaced() {
        let mut provider = StubProvider::extreme();
        provider.fail_thermal = true;
        let (agent, sink) = agent_with(provider);

        let err = agent.run(45.5, -122.6).unwrap_err();
        assert!(matches!(err, AgentError::Provider(ProviderError::Unavailable { .. })));
        assert!(sink.received.lock().is_empty());
    }

    #[test]
    fn test_hotspot_lookup_failure_is_not_fatal() {
        let mut provider = StubProvider::calm_urban();
        provider.fail_hotspot = true;
        let (agent, _sink) = agent_with(provider);

        let decision = agent.run(34.05, -118.24).unwrap().expect("decision");
        assert_eq!(decision.risk_level, RiskLevel::Low);
    }

    // ------------------------------------------------------------------------
    // Thermal fusion inside perceive
    // ------------------------------------------------------------------------

    #[test]
    fn test_fresh_hotspot_overrides_thermal() {
        let provider = StubProvider::new(290.0, 25.0, 5.0, LandUse::Forest, 0.8, 20.0).with_hotspot(0.8, 2);
        let (agent, _sink) = agent_with(provider);

        let percepts = agent.perceive(45.5, -122.6).unwrap();
        assert_eq!(percepts.thermal, 330.0);

        let decision = agent.decide(&percepts);
        assert_eq!(decision.triggered_rules, vec!["vegetation_thermal"]);
        assert_eq!(decision.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_stale_hotspot_is_ignored() {
        let provider = StubProvider::new(290.0, 25.0, 5.0, LandUse::Forest, 0.8, 20.0).with_hotspot(0.8, 10);
        let (agent, _sink) = agent_with(provider);

        let percepts = agent.perceive(45.5, -122.6).unwrap();
        assert_eq!(percepts.thermal, 290.0);

        let decision = agent.run(45.5, -122.6).unwrap().expect("decision");
        assert_eq!(decision.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_hotspot_never_lowers_hotter_ambient() {
        let provider = StubProvider::new(360.0, 10.0, 5.0, LandUse::Forest, 0.9, 20.0).with_hotspot(0.9, 1);
        let (agent, _sink) = agent_with(provider);

        let percepts = agent.perceive(45.5, -122.6).unwrap();
        assert_eq!(percepts.thermal, 360.0);

        let decision = agent.run(45.5, -122.6).unwrap().expect("decision");
        assert_eq!(decision.risk_level, RiskLevel::Critical);
        assert!(decision.triggered_rules.contains(&"high_temperature_forest".to_string()));
    }

    #[test]
    fn test_hotspot_does_not_mask_bad_thermal() {
        for bad in [f64::NAN, 1000.0] {
            let provider = StubProvider::new(bad, 25.0, 5.0, LandUse::Forest, 0.8, 20.0).with_hotspot(0.9, 1);
            let (agent, sink) = agent_with(provider);

            let percepts = agent.perceive(45.5, -122.6).unwrap();
            assert!(!agent.validate(&percepts), "thermal {} should be rejected", bad);
            assert!(agent.validate_report(&percepts).has_violation_for("thermal"));

            assert!(agent.run(45.5, -122.6).unwrap().is_none(), "thermal {}", bad);
            assert!(sink.received.lock().is_empty());
        }
    }

    #[test]
    fn test_configured_override_and_radius() {
        init_logger();
        let provider = StubProvider::new(290.0, 25.0, 5.0, LandUse::Forest, 0.1, 20.0).with_hotspot(0.9, 1);
        let radius = Arc::clone(&provider.last_radius);
        let config = AgentConfig {
            thermal_threshold: 335.0,
            hotspot_search_radius_m: 2_500,
            ..Default::default()
        };
        let agent = ReflexAgent::with_config(Arc::new(provider), config);
        assert_eq!(agent.config().hotspot_search_radius_m, 2_500);
        assert_eq!(agent.config().provider_timeout_ms, 10_000);

        let percepts = agent.perceive(45.5, -122.6).unwrap();
        assert_eq!(percepts.thermal, 335.0);
        assert_eq!(*radius.lock(), Some(2_500));
    }

    // ------------------------------------------------------------------------
    // Decide / extension point
    // ------------------------------------------------------------------------

    #[test]
    fn test_decide_is_pure() {
        let (agent, sink) = agent_with(StubProvider::extreme());
        let percepts = agent.perceive(45.5, -122.6).unwrap();

        let a = agent.decide(&percepts);
        let b = agent.decide(&percepts);
        assert_eq!(a.risk_level, b.risk_level);
        assert_eq!(a.triggered_rules, b.triggered_rules);
        assert_eq!(a.alert_message, b.alert_message);
        assert_eq!(a.confidence, b.confidence);
        assert!(sink.received.lock().is_empty());
    }

    #[test]
    fn test_add_rule_after_serving() {
        let (agent, _sink) = agent_with(StubProvider::calm_urban());
        let before = agent.run(34.05, -118.24).unwrap().expect("decision");
        assert!(before.triggered_rules.is_empty());

        agent.add_rule("urban_interface", |p: &EnvironmentalPercepts| {
            (p.landuse == LandUse::Urban && p.asset_proximity < 1.0)
                .then(|| "MEDIUM wildfire risk: urban interface".to_string())
        });
        assert_eq!(agent.rule_engine().len(), 5);

        let after = agent.run(34.05, -118.24).unwrap().expect("decision");
        assert_eq!(after.triggered_rules, vec!["urban_interface"]);
        assert_eq!(after.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_independent_agents_do_not_share_rules() {
        let (first, _) = agent_with(StubProvider::calm_urban());
        let (second, _) = agent_with(StubProvider::calm_urban());

        first.add_rule("only_first", |_| Some("HIGH".to_string()));
        assert_eq!(first.rule_engine().len(), 5);
        assert_eq!(second.rule_engine().len(), 4);
    }

    #[test]
    fn test_concurrent_runs_on_one_agent() {
        let (agent, sink) = agent_with(StubProvider::extreme());

        thread::scope(|s| {
            for i in 0..8 {
                let agent = &agent;
                s.spawn(move || {
                    let decision = agent.run(40.0 + i as f64, -120.0).unwrap().expect("decision");
                    assert_eq!(decision.risk_level, RiskLevel::Critical);
                });
            }
        });

        assert_eq!(sink.received.lock().len(), 8);
    }

    // ------------------------------------------------------------------------
    // Deadline
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_run_with_timeout_completes() {
        let (agent, _sink) = agent_with(StubProvider::extreme());
        let decision = agent.run_with_timeout(45.5, -122.6).await.unwrap().expect("decision");
        assert_eq!(decision.risk_level, RiskLevel::Critical);
    }

    #[tokio::test]
    async fn test_run_with_timeout_expires() {
        init_logger();
        let mut provider = StubProvider::extreme();
        provider.delay = Some(StdDuration::from_millis(500));
        let sink = RecordingSink::default();
        let config = AgentConfig {
            provider_timeout_ms: 50,
            ..Default::default()
        };
        let agent = ReflexAgent::with_config(Arc::new(provider), config)
            .with_alert_sink(Box::new(sink.clone()));

        let err = agent.run_with_timeout(45.5, -122.6).await.unwrap_err();
        assert!(matches!(err, AgentError::Timeout { millis: 50 }));
        assert!(sink.received.lock().is_empty());
    }

    #[tokio::test]
    async fn test_run_with_timeout_surfaces_provider_error() {
        let mut provider = StubProvider::extreme();
        provider.fail_thermal = true;
        let (agent, _sink) = agent_with(provider);

        let err = agent.run_with_timeout(45.5, -122.6).await.unwrap_err();
        assert!(matches!(err, AgentError::Provider(_)));
    }
}
