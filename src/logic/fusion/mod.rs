//! Fusion Module
//!
//! Blends the ambient thermal reading with nearby hotspot detections.
//! Recency-weighted override, not an average.

pub mod thermal;

pub use thermal::{FusedThermal, FusionOutcome, ThermalFusion};
