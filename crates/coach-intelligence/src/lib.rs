// ABOUTME: Training telemetry analytics over canonical records and stream bundles
// ABOUTME: Wellness scales, pacing, zones, training load trend and metric priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![deny(unsafe_code)]

//! # Coach Intelligence
//!
//! Pure, synchronous analytics. No function here reads a clock, touches
//! storage or holds shared state; callers pass `today` and zone profiles in
//! explicitly and may run distinct workouts in parallel.
//!
//! ## Modules
//!
//! - **config**: thresholds with environment overrides and validation
//! - **`wellness_scale`**: sleep score and readiness scale conversion
//! - **pacing**: lap splits, variability, strategy, surges, cadence
//! - **zones**: heart-rate and power zone distributions
//! - **`load_trend`**: stress resolution, daily trend, breakdowns, summary
//! - **`metric_priority`**: primary narrative metric selection

/// Analytics configuration
pub mod config;

/// Training load trend and analytics payload
pub mod load_trend;

/// Primary metric selection
pub mod metric_priority;

/// Pacing analysis over stream bundles
pub mod pacing;

/// Subjective wellness scale conversion
pub mod wellness_scale;

/// Zone bucketing and distributions
pub mod zones;

pub use config::{AnalyticsConfig, ConfigError};
pub use load_trend::{AnalyticsInput, AnalyticsPayload, LoadTrendAnalyzer};
pub use metric_priority::{MetricPreferences, MetricPriority};
pub use pacing::PacingAnalyzer;
