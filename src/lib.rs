// ABOUTME: Main library entry point for the coach telemetry core
// ABOUTME: Wires normalization and analytics crates to caching, config, logging and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![deny(unsafe_code)]

//! # Coach Telemetry
//!
//! Data-normalization and analytics core of an AI endurance coach. Raw
//! provider payloads become canonical workouts, planned sessions and
//! wellness days; per-workout streams become pacing and zone artifacts;
//! date ranges of records become a fitness/fatigue/form trend with a
//! training summary.
//!
//! ## Architecture
//!
//! - **`coach_core`**: canonical models, errors and constants
//! - **`coach_intelligence`**: pure analyzers (pacing, zones, load trend,
//!   metric priority, wellness scales) and their thresholds
//! - **`coach_providers`**: payload normalization and structured steps
//! - **services**: async glue over storage and profile collaborators
//! - **cache**: zone profile cache owned by the caller
//! - **config** and **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coach_telemetry::config::TelemetryConfig;
//! use coach_telemetry::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = TelemetryConfig::from_env()?;
//!     config.logging.init()?;
//!     println!("Lap distance: {} m", config.analytics.pacing.lap_distance_m);
//!     Ok(())
//! }
//! ```

/// Zone profile cache
pub mod cache;

/// Environment configuration
pub mod config;

/// Structured logging setup and domain log helpers
pub mod logging;

/// Service layer over external collaborators
pub mod services;

pub use coach_core::{constants, errors, models};
pub use coach_intelligence as intelligence;
pub use coach_providers as providers;
