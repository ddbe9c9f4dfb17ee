// ABOUTME: Configuration module for the telemetry core
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

/// Environment-based configuration
pub mod environment;

pub use environment::{TelemetryConfig, ZoneCacheConfig};
