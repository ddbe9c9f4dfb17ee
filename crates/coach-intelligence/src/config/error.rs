// ABOUTME: Configuration error types for analytics configuration validation
// ABOUTME: Defines error variants for invalid ranges, and unordered bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Configuration error types for analytics configuration validation.

use coach_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a non-positive lap distance)
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Bucket or threshold boundaries are not strictly ascending
    #[error("Unordered thresholds: {0}")]
    UnorderedThresholds(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
