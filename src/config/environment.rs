// ABOUTME: Environment-based configuration aggregating analytics, cache and logging settings
// ABOUTME: Every value has a default; environment variables override individual values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::logging::LoggingConfig;
use chrono::Duration;
use coach_core::constants::cache::{ZONE_PROFILE_MAX_ENTRIES, ZONE_PROFILE_TTL_SECS};
use coach_core::errors::{AppError, AppResult};
use coach_intelligence::config::AnalyticsConfig;
use coach_intelligence::metric_priority::MetricPreferences;
use std::env;
use tracing::info;

/// Zone profile cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCacheConfig {
    /// Freshness window in seconds
    pub ttl_secs: i64,
    /// Maximum cached profiles
    pub max_entries: usize,
}

impl Default for ZoneCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: ZONE_PROFILE_TTL_SECS,
            max_entries: ZONE_PROFILE_MAX_ENTRIES,
        }
    }
}

impl ZoneCacheConfig {
    /// Load cache settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("ZONE_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(ZONE_PROFILE_TTL_SECS),
            max_entries: env::var("ZONE_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(ZONE_PROFILE_MAX_ENTRIES),
        }
    }

    /// Freshness window
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_secs)
    }
}

/// Complete telemetry core configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetryConfig {
    /// Analyzer thresholds
    pub analytics: AnalyticsConfig,
    /// Zone profile cache
    pub zone_cache: ZoneCacheConfig,
    /// Primary metric preferences
    pub metric_preferences: MetricPreferences,
    /// Logging
    pub logging: LoggingConfig,
}

fn preference_from_env(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(default)
}

impl TelemetryConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any loaded value fails validation
    pub fn from_env() -> AppResult<Self> {
        let defaults = MetricPreferences::default();
        let config = Self {
            analytics: AnalyticsConfig::from_env(),
            zone_cache: ZoneCacheConfig::from_env(),
            metric_preferences: MetricPreferences {
                running: preference_from_env("METRIC_PREFERENCE_RUNNING", defaults.running),
                cycling: preference_from_env("METRIC_PREFERENCE_CYCLING", defaults.cycling),
                other: preference_from_env("METRIC_PREFERENCE_OTHER", defaults.other),
                overrides: defaults.overrides,
            },
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;
        info!(
            lap_distance_m = config.analytics.pacing.lap_distance_m,
            zone_cache_ttl_secs = config.zone_cache.ttl_secs,
            "Telemetry configuration loaded"
        );
        Ok(config)
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        self.analytics.validate()?;
        if self.zone_cache.ttl_secs <= 0 {
            return Err(AppError::config("ZONE_CACHE_TTL_SECS must be positive"));
        }
        if self.zone_cache.max_entries == 0 {
            return Err(AppError::config("ZONE_CACHE_MAX_ENTRIES must be positive"));
        }
        Ok(())
    }
}
