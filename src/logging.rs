// ABOUTME: Tracing subscriber setup and structured telemetry events
// ABOUTME: Host processes install the subscriber once; services emit events through TelemetryLogger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Structured logging
//!
//! The workspace crates only emit `tracing` events. A host process calls
//! [`LoggingConfig::init`] once; library users that already own a
//! subscriber never need to.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RUST_LOG` | base filter, default `info` |
//! | `LOG_FORMAT` | `json`, `pretty` or `compact` |
//! | `LOG_INCLUDE_LOCATION` | add file and line |
//! | `LOG_INCLUDE_THREAD` | add thread id and name |
//! | `LOG_INCLUDE_SPANS` | emit span open/close events |
//! | `ENVIRONMENT` | `production` turns on all three includes |
//! | `SERVICE_NAME` | `service.name` on the startup event |

use coach_core::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing::{debug, info, warn, Level, Subscriber};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::layer as fmt_layer;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{registry, EnvFilter};
use uuid::Uuid;

/// Service name reported when `SERVICE_NAME` is unset
pub const DEFAULT_SERVICE_NAME: &str = "coach-telemetry";

/// Crates whose level follows the configured level even under a broader `RUST_LOG`
const WORKSPACE_TARGETS: [&str; 4] = [
    "coach_telemetry",
    "coach_core",
    "coach_intelligence",
    "coach_providers",
];

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human output
    Pretty,
    /// Single line, no target
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unknown is `Pretty`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Subscriber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level directive for the workspace crates
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Add file and line to events
    pub include_location: bool,
    /// Add thread id and name to events
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Reported on the startup event
    pub service_name: String,
    /// Deployment environment name
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read settings from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";
        let flag = |name: &str| production || env::var(name).is_ok();

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: flag("LOG_INCLUDE_LOCATION"),
            include_thread: flag("LOG_INCLUDE_THREAD"),
            include_spans: flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment,
        }
    }

    fn filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        WORKSPACE_TARGETS
            .iter()
            .fold(EnvFilter::new(base), |filter, target| {
                let directive = format!("{target}={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into());
                filter.add_directive(directive)
            })
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn output_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    {
        let base = fmt_layer()
            .with_writer(io::stdout)
            .with_span_events(self.span_events())
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread);

        match self.format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.boxed(),
            LogFormat::Compact => base.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber and emit a startup event
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        registry()
            .with(self.filter())
            .with(self.output_layer())
            .try_init()
            .map_err(|e| AppError::config(format!("logging already initialized: {e}")))?;

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Telemetry logging initialized"
        );
        Ok(())
    }
}

/// Structured events emitted by the service layer
pub struct TelemetryLogger;

impl TelemetryLogger {
    /// One payload normalized or rejected
    pub fn log_normalization(kind: &str, source: &str, user_id: Uuid, success: bool) {
        if success {
            debug!(
                record.kind = %kind,
                record.source = %source,
                user.id = %user_id,
                "Payload normalized"
            );
        } else {
            warn!(
                record.kind = %kind,
                record.source = %source,
                user.id = %user_id,
                "Payload rejected"
            );
        }
    }

    /// Batch finished
    pub fn log_batch_summary(operation: &str, total: usize, failed: usize, duration_ms: u64) {
        info!(
            batch.operation = %operation,
            batch.total = total,
            batch.failed = failed,
            batch.duration_ms = duration_ms,
            "Batch completed"
        );
    }

    /// Analytics payload built for a range
    pub fn log_analytics(user_id: Uuid, workouts: usize, trend_points: usize, duration_ms: u64) {
        info!(
            user.id = %user_id,
            analytics.workouts = workouts,
            analytics.trend_points = trend_points,
            analytics.duration_ms = duration_ms,
            "Analytics payload built"
        );
    }

    /// Zone profile cache consulted
    pub fn log_cache_lookup(user_id: Uuid, metric: &str, hit: bool) {
        debug!(
            user.id = %user_id,
            cache.metric = %metric,
            cache.hit = hit,
            "Zone profile cache lookup"
        );
    }
}
