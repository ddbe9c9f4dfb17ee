// ABOUTME: Normalizes structured-workout step lists into canonical ratio targets
// ABOUTME: Percentage targets are resolved once here; downstream only sees ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Structured Workout Normalizer
//!
//! Provider step targets come as `{value, units: "%ftp"}`,
//! `{start, end, units: "%lthr"}`, or already canonical `{value}` /
//! `{range: {start, end}}`. Each target is classified once as a
//! [`RawTarget`] and resolved to a ratio [`StepTarget`]. Normalizing an
//! already normalized step list returns it unchanged.

use crate::aliases::lookup;
use crate::conversions::{value_as_bool, value_as_f64, value_as_string};
use coach_core::constants::structured::PERCENT_DIVISOR;
use coach_core::models::{StepTarget, StepType, StructuredStep, TargetRange};
use coach_intelligence::config::StructuredWorkoutConfig;
use serde_json::Value;
use tracing::warn;

/// Numeric shape of a target before scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetShape {
    /// Single value
    Steady(f64),
    /// Start and end values
    Ramp(f64, f64),
}

impl TargetShape {
    fn parse(target: &Value) -> Option<Self> {
        if let Some(n) = value_as_f64(target) {
            return Some(Self::Steady(n));
        }
        let range = lookup(target, "range");
        let start = range
            .and_then(|r| lookup(r, "start"))
            .or_else(|| lookup(target, "start"))
            .and_then(value_as_f64);
        let end = range
            .and_then(|r| lookup(r, "end"))
            .or_else(|| lookup(target, "end"))
            .and_then(value_as_f64);
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::Ramp(start, end)),
            _ => lookup(target, "value")
                .and_then(value_as_f64)
                .or(start)
                .or(end)
                .map(Self::Steady),
        }
    }

    fn scaled(self, divisor: f64) -> StepTarget {
        match self {
            Self::Steady(value) => StepTarget::Steady {
                value: value / divisor,
            },
            Self::Ramp(start, end) => StepTarget::Ramp {
                range: TargetRange {
                    start: start / divisor,
                    end: end / divisor,
                },
            },
        }
    }
}

/// A provider target classified by unit convention
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawTarget {
    /// Units contain `%`: values are percentages of threshold
    Percentage(TargetShape),
    /// Already a ratio of threshold
    Ratio(TargetShape),
}

impl RawTarget {
    /// Classify a provider target
    #[must_use]
    pub fn parse(target: &Value) -> Option<Self> {
        let shape = TargetShape::parse(target)?;
        let is_percentage = lookup(target, "units")
            .and_then(Value::as_str)
            .is_some_and(|units| units.contains('%'));
        Some(if is_percentage {
            Self::Percentage(shape)
        } else {
            Self::Ratio(shape)
        })
    }

    /// Resolve to the canonical ratio target
    #[must_use]
    pub fn into_ratio(self) -> StepTarget {
        match self {
            Self::Percentage(shape) => shape.scaled(PERCENT_DIVISOR),
            Self::Ratio(shape) => shape.scaled(1.0),
        }
    }
}

fn target(step: &Value, keys: &[&str]) -> Option<StepTarget> {
    keys.iter()
        .find_map(|key| lookup(step, key))
        .and_then(RawTarget::parse)
        .map(RawTarget::into_ratio)
}

fn cadence(step: &Value) -> Option<f64> {
    let raw = lookup(step, "cadence")?;
    value_as_f64(raw).or_else(|| lookup(raw, "value").and_then(value_as_f64))
}

fn flag(step: &Value, key: &str) -> bool {
    lookup(step, key).and_then(value_as_bool).unwrap_or(false)
}

fn infer_type(step: &StructuredStep, config: &StructuredWorkoutConfig) -> StepType {
    if step.warmup {
        StepType::Warmup
    } else if step.cooldown {
        StepType::Cooldown
    } else if step
        .intensity()
        .is_some_and(|intensity| intensity < config.rest_ratio_threshold)
    {
        StepType::Rest
    } else {
        StepType::Active
    }
}

/// Normalize one step, recursing into repeat blocks
#[must_use]
pub fn normalize_step(step: &Value, config: &StructuredWorkoutConfig) -> StructuredStep {
    let duration = lookup(step, "durationSeconds")
        .and_then(value_as_f64)
        .or_else(|| lookup(step, "duration").and_then(value_as_f64));
    let name = lookup(step, "text")
        .and_then(value_as_string)
        .or_else(|| lookup(step, "name").and_then(value_as_string));
    let reps = lookup(step, "reps")
        .and_then(value_as_f64)
        .and_then(|reps| u32::try_from(reps.round() as i64).ok());
    let steps = lookup(step, "steps").map(|children| normalize_steps(children, config));

    let mut normalized = StructuredStep {
        name,
        step_type: StepType::Active,
        duration_seconds: duration,
        duration,
        distance: lookup(step, "distance").and_then(value_as_f64),
        power: target(step, &["power"]),
        heart_rate: target(step, &["heartRate", "hr"]),
        pace: target(step, &["pace"]),
        cadence: cadence(step),
        warmup: flag(step, "warmup"),
        cooldown: flag(step, "cooldown"),
        reps,
        steps,
    };
    normalized.step_type = infer_type(&normalized, config);
    normalized
}

/// Normalize a step list; entries that are not objects are skipped
#[must_use]
pub fn normalize_steps(steps: &Value, config: &StructuredWorkoutConfig) -> Vec<StructuredStep> {
    let Some(items) = steps.as_array() else {
        warn!("Structured workout steps are not a list, ignoring");
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| {
            let keep = item.is_object();
            if !keep {
                warn!("Skipping non-object structured workout step");
            }
            keep
        })
        .map(|item| normalize_step(item, config))
        .collect()
}
