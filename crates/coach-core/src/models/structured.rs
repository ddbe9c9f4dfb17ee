// ABOUTME: Canonical structured-workout step with ratio targets
// ABOUTME: Steady targets serialize as {value}, ramps as {range:{start,end}}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use serde::{Deserialize, Serialize};

/// Start/end pair of a ramp target, as ratios of threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    /// Ratio at the start of the step
    pub start: f64,
    /// Ratio at the end of the step
    pub end: f64,
}

/// Canonical intensity target, always a ratio relative to threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepTarget {
    /// Ramp from `range.start` to `range.end`
    Ramp {
        /// Ramp bounds
        range: TargetRange,
    },
    /// Steady target
    Steady {
        /// Target ratio
        value: f64,
    },
}

impl StepTarget {
    /// Highest ratio the target asks for
    #[must_use]
    pub fn peak(&self) -> f64 {
        match self {
            Self::Steady { value } => *value,
            Self::Ramp { range } => range.start.max(range.end),
        }
    }

    /// Mean ratio over the step
    #[must_use]
    pub fn mean(&self) -> f64 {
        match self {
            Self::Steady { value } => *value,
            Self::Ramp { range } => (range.start + range.end) / 2.0,
        }
    }
}

/// Inferred role of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StepType {
    /// Warm-up step
    Warmup,
    /// Work step
    #[default]
    Active,
    /// Recovery step between efforts
    Rest,
    /// Cool-down step
    Cooldown,
}

/// A normalized step of a planned workout
///
/// `duration_seconds` is canonical; `duration` mirrors it for older readers.
/// Repeat blocks carry `reps` and nested `steps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StructuredStep {
    /// Display name (from the provider's step text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Inferred step role
    #[serde(rename = "type")]
    pub step_type: StepType,
    /// Step duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Mirror of `duration_seconds`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Step distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Power target (ratio of FTP)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<StepTarget>,
    /// Heart-rate target (ratio of LTHR)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<StepTarget>,
    /// Pace target (ratio of threshold pace)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<StepTarget>,
    /// Cadence target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    /// Warm-up flag as declared by the provider
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub warmup: bool,
    /// Cool-down flag as declared by the provider
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cooldown: bool,
    /// Repetitions of a repeat block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Children of a repeat block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StructuredStep>>,
}

impl StructuredStep {
    /// Intensity used for rest inference: power, then heart rate, then pace
    #[must_use]
    pub fn intensity(&self) -> Option<f64> {
        self.power
            .or(self.heart_rate)
            .or(self.pace)
            .map(|target| target.peak())
    }

    /// Total seconds of this step including repeats
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        let own = self.duration_seconds.unwrap_or(0.0);
        let children: f64 = self
            .steps
            .as_ref()
            .map_or(0.0, |steps| steps.iter().map(Self::total_seconds).sum());
        let reps = f64::from(self.reps.unwrap_or(1));
        reps.mul_add(children, own)
    }
}
