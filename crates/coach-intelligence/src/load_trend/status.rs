// ABOUTME: Form classification from TSB and overtraining risk flags from a single day
// ABOUTME: Flags acute load spikes, very high ATL and deep fatigue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use coach_core::constants::training_load::{
    ACUTE_SPIKE_RATIO, DETRAINING_TSB, OVERREACHING_TSB, VERY_HIGH_ATL,
};
use coach_core::models::TrendPoint;
use serde::{Deserialize, Serialize};

/// Form band of the latest trend point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Below `OVERREACHING_TSB`
    Overreaching,
    /// Negative, above `OVERREACHING_TSB`
    Productive,
    /// Zero up to `DETRAINING_TSB` inclusive
    Fresh,
    /// Above `DETRAINING_TSB`
    Detraining,
}

/// Individual warning raised by [`check_overtraining_risk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// ATL more than `ACUTE_SPIKE_RATIO` times CTL
    AcuteSpike,
    /// ATL above `VERY_HIGH_ATL`
    VeryHighAcuteLoad,
    /// TSB below `OVERREACHING_TSB`
    DeepFatigue,
}

impl RiskFactor {
    /// Coach-facing wording
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AcuteSpike => "Acute load is more than 30% above chronic load",
            Self::VeryHighAcuteLoad => "Acute load above 150 TSS/day",
            Self::DeepFatigue => "Form below -10",
        }
    }
}

/// Number of factors present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// None
    Low,
    /// One
    Moderate,
    /// Two or three
    High,
}

/// Risk flags for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertrainingRisk {
    /// Derived from the factor count
    pub risk_level: RiskLevel,
    /// Factors in check order
    pub risk_factors: Vec<RiskFactor>,
}

/// Classify TSB into a form band
#[must_use]
pub fn interpret_tsb(tsb: f64) -> TrainingStatus {
    match tsb {
        t if t < OVERREACHING_TSB => TrainingStatus::Overreaching,
        t if t < 0.0 => TrainingStatus::Productive,
        t if t <= DETRAINING_TSB => TrainingStatus::Fresh,
        _ => TrainingStatus::Detraining,
    }
}

/// Flag overtraining risk from one day's loads
///
/// The spike check is skipped when CTL is zero.
#[must_use]
pub fn check_overtraining_risk(point: &TrendPoint) -> OvertrainingRisk {
    let checks = [
        (
            point.ctl > 0.0 && point.atl > point.ctl * ACUTE_SPIKE_RATIO,
            RiskFactor::AcuteSpike,
        ),
        (point.atl > VERY_HIGH_ATL, RiskFactor::VeryHighAcuteLoad),
        (point.tsb < OVERREACHING_TSB, RiskFactor::DeepFatigue),
    ];
    let risk_factors: Vec<RiskFactor> = checks
        .into_iter()
        .filter_map(|(present, factor)| present.then_some(factor))
        .collect();

    let risk_level = match risk_factors.len() {
        0 => RiskLevel::Low,
        1 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    };

    OvertrainingRisk {
        risk_level,
        risk_factors,
    }
}
