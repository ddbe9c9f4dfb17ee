// ABOUTME: Sport type enumeration for workouts and planned sessions
// ABOUTME: Maps provider sport strings onto canonical types and sport families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use serde::{Deserialize, Serialize};

/// Enumeration of canonical sport types
///
/// Provider-specific types that don't map onto a standard category are kept
/// verbatim in the `Other` variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running activity
    Run,
    /// Trail running
    TrailRun,
    /// Treadmill running
    VirtualRun,
    /// Cycling activity
    Ride,
    /// Indoor/trainer cycling
    VirtualRide,
    /// Swimming activity
    Swim,
    /// Walking activity
    Walk,
    /// Hiking activity
    Hike,
    /// Rowing activity
    Rowing,
    /// Weight/strength training
    StrengthTraining,
    /// Generic workout
    #[default]
    Workout,
    /// Other activity type not covered by standard categories
    Other(String),
}

/// Coarse grouping used for metric preferences and pace applicability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportFamily {
    /// Running-like sports where pace is meaningful
    Running,
    /// Cycling sports where power is meaningful
    Cycling,
    /// Swimming
    Swimming,
    /// Everything else
    Other,
}

impl SportType {
    /// Create `SportType` from a provider sport string
    ///
    /// Accepts both `PascalCase` names (`VirtualRide`) and `snake_case`
    /// names (`trail_running`).
    #[must_use]
    pub fn from_provider_string(provider_sport: &str) -> Self {
        let key: String = provider_sport
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "run" | "running" | "track" | "trackrunning" => Self::Run,
            "trailrun" | "trailrunning" => Self::TrailRun,
            "virtualrun" | "treadmill" | "treadmillrunning" => Self::VirtualRun,
            "ride" | "cycling" | "bike" | "roadcycling" | "gravelride" | "mountainbikeride"
            | "ebikeride" => Self::Ride,
            "virtualride" | "indoorcycling" | "spin" => Self::VirtualRide,
            "swim" | "swimming" | "lapswimming" | "openwaterswimming" => Self::Swim,
            "walk" | "walking" => Self::Walk,
            "hike" | "hiking" => Self::Hike,
            "rowing" | "row" | "indoorrowing" => Self::Rowing,
            "weighttraining" | "strengthtraining" | "weights" => Self::StrengthTraining,
            "workout" | "training" | "other" | "generic" => Self::Workout,
            _ => Self::Other(provider_sport.to_owned()),
        }
    }

    /// Sport family for this type
    #[must_use]
    pub const fn family(&self) -> SportFamily {
        match self {
            Self::Run | Self::TrailRun | Self::VirtualRun | Self::Walk | Self::Hike => {
                SportFamily::Running
            }
            Self::Ride | Self::VirtualRide => SportFamily::Cycling,
            Self::Swim => SportFamily::Swimming,
            Self::Rowing | Self::StrengthTraining | Self::Workout | Self::Other(_) => {
                SportFamily::Other
            }
        }
    }

    /// Stable key used when grouping workouts by sport
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Run => "run",
            Self::TrailRun => "trail_run",
            Self::VirtualRun => "virtual_run",
            Self::Ride => "ride",
            Self::VirtualRide => "virtual_ride",
            Self::Swim => "swim",
            Self::Walk => "walk",
            Self::Hike => "hike",
            Self::Rowing => "rowing",
            Self::StrengthTraining => "strength_training",
            Self::Workout => "workout",
            Self::Other(name) => name,
        }
    }
}
