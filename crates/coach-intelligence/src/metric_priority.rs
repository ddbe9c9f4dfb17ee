// ABOUTME: Chooses the primary narrative metric among pace, heart rate and power
// ABOUTME: Parses per-sport preference tokens and checks metric availability per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Metric Priority Resolver
//!
//! A preference token such as `PACE>HR>POWER` orders the metrics for one
//! sport. Unknown words are ignored and any metric the token leaves out is
//! appended in the default order `HR, POWER, PACE`, so the resolved list
//! always holds all three.

use coach_core::models::{SportFamily, SportType, StreamBundle, Workout};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A metric the narrative can lead with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    /// Heart rate
    #[serde(rename = "HR")]
    HeartRate,
    /// Power
    Power,
    /// Pace
    Pace,
}

/// Order used to complete a partial preference
pub const DEFAULT_METRIC_ORDER: [Metric; 3] = [Metric::HeartRate, Metric::Power, Metric::Pace];

impl Metric {
    fn from_word(word: &str) -> Option<Self> {
        let normalized: String = word
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "PACE" | "SPEED" => Some(Self::Pace),
            "HR" | "HEARTRATE" => Some(Self::HeartRate),
            "POWER" | "WATTS" => Some(Self::Power),
            _ => None,
        }
    }
}

/// Drop duplicates and append missing metrics in default order
fn complete_order(metrics: impl IntoIterator<Item = Metric>) -> Vec<Metric> {
    let mut order: Vec<Metric> = Vec::with_capacity(DEFAULT_METRIC_ORDER.len());
    for metric in metrics.into_iter().chain(DEFAULT_METRIC_ORDER) {
        if !order.contains(&metric) {
            order.push(metric);
        }
    }
    order
}

/// Parse a preference token into a complete, duplicate-free metric order
#[must_use]
pub fn parse_preference(token: &str) -> Vec<Metric> {
    let words = token.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'));
    complete_order(words.filter_map(Metric::from_word))
}

/// Preference tokens per sport family with per-sport overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPreferences {
    /// Token for running-family sports
    pub running: String,
    /// Token for cycling-family sports
    pub cycling: String,
    /// Token for everything else
    pub other: String,
    /// Overrides keyed by sport key (e.g. `trail_run`)
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl Default for MetricPreferences {
    fn default() -> Self {
        Self {
            running: "PACE>HR>POWER".to_owned(),
            cycling: "POWER>HR>PACE".to_owned(),
            other: "HR>POWER>PACE".to_owned(),
            overrides: BTreeMap::new(),
        }
    }
}

impl MetricPreferences {
    /// Token that applies to a sport
    #[must_use]
    pub fn token_for(&self, sport: &SportType) -> &str {
        if let Some(token) = self.overrides.get(sport.key()) {
            return token;
        }
        match sport.family() {
            SportFamily::Running => &self.running,
            SportFamily::Cycling => &self.cycling,
            SportFamily::Swimming | SportFamily::Other => &self.other,
        }
    }

    /// Resolved metric order for a sport
    #[must_use]
    pub fn order_for(&self, sport: &SportType) -> Vec<Metric> {
        parse_preference(self.token_for(sport))
    }
}

/// Which metrics a workout actually carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAvailability {
    /// Lap splits, average speed or pace stability present
    pub pace: bool,
    /// Average or max heart rate present
    pub heart_rate: bool,
    /// Any power summary present
    pub power: bool,
}

impl MetricAvailability {
    /// Derive availability from the canonical record and optional streams
    #[must_use]
    pub fn from_workout(workout: &Workout, streams: Option<&StreamBundle>) -> Self {
        let pace_from_streams = streams.is_some_and(StreamBundle::has_pace_artifacts);
        Self {
            pace: pace_from_streams || workout.has_speed(),
            heart_rate: workout.has_heart_rate(),
            power: workout.has_power(),
        }
    }

    /// Whether `metric` is present
    #[must_use]
    pub const fn has(&self, metric: Metric) -> bool {
        match metric {
            Metric::Pace => self.pace,
            Metric::HeartRate => self.heart_rate,
            Metric::Power => self.power,
        }
    }
}

/// A ranked metric and whether the workout has it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricChoice {
    /// Metric
    pub metric: Metric,
    /// Whether data exists
    pub available: bool,
}

/// Instruction for the narrative collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum NarrativeRule {
    /// Pace leads and is present: keep heart-rate discussion brief
    CondenseHeartRate,
    /// Preferred metric missing: say which one is used instead
    DiscloseFallback {
        /// Metric the narrative falls back to
        fallback: Metric,
    },
    /// None of the metrics is present
    NoMetricData,
}

/// Resolved metric priority for one workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPriority {
    /// Preferred metric
    pub primary: MetricChoice,
    /// Second preference
    pub secondary: MetricChoice,
    /// Full order after completion
    pub order: Vec<Metric>,
    /// Narrative rules to apply
    pub narrative_rules: Vec<NarrativeRule>,
}

/// Resolve the metric priority from a preference order and availability
#[must_use]
pub fn resolve_priority(order: &[Metric], availability: MetricAvailability) -> MetricPriority {
    let complete = complete_order(order.iter().copied());
    let choice = |metric: Metric| MetricChoice {
        metric,
        available: availability.has(metric),
    };
    let primary = choice(complete[0]);
    let secondary = choice(complete[1]);

    let mut narrative_rules = Vec::new();
    if primary.metric == Metric::Pace && primary.available {
        narrative_rules.push(NarrativeRule::CondenseHeartRate);
    }
    if !primary.available {
        match complete.iter().copied().find(|m| availability.has(*m)) {
            Some(fallback) => narrative_rules.push(NarrativeRule::DiscloseFallback { fallback }),
            None => narrative_rules.push(NarrativeRule::NoMetricData),
        }
    }

    MetricPriority {
        primary,
        secondary,
        order: complete,
        narrative_rules,
    }
}

/// Resolve the metric priority for a workout using sport preferences
#[must_use]
pub fn resolve_for_workout(
    workout: &Workout,
    streams: Option<&StreamBundle>,
    preferences: &MetricPreferences,
) -> MetricPriority {
    let order = preferences.order_for(&workout.sport_type);
    resolve_priority(&order, MetricAvailability::from_workout(workout, streams))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preference_completes_order() {
        assert_eq!(
            parse_preference("power"),
            vec![Metric::Power, Metric::HeartRate, Metric::Pace]
        );
        assert_eq!(
            parse_preference("pace > heart_rate, pace"),
            vec![Metric::Pace, Metric::HeartRate, Metric::Power]
        );
        assert_eq!(parse_preference(""), DEFAULT_METRIC_ORDER.to_vec());
    }
}
