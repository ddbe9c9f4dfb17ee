// ABOUTME: Loads a workout's stream bundle, derives pacing and zone artifacts, writes them back
// ABOUTME: Zone seconds are only written when a profile is available for the metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::collaborators::StreamRepository;
use super::zones::ResolvedZones;
use coach_core::errors::{AppError, AppResult};
use coach_core::models::StreamBundle;
use coach_intelligence::config::PacingConfig;
use coach_intelligence::pacing::PacingAnalyzer;
use coach_intelligence::zones::{analyze_zones, WorkoutZones};
use tracing::{info, instrument};

/// Derives and persists per-workout stream artifacts
#[derive(Debug, Clone, Default)]
pub struct StreamProcessor {
    pacing: PacingAnalyzer,
}

impl StreamProcessor {
    /// Create a processor with the given pacing thresholds
    #[must_use]
    pub const fn new(config: PacingConfig) -> Self {
        Self {
            pacing: PacingAnalyzer::new(config),
        }
    }

    /// Pacing analyzer in use
    #[must_use]
    pub const fn pacing(&self) -> &PacingAnalyzer {
        &self.pacing
    }

    /// Derive pacing artifacts and zone seconds on a bundle in place
    ///
    /// Returns the zone distributions so callers can feed them to analytics.
    pub fn enrich(&self, bundle: &mut StreamBundle, zones: Option<&ResolvedZones>) -> WorkoutZones {
        self.pacing.derive_artifacts(bundle);
        let Some(zones) = zones else {
            return WorkoutZones::default();
        };

        let workout_zones = analyze_zones(bundle, zones.heart_rate.as_ref(), zones.power.as_ref());
        if let Some(hr) = &workout_zones.heart_rate {
            bundle.hr_zone_times = Some(hr.seconds());
        }
        if let Some(power) = &workout_zones.power {
            bundle.power_zone_times = Some(power.seconds());
        }
        workout_zones
    }

    /// Load, enrich and save the bundle for one workout
    ///
    /// # Errors
    ///
    /// Returns an error if the workout has no streams or the repository fails
    #[instrument(skip(self, repository, zones))]
    pub async fn process(
        &self,
        repository: &dyn StreamRepository,
        workout_id: &str,
        zones: Option<&ResolvedZones>,
    ) -> AppResult<(StreamBundle, WorkoutZones)> {
        let mut bundle = repository
            .load_streams(workout_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Streams for workout {workout_id}"))
                    .with_resource_id(workout_id)
            })?;

        let workout_zones = self.enrich(&mut bundle, zones);
        repository.save_artifacts(&bundle).await?;

        info!(
            workout_id,
            laps = bundle.lap_splits.as_ref().map_or(0, Vec::len),
            has_hr_zones = workout_zones.heart_rate.is_some(),
            has_power_zones = workout_zones.power.is_some(),
            "Stream artifacts saved"
        );
        Ok((bundle, workout_zones))
    }
}
