// ABOUTME: Cache-aside resolution of heart-rate and power zone profiles
// ABOUTME: Activity-specific profiles win over the user's default profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::collaborators::ZoneProfileSource;
use crate::cache::{ZoneCacheKey, ZoneProfileCache};
use crate::logging::TelemetryLogger;
use chrono::{DateTime, Utc};
use coach_core::errors::AppResult;
use coach_core::models::{ZoneMetric, ZoneProfile};
use coach_intelligence::zones::resolve_profile;
use uuid::Uuid;

/// Profiles to use for one workout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedZones {
    /// Heart-rate profile
    pub heart_rate: Option<ZoneProfile>,
    /// Power profile
    pub power: Option<ZoneProfile>,
}

async fn cached_profile(
    source: &dyn ZoneProfileSource,
    cache: &mut ZoneProfileCache,
    key: ZoneCacheKey,
    now: DateTime<Utc>,
) -> AppResult<Option<ZoneProfile>> {
    if let Some(profile) = cache.get(&key, now) {
        TelemetryLogger::log_cache_lookup(key.user_id, metric_name(key.metric), true);
        return Ok(Some(profile));
    }
    TelemetryLogger::log_cache_lookup(key.user_id, metric_name(key.metric), false);

    let fetched = source
        .zone_profile(key.user_id, key.metric, key.activity_id.as_deref())
        .await?;
    if let Some(profile) = &fetched {
        cache.insert(key, profile.clone(), now);
    }
    Ok(fetched)
}

const fn metric_name(metric: ZoneMetric) -> &'static str {
    match metric {
        ZoneMetric::HeartRate => "heart_rate",
        ZoneMetric::Power => "power",
    }
}

async fn resolve_metric(
    source: &dyn ZoneProfileSource,
    cache: &mut ZoneProfileCache,
    user_id: Uuid,
    metric: ZoneMetric,
    activity_id: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<Option<ZoneProfile>> {
    let specific = match activity_id {
        Some(id) => {
            let key = ZoneCacheKey::for_activity(user_id, metric, id);
            cached_profile(source, cache, key, now).await?
        }
        None => None,
    };
    let default = cached_profile(source, cache, ZoneCacheKey::user_default(user_id, metric), now)
        .await?;
    Ok(resolve_profile(specific.as_ref(), default.as_ref()).cloned())
}

/// Resolve both profiles for a workout, reading through the cache
///
/// # Errors
///
/// Returns an error if the profile source fails
pub async fn resolve_zone_profiles(
    source: &dyn ZoneProfileSource,
    cache: &mut ZoneProfileCache,
    user_id: Uuid,
    activity_id: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<ResolvedZones> {
    Ok(ResolvedZones {
        heart_rate: resolve_metric(source, cache, user_id, ZoneMetric::HeartRate, activity_id, now)
            .await?,
        power: resolve_metric(source, cache, user_id, ZoneMetric::Power, activity_id, now).await?,
    })
}
