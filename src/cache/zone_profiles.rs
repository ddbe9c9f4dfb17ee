// ABOUTME: LRU cache of zone profiles keyed by user, metric and activity
// ABOUTME: Entries older than the TTL are treated as misses and evicted on lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::config::ZoneCacheConfig;
use chrono::{DateTime, Duration, Utc};
use coach_core::models::{ZoneMetric, ZoneProfile};
use lru::LruCache;
use std::num::NonZeroUsize;
use uuid::Uuid;

/// Identifies one cached profile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneCacheKey {
    /// Owning user
    pub user_id: Uuid,
    /// Metric the profile applies to
    pub metric: ZoneMetric,
    /// Activity the profile is specific to, `None` for the user default
    pub activity_id: Option<String>,
}

impl ZoneCacheKey {
    /// Key for a user's default profile
    #[must_use]
    pub const fn user_default(user_id: Uuid, metric: ZoneMetric) -> Self {
        Self {
            user_id,
            metric,
            activity_id: None,
        }
    }

    /// Key for an activity-specific profile
    #[must_use]
    pub fn for_activity(user_id: Uuid, metric: ZoneMetric, activity_id: &str) -> Self {
        Self {
            user_id,
            metric,
            activity_id: Some(activity_id.to_owned()),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    profile: ZoneProfile,
    stored_at: DateTime<Utc>,
}

/// Zone profile cache with LRU eviction and TTL freshness
#[derive(Debug)]
pub struct ZoneProfileCache {
    entries: LruCache<ZoneCacheKey, CacheEntry>,
    ttl: Duration,
}

impl ZoneProfileCache {
    /// Default capacity when the configuration asks for zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: LruCache::new(capacity),
            ttl,
        }
    }

    /// Create a cache from configuration
    #[must_use]
    pub fn from_config(config: &ZoneCacheConfig) -> Self {
        Self::new(config.max_entries, config.ttl())
    }

    /// Fresh profile for `key`, evicting it if stale
    pub fn get(&mut self, key: &ZoneCacheKey, now: DateTime<Utc>) -> Option<ZoneProfile> {
        let stored_at = self.entries.peek(key)?.stored_at;
        if now - stored_at < self.ttl {
            self.entries.get(key).map(|entry| entry.profile.clone())
        } else {
            self.entries.pop(key);
            None
        }
    }

    /// Store a profile fetched at `now`
    pub fn insert(&mut self, key: ZoneCacheKey, profile: ZoneProfile, now: DateTime<Utc>) {
        self.entries.put(
            key,
            CacheEntry {
                profile,
                stored_at: now,
            },
        );
    }

    /// Drop every entry belonging to a user
    pub fn invalidate_user(&mut self, user_id: Uuid) {
        let keys: Vec<ZoneCacheKey> = self
            .entries
            .iter()
            .filter(|(key, _)| key.user_id == user_id)
            .map(|(key, _)| key.clone())
            .collect();
        for key in keys {
            self.entries.pop(&key);
        }
    }

    /// Number of cached entries, fresh or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
