use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::entities::analytics::CombinedAnalytics;

/// Default time-to-live for cached analytics
const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// A cached analytics snapshot with its absolute expiry
struct CacheEntry {
    data: CombinedAnalytics,
    expires_at: Instant,
}

/// Time-bounded in-memory cache for combined analytics.
///
/// Keys are derived from (user, window); entries expire after a fixed TTL
/// and are only removed lazily on read or by explicit per-user
/// invalidation — there is no background eviction and no size bound.
/// Reads take the shared lock so concurrent readers never block each
/// other; the exclusive lock is held only across the map access itself,
/// never across aggregation work.
pub struct AnalyticsCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the cache key for a (user, window) pair.
///
/// The user ID is a delimiter-terminated prefix so per-user invalidation
/// can match on it unambiguously; an absent bound serializes to the empty
/// string, which no real timestamp can collide with.
fn cache_key(user_id: Uuid, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> String {
    let fmt = |t: Option<DateTime<Utc>>| {
        t.map(|t| t.to_rfc3339_opts(SecondsFormat::Nanos, true))
            .unwrap_or_default()
    };
    format!("{}|{}|{}", user_id, fmt(from), fmt(to))
}

impl AnalyticsCache {
    /// Create a cache with the default 10 minute TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up the cached analytics for a (user, window) pair.
    ///
    /// An entry whose expiry has passed is reported as a miss; it stays in
    /// the map until overwritten or invalidated.
    pub fn get(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Option<CombinedAnalytics> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(&cache_key(user_id, from, to))?;
        if Instant::now() >= entry.expires_at {
            return None;
        }
        Some(entry.data.clone())
    }

    /// Store analytics for a (user, window) pair, wholesale replacing any
    /// prior entry under the same key
    pub fn put(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        data: CombinedAnalytics,
    ) {
        let entry = CacheEntry {
            data,
            expires_at: Instant::now() + self.ttl,
        };
        let mut entries = self.entries.write().unwrap();
        entries.insert(cache_key(user_id, from, to), entry);
    }

    /// Remove every cached entry belonging to a user, regardless of window
    pub fn invalidate_user(&self, user_id: Uuid) {
        let prefix = format!("{}|", user_id);
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(&prefix));
        let removed = before - entries.len();
        if removed > 0 {
            debug!("Invalidated {} cached analytics entries for user {}", removed, user_id);
        }
    }

    /// Number of entries currently held, including expired ones
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
