use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::entities::analytics::{
    BloodPressurePoint, CheckupItem, CheckupKind, CombinedAnalytics, TimeValue,
};
use crate::services::blood_pressure::parse_blood_pressure;
use crate::services::cache::AnalyticsCache;
use cycle_care_data::models::checkup::{PostpartumCheckup, PregnancyCheckup};
use cycle_care_data::repository::{CheckupRepository, CheckupRepositoryTrait, RepositoryError};

/// Analytics service errors
#[derive(Debug, Error)]
pub enum AnalyticsServiceError {
    /// Repository error; the aggregation aborts and nothing is cached
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Trait for analytics service operations
#[async_trait]
pub trait AnalyticsServiceTrait {
    /// Aggregate a user's pregnancy and postpartum checkups within an
    /// optional inclusive [from, to] window, served from cache when a
    /// fresh entry exists
    async fn get_combined_analytics(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<CombinedAnalytics, AnalyticsServiceError>;

    /// Drop every cached analytics entry for a user.
    ///
    /// Intended for write paths that mutate checkup data; no write path
    /// calls it yet, so cached analytics can trail new data by up to one
    /// TTL window.
    fn invalidate_cache_for_user(&self, user_id: Uuid);
}

/// Analytics service joining the two checkup streams into trend lines and
/// a unified timeline, with a read-through TTL cache in front.
pub struct AnalyticsService<R: CheckupRepositoryTrait> {
    repository: R,
    cache: AnalyticsCache,
}

impl<R: CheckupRepositoryTrait> AnalyticsService<R> {
    /// Create a new analytics service with the default cache TTL
    pub fn new(repository: R) -> Self {
        Self::with_cache(repository, AnalyticsCache::new())
    }

    /// Create a new analytics service with a caller-configured cache
    pub fn with_cache(repository: R, cache: AnalyticsCache) -> Self {
        Self { repository, cache }
    }
}

/// First field whose trimmed form is non-empty, or "" when all are blank
fn first_non_blank<'a>(fields: [&'a str; 4]) -> &'a str {
    fields
        .iter()
        .copied()
        .find(|s| !s.trim().is_empty())
        .unwrap_or("")
}

/// Join the fetched record sets into a `CombinedAnalytics`.
///
/// Pure with respect to its inputs: `now` is passed in so the
/// upcoming-checkup selection is deterministic under test.
fn combine(
    user_id: Uuid,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    pregnancy: &[PregnancyCheckup],
    postpartum: &[PostpartumCheckup],
    now: DateTime<Utc>,
) -> CombinedAnalytics {
    let mut weight_trend = Vec::new();
    let mut blood_pressure = Vec::new();
    let mut timeline = Vec::with_capacity(pregnancy.len() + postpartum.len());

    for checkup in pregnancy {
        // Zero or negative weight means "not recorded"
        if checkup.weight > 0.0 {
            weight_trend.push(TimeValue {
                time: checkup.visit_date,
                value: checkup.weight,
            });
        }

        // Keep the point whether or not the raw text parses
        if !checkup.blood_pressure.trim().is_empty() {
            let (systolic, diastolic) = parse_blood_pressure(&checkup.blood_pressure);
            blood_pressure.push(BloodPressurePoint {
                time: checkup.visit_date,
                systolic,
                diastolic,
                raw: checkup.blood_pressure.clone(),
            });
        }

        timeline.push(CheckupItem {
            id: checkup.id,
            kind: CheckupKind::Pregnancy,
            visit_date: checkup.visit_date,
            notes: checkup.doctor_notes.trim().to_string(),
            attachment_count: checkup.attachments.len(),
        });
    }

    for checkup in postpartum {
        let notes = first_non_blank([
            &checkup.mother_health_notes,
            &checkup.baby_health_notes,
            &checkup.complications,
            &checkup.mental_health,
        ]);
        timeline.push(CheckupItem {
            id: checkup.id,
            kind: CheckupKind::Postpartum,
            visit_date: checkup.visit_date,
            notes: notes.trim().to_string(),
            attachment_count: checkup.attachments.len(),
        });
    }

    // Vec::sort_by is stable, which keeps equal-timestamp output
    // deterministic for identical inputs
    weight_trend.sort_by(|a, b| a.time.cmp(&b.time));
    blood_pressure.sort_by(|a, b| a.time.cmp(&b.time));
    timeline.sort_by(|a, b| a.visit_date.cmp(&b.visit_date));

    let upcoming_next_checkup = pregnancy
        .iter()
        .filter_map(|c| c.next_checkup_at)
        .chain(postpartum.iter().filter_map(|c| c.next_checkup_at))
        .filter(|t| *t > now)
        .min();

    CombinedAnalytics {
        user_id,
        from,
        to,
        pregnancy_count: pregnancy.len(),
        postpartum_count: postpartum.len(),
        upcoming_next_checkup,
        weight_trend,
        blood_pressure,
        timeline,
    }
}

#[async_trait]
impl<R: CheckupRepositoryTrait + Send + Sync> AnalyticsServiceTrait for AnalyticsService<R> {
    async fn get_combined_analytics(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<CombinedAnalytics, AnalyticsServiceError> {
        if let Some(cached) = self.cache.get(user_id, from, to) {
            debug!("Analytics cache hit for user {}", user_id);
            return Ok(cached);
        }

        debug!("Analytics cache miss for user {}, aggregating", user_id);
        let pregnancy = self
            .repository
            .find_pregnancy_checkups(user_id, from, to)
            .await?;
        let postpartum = self
            .repository
            .find_postpartum_checkups(user_id, from, to)
            .await?;

        let analytics = combine(user_id, from, to, &pregnancy, &postpartum, Utc::now());

        self.cache.put(user_id, from, to, analytics.clone());
        Ok(analytics)
    }

    fn invalidate_cache_for_user(&self, user_id: Uuid) {
        self.cache.invalidate_user(user_id);
    }
}

/// Create an analytics service over the default checkup repository
pub fn create_default_analytics_service() -> AnalyticsService<CheckupRepository> {
    AnalyticsService::new(CheckupRepository::new())
}
