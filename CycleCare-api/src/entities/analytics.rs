use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use cycle_care_domain::entities as domain;

/// Which phase a checkup belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckupKind {
    /// Prenatal visit
    Pregnancy,

    /// Recovery visit after childbirth
    Postpartum,
}

impl CheckupKind {
    /// Stable string form used by the CSV export
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckupKind::Pregnancy => "pregnancy",
            CheckupKind::Postpartum => "postpartum",
        }
    }
}

/// A single (time, value) point in a trend series
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeValue {
    /// When the value was measured
    pub time: DateTime<Utc>,

    /// The measured value
    pub value: f64,
}

/// A blood pressure reading placed on the timeline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloodPressurePoint {
    /// When the reading was taken
    pub time: DateTime<Utc>,

    /// Parsed systolic value, absent when the raw text did not parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<u16>,

    /// Parsed diastolic value, absent when the raw text did not parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<u16>,

    /// The reading exactly as it was recorded
    pub raw: String,
}

/// Unified summary of one checkup of either kind
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckupItem {
    /// Identifier of the underlying checkup record
    pub id: Uuid,

    /// Which phase the checkup belongs to
    pub kind: CheckupKind,

    /// When the clinical visit took place
    pub visit_date: DateTime<Utc>,

    /// Unified note for the visit; empty when nothing was recorded
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    /// Number of file attachments linked to the checkup
    pub attachment_count: usize,
}

/// Public representation of a user's combined checkup analytics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CombinedAnalytics {
    /// User the analytics were computed for
    pub user_id: Uuid,

    /// Inclusive lower bound of the window, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,

    /// Inclusive upper bound of the window, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,

    /// Number of pregnancy checkups in the window
    pub pregnancy_count: usize,

    /// Number of postpartum checkups in the window
    pub postpartum_count: usize,

    /// Earliest scheduled checkup strictly in the future
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_next_checkup: Option<DateTime<Utc>>,

    /// Weight measurements over time, pregnancy checkups only
    pub weight_trend: Vec<TimeValue>,

    /// Blood pressure readings over time, parsed where possible
    pub blood_pressure: Vec<BloodPressurePoint>,

    /// Time-ordered merge of both checkup kinds
    pub timeline: Vec<CheckupItem>,
}

impl From<domain::CheckupKind> for CheckupKind {
    fn from(kind: domain::CheckupKind) -> Self {
        match kind {
            domain::CheckupKind::Pregnancy => CheckupKind::Pregnancy,
            domain::CheckupKind::Postpartum => CheckupKind::Postpartum,
        }
    }
}

impl From<domain::TimeValue> for TimeValue {
    fn from(point: domain::TimeValue) -> Self {
        Self {
            time: point.time,
            value: point.value,
        }
    }
}

impl From<domain::BloodPressurePoint> for BloodPressurePoint {
    fn from(point: domain::BloodPressurePoint) -> Self {
        Self {
            time: point.time,
            systolic: point.systolic,
            diastolic: point.diastolic,
            raw: point.raw,
        }
    }
}

impl From<domain::CheckupItem> for CheckupItem {
    fn from(item: domain::CheckupItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind.into(),
            visit_date: item.visit_date,
            notes: item.notes,
            attachment_count: item.attachment_count,
        }
    }
}

impl From<domain::CombinedAnalytics> for CombinedAnalytics {
    fn from(analytics: domain::CombinedAnalytics) -> Self {
        Self {
            user_id: analytics.user_id,
            from: analytics.from,
            to: analytics.to,
            pregnancy_count: analytics.pregnancy_count,
            postpartum_count: analytics.postpartum_count,
            upcoming_next_checkup: analytics.upcoming_next_checkup,
            weight_trend: analytics.weight_trend.into_iter().map(Into::into).collect(),
            blood_pressure: analytics
                .blood_pressure
                .into_iter()
                .map(Into::into)
                .collect(),
            timeline: analytics.timeline.into_iter().map(Into::into).collect(),
        }
    }
}
