use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which phase a checkup belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckupKind {
    /// Prenatal visit
    Pregnancy,

    /// Recovery visit after childbirth
    Postpartum,
}

impl CheckupKind {
    /// Stable string form used by exports and cache-adjacent logging
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckupKind::Pregnancy => "pregnancy",
            CheckupKind::Postpartum => "postpartum",
        }
    }
}

/// A single (time, value) point in a trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeValue {
    /// When the value was measured
    pub time: DateTime<Utc>,

    /// The measured value
    pub value: f64,
}

/// A blood pressure reading placed on the timeline.
///
/// The systolic/diastolic pair is absent when the raw text did not parse;
/// the raw text is kept either way so nothing recorded by a doctor is lost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodPressurePoint {
    /// When the reading was taken
    pub time: DateTime<Utc>,

    /// Parsed systolic value (the higher number), if the raw text parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<u16>,

    /// Parsed diastolic value (the lower number), if the raw text parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<u16>,

    /// The reading exactly as it was recorded
    pub raw: String,
}

/// Unified summary of one checkup of either kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

/// Aggregated analytics over a user's pregnancy and postpartum checkups.
///
/// Derived, never persisted: a pure function of the two record sets plus
/// the wall clock (for the upcoming-checkup computation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

    /// Earliest scheduled checkup strictly after the time of computation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_next_checkup: Option<DateTime<Utc>>,

    /// Weight measurements over time, pregnancy checkups only
    pub weight_trend: Vec<TimeValue>,

    /// Blood pressure readings over time, parsed where possible
    pub blood_pressure: Vec<BloodPressurePoint>,

    /// Time-ordered merge of both checkup kinds
    pub timeline: Vec<CheckupItem>,
}
