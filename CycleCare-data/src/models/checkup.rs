use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage model for a single prenatal visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PregnancyCheckup {
    /// Unique identifier for the checkup
    pub id: Uuid,

    /// Owner of the record; aggregation never mixes records across users
    pub user_id: Uuid,

    /// Optional doctor who performed the visit
    pub doctor_id: Option<Uuid>,

    /// When the clinical visit took place; primary ordering key
    pub visit_date: DateTime<Utc>,

    /// Free-text notes written by the doctor
    pub doctor_notes: String,

    /// Recorded weight in kilograms; zero or negative means "not recorded"
    pub weight: f64,

    /// Free-text blood pressure reading, expected "SYS/DIA" but not guaranteed
    pub blood_pressure: String,

    /// When the next visit is scheduled, if any
    pub next_checkup_at: Option<DateTime<Utc>>,

    /// File attachments linked to this checkup, loaded with the record
    pub attachments: Vec<PregnancyCheckupFile>,

    /// When the record was created in the system
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Storage model for a recovery visit after childbirth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostpartumCheckup {
    /// Unique identifier for the checkup
    pub id: Uuid,

    /// Owner of the record
    pub user_id: Uuid,

    /// Optional doctor who performed the visit
    pub doctor_id: Option<Uuid>,

    /// When the clinical visit took place; primary ordering key
    pub visit_date: DateTime<Utc>,

    /// Notes on the mother's recovery
    pub mother_health_notes: String,

    /// Notes on the baby's health
    pub baby_health_notes: String,

    /// Any complications observed during the visit
    pub complications: String,

    /// Mental health observations
    pub mental_health: String,

    /// When the next visit is scheduled, if any
    pub next_checkup_at: Option<DateTime<Utc>>,

    /// File attachments linked to this checkup, loaded with the record
    pub attachments: Vec<PostpartumCheckupFile>,

    /// When the record was created in the system
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// File attachment linked to a pregnancy checkup (scans, prescriptions, reports)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PregnancyCheckupFile {
    /// Unique identifier for the attachment
    pub id: Uuid,

    /// Checkup this file belongs to
    pub checkup_id: Uuid,

    /// Original file name
    pub file_name: String,

    /// Where the file is stored
    pub file_url: String,

    /// MIME type or short descriptor of the file
    pub file_type: Option<String>,

    /// When the file was uploaded
    pub uploaded_at: DateTime<Utc>,
}

/// File attachment linked to a postpartum checkup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostpartumCheckupFile {
    /// Unique identifier for the attachment
    pub id: Uuid,

    /// Checkup this file belongs to
    pub checkup_id: Uuid,

    /// Original file name
    pub file_name: String,

    /// Where the file is stored
    pub file_url: String,

    /// MIME type or short descriptor of the file
    pub file_type: Option<String>,

    /// When the file was uploaded
    pub uploaded_at: DateTime<Utc>,
}
