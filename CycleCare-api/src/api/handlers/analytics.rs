use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

// Import domain entities and services
use cycle_care_domain::services::{create_default_analytics_service, AnalyticsServiceTrait};

// Import our entities
use crate::entities::analytics::CombinedAnalytics;

/// Query parameters bounding the analytics window
#[derive(Debug, Deserialize, Clone, IntoParams, ToSchema)]
pub struct AnalyticsQueryParams {
    /// RFC 3339 inclusive lower bound on the visit date (e.g., 2025-01-01T00:00:00Z)
    pub from: Option<String>,

    /// RFC 3339 inclusive upper bound on the visit date (e.g., 2025-12-31T23:59:59Z)
    pub to: Option<String>,
}

/// Error response format for API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Service type for dependency injection
pub type AnalyticsApiService = Arc<dyn AnalyticsServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> AnalyticsApiService {
    Arc::new(create_default_analytics_service())
}

/// Parse the optional window bounds out of the query string
fn parse_window(
    params: &AnalyticsQueryParams,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), ErrorResponse> {
    let parse = |value: &Option<String>, name: &str| -> Result<Option<DateTime<Utc>>, ErrorResponse> {
        match value {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|t| Some(t.with_timezone(&Utc)))
                .map_err(|_| {
                    ErrorResponse::bad_request(&format!(
                        "{} must be RFC 3339 (e.g., 2025-01-01T00:00:00Z)",
                        name
                    ))
                }),
            None => Ok(None),
        }
    };

    Ok((parse(&params.from, "from")?, parse(&params.to, "to")?))
}

/// Get combined pregnancy/postpartum analytics for a user
#[utoipa::path(
    get,
    path = "/api/v1/analytics/user/{user_id}/pregnancy-postpartum",
    params(
        ("user_id" = Uuid, Path, description = "User to aggregate checkups for"),
        AnalyticsQueryParams
    ),
    responses(
        (status = 200, description = "Combined analytics for the user", body = CombinedAnalytics),
        (status = 400, description = "Invalid user ID or window bound", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "analytics"
)]
#[instrument(skip(service))]
pub async fn get_user_analytics(
    State(service): State<AnalyticsApiService>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<AnalyticsQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    info!("Fetching combined analytics for user: {}", user_id);

    let (from, to) = parse_window(&params)?;

    match service.get_combined_analytics(user_id, from, to).await {
        Ok(analytics) => {
            let public: CombinedAnalytics = analytics.into();
            Ok((StatusCode::OK, Json(public)))
        }
        Err(e) => {
            error!("Error aggregating analytics for user {}: {}", user_id, e);
            Err(ErrorResponse::internal_error())
        }
    }
}

/// Export combined analytics for a user as CSV
#[utoipa::path(
    get,
    path = "/api/v1/analytics/user/{user_id}/pregnancy-postpartum.csv",
    params(
        ("user_id" = Uuid, Path, description = "User to aggregate checkups for"),
        AnalyticsQueryParams
    ),
    responses(
        (status = 200, description = "Combined analytics as CSV", body = String, content_type = "text/csv"),
        (status = 400, description = "Invalid user ID or window bound", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "analytics"
)]
#[instrument(skip(service))]
pub async fn export_user_analytics_csv(
    State(service): State<AnalyticsApiService>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<AnalyticsQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    info!("Exporting combined analytics CSV for user: {}", user_id);

    let (from, to) = parse_window(&params)?;

    match service.get_combined_analytics(user_id, from, to).await {
        Ok(analytics) => {
            let body = render_csv(&analytics.into());
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=analytics_pregnancy_postpartum.csv",
                    ),
                ],
                body,
            ))
        }
        Err(e) => {
            error!("Error exporting analytics for user {}: {}", user_id, e);
            Err(ErrorResponse::internal_error())
        }
    }
}

/// Quote a CSV field when it contains a separator, quote, or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(out: &mut String, fields: &[&str]) {
    let row = fields.iter().map(|f| csv_field(f)).collect::<Vec<_>>();
    out.push_str(&row.join(","));
    out.push('\n');
}

fn csv_time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render the three analytics sections (weight trend, blood pressure,
/// timeline) as one CSV document, sections separated by blank lines
fn render_csv(analytics: &CombinedAnalytics) -> String {
    let mut out = String::new();

    csv_row(&mut out, &["Weight Trend"]);
    csv_row(&mut out, &["Time", "Weight"]);
    for point in &analytics.weight_trend {
        csv_row(&mut out, &[&csv_time(point.time), &point.value.to_string()]);
    }
    out.push('\n');

    csv_row(&mut out, &["Blood Pressure"]);
    csv_row(&mut out, &["Time", "Systolic", "Diastolic", "Raw"]);
    for point in &analytics.blood_pressure {
        let systolic = point.systolic.map(|v| v.to_string()).unwrap_or_default();
        let diastolic = point.diastolic.map(|v| v.to_string()).unwrap_or_default();
        csv_row(
            &mut out,
            &[&csv_time(point.time), &systolic, &diastolic, &point.raw],
        );
    }
    out.push('\n');

    csv_row(&mut out, &["Timeline"]);
    csv_row(&mut out, &["Type", "VisitDate", "Notes", "AttachmentCount"]);
    for item in &analytics.timeline {
        csv_row(
            &mut out,
            &[
                item.kind.as_str(),
                &csv_time(item.visit_date),
                &item.notes,
                &item.attachment_count.to_string(),
            ],
        );
    }

    out
}
