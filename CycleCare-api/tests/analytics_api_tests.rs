use std::sync::{Arc, Once};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use cycle_care_data::models::checkup::{PostpartumCheckup, PregnancyCheckup};
use cycle_care_data::repository::CheckupRepository;
use cycle_care_api::api::routes::create_app_with_service;
use cycle_care_domain::services::AnalyticsService;

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 10, 0, 0).unwrap()
}

fn pregnancy_checkup(user_id: Uuid, visit_date: DateTime<Utc>) -> PregnancyCheckup {
    PregnancyCheckup {
        id: Uuid::new_v4(),
        user_id,
        doctor_id: None,
        visit_date,
        doctor_notes: "routine visit".to_string(),
        weight: 66.5,
        blood_pressure: "120/80".to_string(),
        next_checkup_at: None,
        attachments: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn postpartum_checkup(user_id: Uuid, visit_date: DateTime<Utc>) -> PostpartumCheckup {
    PostpartumCheckup {
        id: Uuid::new_v4(),
        user_id,
        doctor_id: None,
        visit_date,
        mother_health_notes: String::new(),
        baby_health_notes: String::new(),
        complications: "mild anemia".to_string(),
        mental_health: String::new(),
        next_checkup_at: None,
        attachments: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Build an app over a repository handle the test keeps for seeding
fn test_app() -> (Router, CheckupRepository) {
    initialize();
    let repository = CheckupRepository::new();
    let service = Arc::new(AnalyticsService::new(repository.clone()));
    (create_app_with_service(service), repository)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should succeed");

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read")
        .to_vec();
    (status, body, content_type)
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let (app, _) = test_app();

    let (status, body, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_analytics_endpoint_aggregates_both_kinds() {
    let (app, repository) = test_app();
    let user_id = Uuid::new_v4();

    repository
        .store_pregnancy_checkup(&pregnancy_checkup(user_id, at(5)))
        .await
        .unwrap();
    repository
        .store_postpartum_checkup(&postpartum_checkup(user_id, at(12)))
        .await
        .unwrap();

    let uri = format!("/api/v1/analytics/user/{}/pregnancy-postpartum", user_id);
    let (status, body, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["user_id"], user_id.to_string());
    assert_eq!(json["pregnancy_count"], 1);
    assert_eq!(json["postpartum_count"], 1);
    assert_eq!(json["weight_trend"][0]["value"], 66.5);
    assert_eq!(json["blood_pressure"][0]["systolic"], 120);
    assert_eq!(json["blood_pressure"][0]["diastolic"], 80);
    assert_eq!(json["blood_pressure"][0]["raw"], "120/80");

    let timeline = json["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0]["kind"], "pregnancy");
    assert_eq!(timeline[1]["kind"], "postpartum");
    assert_eq!(timeline[1]["notes"], "mild anemia");

    // Identical repeat request returns the same document (served from cache)
    let (status, repeat_body, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, repeat_body);
}

#[tokio::test]
async fn test_analytics_endpoint_applies_window() {
    let (app, repository) = test_app();
    let user_id = Uuid::new_v4();

    repository
        .store_pregnancy_checkup(&pregnancy_checkup(user_id, at(1)))
        .await
        .unwrap();
    repository
        .store_pregnancy_checkup(&pregnancy_checkup(user_id, at(20)))
        .await
        .unwrap();

    let uri = format!(
        "/api/v1/analytics/user/{}/pregnancy-postpartum?from=2025-06-10T00:00:00Z",
        user_id
    );
    let (status, body, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["pregnancy_count"], 1);
    assert_eq!(json["from"], "2025-06-10T00:00:00Z");
}

#[tokio::test]
async fn test_analytics_endpoint_rejects_malformed_bound() {
    let (app, _) = test_app();
    let user_id = Uuid::new_v4();

    let uri = format!(
        "/api/v1/analytics/user/{}/pregnancy-postpartum?from=yesterday",
        user_id
    );
    let (status, body, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_csv_export_contains_all_sections() {
    let (app, repository) = test_app();
    let user_id = Uuid::new_v4();

    repository
        .store_pregnancy_checkup(&pregnancy_checkup(user_id, at(5)))
        .await
        .unwrap();

    let uri = format!(
        "/api/v1/analytics/user/{}/pregnancy-postpartum.csv",
        user_id
    );
    let (status, body, content_type) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/csv"));

    let csv = String::from_utf8(body).unwrap();
    assert!(csv.starts_with("Weight Trend\n"));
    assert!(csv.contains("Blood Pressure\n"));
    assert!(csv.contains("Timeline\n"));
    assert!(csv.contains("120,80,120/80"));
    assert!(csv.contains("pregnancy,"));
}

#[tokio::test]
async fn test_analytics_for_unknown_user_is_empty() {
    let (app, _) = test_app();
    let user_id = Uuid::new_v4();

    let uri = format!("/api/v1/analytics/user/{}/pregnancy-postpartum", user_id);
    let (status, body, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["pregnancy_count"], 0);
    assert_eq!(json["postpartum_count"], 0);
    assert_eq!(json["timeline"].as_array().unwrap().len(), 0);
    assert!(json.get("upcoming_next_checkup").is_none());
}
