use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{analytics, health};
use crate::openapi::configure_swagger_routes;

/// Create the application router over the default analytics service
pub async fn create_app() -> Router {
    create_app_with_service(analytics::create_service())
}

/// Create the application router over a caller-provided analytics service.
///
/// Tests and alternative compositions use this to inject a service backed
/// by a pre-seeded repository or a custom cache TTL.
pub fn create_app_with_service(service: analytics::AnalyticsApiService) -> Router {
    debug!("Creating application router");

    // Analytics routes; auth middleware is the surrounding deployment's
    // concern and is layered on by the integrating system
    let api_routes = Router::new()
        .route(
            "/analytics/user/:user_id/pregnancy-postpartum",
            get(analytics::get_user_analytics),
        )
        .route(
            "/analytics/user/:user_id/pregnancy-postpartum.csv",
            get(analytics::export_user_analytics_csv),
        );

    debug!("API routes configured");

    // Routes that carry no user data
    let public_routes = Router::new().route("/health", get(health::health_check));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(service);

    // Configure the Swagger UI using the helper function
    let app = app
        .merge(configure_swagger_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}
