use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Analytics endpoints
        crate::api::handlers::analytics::get_user_analytics,
        crate::api::handlers::analytics::export_user_analytics_csv,
    ),
    components(
        schemas(
            // Entities
            crate::entities::analytics::CombinedAnalytics,
            crate::entities::analytics::TimeValue,
            crate::entities::analytics::BloodPressurePoint,
            crate::entities::analytics::CheckupItem,
            crate::entities::analytics::CheckupKind,

            // Health handlers
            crate::api::handlers::health::HealthResponse,

            // Analytics handlers
            crate::api::handlers::analytics::ErrorResponse,
            crate::api::handlers::analytics::AnalyticsQueryParams,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "analytics", description = "Combined checkup analytics endpoints")
    ),
    info(
        title = "CycleCare Analytics API",
        version = "0.1.0",
        description = "Read-side aggregation of pregnancy and postpartum checkups",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;
