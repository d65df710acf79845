use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::serve;
use tokio::net::TcpListener;

use cycle_care_api::api::routes::create_app_with_service;
use cycle_care_data::repository::CheckupRepository;
use cycle_care_domain::services::{AnalyticsCache, AnalyticsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with environment settings
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Cache TTL is configurable for deployments with tighter freshness needs
    let ttl_secs = std::env::var("ANALYTICS_CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(600);
    let cache = AnalyticsCache::with_ttl(Duration::from_secs(ttl_secs));

    let repository = CheckupRepository::new();
    let service = Arc::new(AnalyticsService::with_cache(repository, cache));

    // Create application router
    let app = create_app_with_service(service);

    // Get port from environment or use default
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    serve(listener, app).await?;

    Ok(())
}
