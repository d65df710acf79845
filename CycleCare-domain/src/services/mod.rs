pub mod analytics;
pub mod blood_pressure;
pub mod cache;

// Domain services
// This module contains the analytics aggregation logic.

// Re-export service traits and factory functions
pub use analytics::{
    create_default_analytics_service, AnalyticsService, AnalyticsServiceError,
    AnalyticsServiceTrait,
};
pub use blood_pressure::parse_blood_pressure;
pub use cache::AnalyticsCache;
