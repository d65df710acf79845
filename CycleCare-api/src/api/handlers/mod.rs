pub mod analytics;
pub mod health;

// Re-export handlers for easier imports
pub use analytics::{export_user_analytics_csv, get_user_analytics};
pub use health::health_check;
