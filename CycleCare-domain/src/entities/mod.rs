// Domain entities and value objects
pub mod analytics;

// Re-export common types for easier imports
pub use analytics::{BloodPressurePoint, CheckupItem, CheckupKind, CombinedAnalytics, TimeValue};
