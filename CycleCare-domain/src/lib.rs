// CycleCare Domain
// This crate contains the analytics aggregation logic for the CycleCare API

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Re-export the repository module from cycle_care_data for convenience
pub use cycle_care_data::repository;
