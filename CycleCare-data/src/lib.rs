// CycleCare Data
// This crate handles access to checkup records consumed by the analytics engine

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
