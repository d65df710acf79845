// Public entities for the CycleCare analytics API
// This module contains data structures that cross the application boundary

// Public representations of the analytics results
pub mod analytics;
