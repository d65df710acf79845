// Storage models for checkup records
pub mod checkup;

// Re-export common types for easier imports
pub use checkup::{
    PostpartumCheckup, PostpartumCheckupFile, PregnancyCheckup, PregnancyCheckupFile,
};
