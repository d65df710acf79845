// Repository module structure
pub mod errors;
mod checkups;
mod in_memory;

// Re-export commonly used types
pub use checkups::{CheckupRepository, CheckupRepositoryTrait};
pub use errors::RepositoryError;

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use checkups::tests;
