use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use crate::models::checkup::{PostpartumCheckup, PregnancyCheckup};

/// Repository trait for checkup records consumed by the analytics engine.
///
/// Both finders return records with their attachment collections already
/// populated, so counting attachments never triggers additional loads.
/// The [from, to] window bounds are inclusive on both ends and apply to
/// the visit date.
#[async_trait]
pub trait CheckupRepositoryTrait {
    /// Get a user's pregnancy checkups within the optional date window
    async fn find_pregnancy_checkups(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<PregnancyCheckup>, RepositoryError>;

    /// Get a user's postpartum checkups within the optional date window
    async fn find_postpartum_checkups(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<PostpartumCheckup>, RepositoryError>;
}

/// Repository for checkup records backed by process-local storage.
///
/// The production database backend is owned by the checkup CRUD services;
/// this implementation carries the same contract over shared in-memory
/// maps and is what the API composes for demos and tests. Clones share
/// the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct CheckupRepository {
    storage: InMemoryStorage,
}

impl CheckupRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }

    /// Store a pregnancy checkup, replacing any record with the same ID
    pub async fn store_pregnancy_checkup(
        &self,
        checkup: &PregnancyCheckup,
    ) -> Result<PregnancyCheckup, RepositoryError> {
        debug!("Storing pregnancy checkup: {}", checkup.id);
        self.storage.store_pregnancy(checkup).await
    }

    /// Store a postpartum checkup, replacing any record with the same ID
    pub async fn store_postpartum_checkup(
        &self,
        checkup: &PostpartumCheckup,
    ) -> Result<PostpartumCheckup, RepositoryError> {
        debug!("Storing postpartum checkup: {}", checkup.id);
        self.storage.store_postpartum(checkup).await
    }
}

#[async_trait]
impl CheckupRepositoryTrait for CheckupRepository {
    async fn find_pregnancy_checkups(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<PregnancyCheckup>, RepositoryError> {
        debug!("Finding pregnancy checkups for user: {}", user_id);
        self.storage.find_pregnancy(user_id, from, to).await
    }

    async fn find_postpartum_checkups(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<PostpartumCheckup>, RepositoryError> {
        debug!("Finding postpartum checkups for user: {}", user_id);
        self.storage.find_postpartum(user_id, from, to).await
    }
}

/// Mock checkup repositories for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of the checkup repository with predefined records
    #[derive(Debug, Clone, Default)]
    pub struct MockCheckupRepository {
        pregnancy: Vec<PregnancyCheckup>,
        postpartum: Vec<PostpartumCheckup>,
    }

    impl MockCheckupRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined checkups
        pub fn with_checkups(
            pregnancy: Vec<PregnancyCheckup>,
            postpartum: Vec<PostpartumCheckup>,
        ) -> Self {
            Self {
                pregnancy,
                postpartum,
            }
        }
    }

    fn in_window(
        visit_date: DateTime<Utc>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> bool {
        from.map_or(true, |f| visit_date >= f) && to.map_or(true, |t| visit_date <= t)
    }

    #[async_trait]
    impl CheckupRepositoryTrait for MockCheckupRepository {
        async fn find_pregnancy_checkups(
            &self,
            user_id: Uuid,
            from: Option<DateTime<Utc>>,
            to: Option<DateTime<Utc>>,
        ) -> Result<Vec<PregnancyCheckup>, RepositoryError> {
            Ok(self
                .pregnancy
                .iter()
                .filter(|c| c.user_id == user_id && in_window(c.visit_date, from, to))
                .cloned()
                .collect())
        }

        async fn find_postpartum_checkups(
            &self,
            user_id: Uuid,
            from: Option<DateTime<Utc>>,
            to: Option<DateTime<Utc>>,
        ) -> Result<Vec<PostpartumCheckup>, RepositoryError> {
            Ok(self
                .postpartum
                .iter()
                .filter(|c| c.user_id == user_id && in_window(c.visit_date, from, to))
                .cloned()
                .collect())
        }
    }

    /// Mock repository whose finders always fail, for error-path tests
    #[derive(Debug, Clone, Default)]
    pub struct FailingCheckupRepository;

    #[async_trait]
    impl CheckupRepositoryTrait for FailingCheckupRepository {
        async fn find_pregnancy_checkups(
            &self,
            _user_id: Uuid,
            _from: Option<DateTime<Utc>>,
            _to: Option<DateTime<Utc>>,
        ) -> Result<Vec<PregnancyCheckup>, RepositoryError> {
            Err(RepositoryError::Storage("connection refused".to_string()))
        }

        async fn find_postpartum_checkups(
            &self,
            _user_id: Uuid,
            _from: Option<DateTime<Utc>>,
            _to: Option<DateTime<Utc>>,
        ) -> Result<Vec<PostpartumCheckup>, RepositoryError> {
            Err(RepositoryError::Storage("connection refused".to_string()))
        }
    }
}
