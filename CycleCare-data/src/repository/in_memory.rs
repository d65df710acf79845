use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RepositoryError;
use crate::models::checkup::{PostpartumCheckup, PregnancyCheckup};

/// In-memory storage implementation for checkup records
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    /// Storage for pregnancy checkups, keyed by checkup ID
    pregnancy: Arc<Mutex<HashMap<Uuid, PregnancyCheckup>>>,

    /// Storage for postpartum checkups, keyed by checkup ID
    postpartum: Arc<Mutex<HashMap<Uuid, PostpartumCheckup>>>,
}

/// Inclusive [from, to] window check on the visit date
fn in_window(
    visit_date: DateTime<Utc>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> bool {
    if let Some(from) = from {
        if visit_date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if visit_date > to {
            return false;
        }
    }
    true
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pregnancy checkup in memory, replacing any record with the same ID
    pub async fn store_pregnancy(
        &self,
        checkup: &PregnancyCheckup,
    ) -> Result<PregnancyCheckup, RepositoryError> {
        let mut store = self
            .pregnancy
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;
        store.insert(checkup.id, checkup.clone());
        Ok(checkup.clone())
    }

    /// Store a postpartum checkup in memory, replacing any record with the same ID
    pub async fn store_postpartum(
        &self,
        checkup: &PostpartumCheckup,
    ) -> Result<PostpartumCheckup, RepositoryError> {
        let mut store = self
            .postpartum
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;
        store.insert(checkup.id, checkup.clone());
        Ok(checkup.clone())
    }

    /// Get a user's pregnancy checkups within the optional date window
    pub async fn find_pregnancy(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<PregnancyCheckup>, RepositoryError> {
        let store = self
            .pregnancy
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;
        let checkups = store
            .values()
            .filter(|c| c.user_id == user_id && in_window(c.visit_date, from, to))
            .cloned()
            .collect();
        Ok(checkups)
    }

    /// Get a user's postpartum checkups within the optional date window
    pub async fn find_postpartum(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<PostpartumCheckup>, RepositoryError> {
        let store = self
            .postpartum
            .lock()
            .map_err(|e| RepositoryError::Lock(e.to_string()))?;
        let checkups = store
            .values()
            .filter(|c| c.user_id == user_id && in_window(c.visit_date, from, to))
            .cloned()
            .collect();
        Ok(checkups)
    }
}
