//! In-memory directory for tenant-scoped lookup tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{CompanyId, UserId, UserRecord},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the backing lock is
    /// poisoned.
    pub fn insert(&self, record: UserRecord) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::persistence(std::io::Error::other(err.to_string())))?;
        state.insert(record.id().clone(), record);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id_and_company(
        &self,
        user_id: &UserId,
        company_id: &CompanyId,
    ) -> DirectoryResult<Option<UserRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::persistence(std::io::Error::other(err.to_string())))?;
        let record = state
            .get(user_id)
            .filter(|record| record.company_id() == company_id && record.is_active())
            .cloned();
        Ok(record)
    }
}
