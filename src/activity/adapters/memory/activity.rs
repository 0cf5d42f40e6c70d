//! In-memory repository for activity lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{Activity, ActivityId, ActivityStatus},
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};
use crate::directory::domain::{CompanyId, UserId};

/// Thread-safe in-memory activity repository.
///
/// Each port call takes the state lock for its full duration, which gives
/// the at-most-one-in-flight-mutation-per-activity guarantee the port
/// contract requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    state: Arc<RwLock<HashMap<ActivityId, Activity>>>,
}

impl InMemoryActivityRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collects active activities matching the predicate, newest created first.
fn collect_sorted(
    state: &HashMap<ActivityId, Activity>,
    predicate: impl Fn(&Activity) -> bool,
) -> Vec<Activity> {
    let mut matches: Vec<Activity> = state
        .values()
        .filter(|activity| activity.is_active() && predicate(activity))
        .cloned()
        .collect();
    matches.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    matches
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn store(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&activity.id()) {
            return Err(ActivityRepositoryError::DuplicateActivity(activity.id()));
        }
        state.insert(activity.id(), activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&activity.id()) {
            return Err(ActivityRepositoryError::NotFound(activity.id()));
        }
        state.insert(activity.id(), activity.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ActivityId) -> ActivityRepositoryResult<Option<Activity>> {
        let state = self.state.read().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .get(&id)
            .filter(|activity| activity.is_active())
            .cloned())
    }

    async fn find_pending_by_user(
        &self,
        user_id: &UserId,
    ) -> ActivityRepositoryResult<Vec<Activity>> {
        let state = self.state.read().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_sorted(&state, |activity| {
            activity.assigned_to() == user_id && activity.status() == ActivityStatus::Pending
        }))
    }

    async fn find_by_user(&self, user_id: &UserId) -> ActivityRepositoryResult<Vec<Activity>> {
        let state = self.state.read().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_sorted(&state, |activity| {
            activity.assigned_to() == user_id
        }))
    }

    async fn find_by_company(
        &self,
        company_id: &CompanyId,
    ) -> ActivityRepositoryResult<Vec<Activity>> {
        let state = self.state.read().map_err(|err| {
            ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(collect_sorted(&state, |activity| {
            activity.company_id() == company_id
        }))
    }
}
