//! `PostgreSQL` repository implementation for activity lifecycle storage.

use super::{
    models::{ActivityRow, NewActivityRow},
    schema::activities,
};
use crate::activity::{
    domain::{Activity, ActivityId, ActivityStatus, PersistedActivityData, StatusHistoryEntry},
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};
use crate::directory::domain::{CompanyId, UserId};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by activity adapters.
pub type ActivityPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed activity repository.
///
/// Every mutation is a single statement against one row, which is the
/// document-level atomicity the port contract relies on: concurrent writers
/// against the same activity serialize at the row, and the history payload
/// is replaced wholesale with exactly one appended entry per call.
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pool: ActivityPgPool,
}

impl PostgresActivityRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ActivityPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ActivityRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ActivityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ActivityRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ActivityRepositoryError::persistence)?
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn store(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let activity_id = activity.id();
        let new_row = to_new_row(activity)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(activities::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ActivityRepositoryError::DuplicateActivity(activity_id)
                    }
                    _ => ActivityRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let activity_id = activity.id();
        let history = history_to_value(activity.status_history())?;
        let status = activity.status().as_str().to_owned();
        let assigned_to = activity.assigned_to().as_str().to_owned();
        let start_time = activity.start_time();
        let end_time = activity.end_time();
        let is_active = activity.is_active();
        let updated_at = activity.updated_at();

        self.run_blocking(move |connection| {
            let updated_rows = diesel::update(
                activities::table.filter(activities::id.eq(activity_id.into_inner())),
            )
            .set((
                activities::status.eq(status),
                activities::assigned_to.eq(assigned_to),
                activities::start_time.eq(start_time),
                activities::end_time.eq(end_time),
                activities::status_history.eq(history),
                activities::is_active.eq(is_active),
                activities::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(ActivityRepositoryError::persistence)?;

            if updated_rows == 0 {
                return Err(ActivityRepositoryError::NotFound(activity_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ActivityId) -> ActivityRepositoryResult<Option<Activity>> {
        self.run_blocking(move |connection| {
            let row = activities::table
                .filter(activities::id.eq(id.into_inner()))
                .filter(activities::is_active.eq(true))
                .select(ActivityRow::as_select())
                .first::<ActivityRow>(connection)
                .optional()
                .map_err(ActivityRepositoryError::persistence)?;
            row.map(row_to_activity).transpose()
        })
        .await
    }

    async fn find_pending_by_user(
        &self,
        user_id: &UserId,
    ) -> ActivityRepositoryResult<Vec<Activity>> {
        let assignee = user_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = activities::table
                .filter(activities::assigned_to.eq(&assignee))
                .filter(activities::status.eq(ActivityStatus::Pending.as_str()))
                .filter(activities::is_active.eq(true))
                .order(activities::created_at.desc())
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(ActivityRepositoryError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }

    async fn find_by_user(&self, user_id: &UserId) -> ActivityRepositoryResult<Vec<Activity>> {
        let assignee = user_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = activities::table
                .filter(activities::assigned_to.eq(&assignee))
                .filter(activities::is_active.eq(true))
                .order(activities::created_at.desc())
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(ActivityRepositoryError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }

    async fn find_by_company(
        &self,
        company_id: &CompanyId,
    ) -> ActivityRepositoryResult<Vec<Activity>> {
        let company = company_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = activities::table
                .filter(activities::company_id.eq(&company))
                .filter(activities::is_active.eq(true))
                .order(activities::created_at.desc())
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(ActivityRepositoryError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }
}

fn history_to_value(history: &[StatusHistoryEntry]) -> ActivityRepositoryResult<serde_json::Value> {
    serde_json::to_value(history).map_err(ActivityRepositoryError::persistence)
}

fn to_new_row(activity: &Activity) -> ActivityRepositoryResult<NewActivityRow> {
    Ok(NewActivityRow {
        id: activity.id().into_inner(),
        company_id: activity.company_id().as_str().to_owned(),
        title: activity.title().to_owned(),
        description: activity.description().map(str::to_owned),
        status: activity.status().as_str().to_owned(),
        assigned_to: activity.assigned_to().as_str().to_owned(),
        created_by: activity.created_by().as_str().to_owned(),
        start_time: activity.start_time(),
        end_time: activity.end_time(),
        status_history: history_to_value(activity.status_history())?,
        is_active: activity.is_active(),
        created_at: activity.created_at(),
        updated_at: activity.updated_at(),
    })
}

fn row_to_activity(row: ActivityRow) -> ActivityRepositoryResult<Activity> {
    let ActivityRow {
        id,
        company_id,
        title,
        description,
        status: persisted_status,
        assigned_to,
        created_by,
        start_time,
        end_time,
        status_history: persisted_history,
        is_active,
        created_at,
        updated_at,
    } = row;

    let status = ActivityStatus::try_from(persisted_status.as_str())
        .map_err(ActivityRepositoryError::persistence)?;
    let status_history = serde_json::from_value::<Vec<StatusHistoryEntry>>(persisted_history)
        .map_err(ActivityRepositoryError::persistence)?;

    let data = PersistedActivityData {
        id: ActivityId::from_uuid(id),
        company_id: CompanyId::new(company_id).map_err(ActivityRepositoryError::persistence)?,
        title,
        description,
        status,
        assigned_to: UserId::new(assigned_to).map_err(ActivityRepositoryError::persistence)?,
        created_by: UserId::new(created_by).map_err(ActivityRepositoryError::persistence)?,
        start_time,
        end_time,
        status_history,
        is_active,
        created_at,
        updated_at,
    };
    Ok(Activity::from_persisted(data))
}
