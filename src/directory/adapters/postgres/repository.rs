//! `PostgreSQL` directory implementation for tenant-scoped user lookup.

use super::{models::UserRow, schema::users};
use crate::directory::{
    domain::{CompanyId, UserId, UserRecord, UserRole},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user directory.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: DirectoryPgPool,
}

impl PostgresUserDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryError::persistence)?
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_id_and_company(
        &self,
        user_id: &UserId,
        company_id: &CompanyId,
    ) -> DirectoryResult<Option<UserRecord>> {
        let lookup_user = user_id.as_str().to_owned();
        let lookup_company = company_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(&lookup_user))
                .filter(users::company_id.eq(&lookup_company))
                .filter(users::is_active.eq(true))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }
}

fn row_to_record(row: UserRow) -> DirectoryResult<UserRecord> {
    let id = UserId::new(row.id).map_err(DirectoryError::persistence)?;
    let company_id = CompanyId::new(row.company_id).map_err(DirectoryError::persistence)?;
    let role = UserRole::try_from(row.role.as_str()).map_err(DirectoryError::persistence)?;
    UserRecord::new(id, company_id, row.display_name, role).map_err(DirectoryError::persistence)
}
