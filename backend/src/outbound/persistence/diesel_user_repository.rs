//! PostgreSQL-backed `UserRepository` implementation using Diesel.
//!
//! Every method checks out its own pooled connection and runs exactly one
//! parameterised statement. The connection guard is dropped when the method
//! returns, handing the connection back to the pool on success and failure
//! alike. Fault text from the driver is preserved so callers can surface it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    debug!(%error, "user repository connection checkout failed");
    match error {
        PoolError::Checkout { message } => UserPersistenceError::connection(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection(error.to_string())
        }
        other => UserPersistenceError::query(other.to_string()),
    }
}

fn map_lookup_error(id: UserId, error: diesel::result::Error) -> UserPersistenceError {
    match error {
        diesel::result::Error::NotFound => UserPersistenceError::not_found(id),
        other => map_diesel_error(other),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            firstname: user.firstname(),
            lastname: user.lastname(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: UserRow = users::table
            .filter(users::id.eq(id.as_i32()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .map_err(|err| map_lookup_error(id, err))?;

        Ok(User::from(row))
    }
}
