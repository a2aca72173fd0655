//! User domain service.
//!
//! Implements the driving ports on top of a [`UserRepository`] and folds
//! persistence failures into the domain [`Error`] taxonomy:
//!
//! - a missing row becomes [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
//!   with the fixed message `User not found`;
//! - connection and query faults become internal errors carrying the raw
//!   fault text, unredacted.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, ErrorCode, NewUser, User, UserId};

/// Message returned when a lookup matches no row.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

// Used only when a driver reports a fault with no text.
const STORE_FAULT_FALLBACK_MESSAGE: &str = "database error";

/// User service implementing [`UsersCommand`] and [`UsersQuery`].
pub struct UsersService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UsersService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UsersService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    debug!(%error, "user repository call failed");
    match error {
        UserPersistenceError::NotFound { .. } => Error::not_found(USER_NOT_FOUND_MESSAGE),
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            Error::try_new(ErrorCode::InternalError, message)
                .unwrap_or_else(|_| Error::internal(STORE_FAULT_FALLBACK_MESSAGE))
        }
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, user: &NewUser) -> Result<(), Error> {
        self.repository
            .insert(user)
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}
