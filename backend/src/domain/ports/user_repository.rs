//! Driven port for user persistence adapters and their errors.
//!
//! Each call acquires its own connection and releases it before returning,
//! whatever the outcome. Adapters never retry.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// A connection could not be acquired or was lost.
        Connection { message: String } => "user repository connection failed: {message}",
        /// No row matched the requested identifier.
        NotFound { id: UserId } => "user {id} not found",
        /// Query, mutation, or row decoding failed.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage operations over the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row; the store assigns the identifier.
    async fn insert(&self, user: &NewUser) -> Result<(), UserPersistenceError>;

    /// Fetch every row, in whatever order the store returns them.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch exactly one row by primary key.
    ///
    /// Returns [`UserPersistenceError::NotFound`] when no row matches.
    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError>;
}
