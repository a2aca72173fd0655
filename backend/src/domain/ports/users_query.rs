//! Driving port for user reads.
//!
//! HTTP handlers depend on this trait rather than on the persistence adapter,
//! so they can be exercised against in-memory doubles.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user. An empty store yields an empty list.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with `id`, or an [`crate::domain::ErrorCode::NotFound`] error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
