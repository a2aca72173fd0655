//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser};

/// Domain use-case port for creating users.
///
/// Creation is not idempotent: submitting the same names twice stores two
/// rows with distinct identifiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a validated user.
    async fn create_user(&self, user: &NewUser) -> Result<(), Error>;
}
