//! User data model.
//!
//! A user is a store-assigned integer identifier plus a first and last name.
//! The store accepts any strings; the non-empty rule for names is enforced
//! here, before a write is attempted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier is not a base-10 integer.
    #[error("user id must be an integer")]
    InvalidId,
    /// The identifier is an integer no stored row can carry.
    #[error("user id {0} is outside the stored id range")]
    IdOutOfRange(i64),
    /// At least one of the name fields is the empty string.
    #[error("firstname and lastname must not be empty")]
    EmptyFields,
}

/// Store-generated user identifier.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// use users_api::domain::UserValidationError;
///
/// let id: UserId = "42".parse().expect("integer id");
/// assert_eq!(id.as_i32(), 42);
/// assert_eq!("abc".parse::<UserId>(), Err(UserValidationError::InvalidId));
/// assert_eq!(
///     "3000000000".parse::<UserId>(),
///     Err(UserValidationError::IdOutOfRange(3_000_000_000))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    /// Parses as a 64-bit integer first so that well-formed ids beyond the
    /// `SERIAL` range are told apart from text that is not a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wide = s
            .parse::<i64>()
            .map_err(|_| UserValidationError::InvalidId)?;
        i32::try_from(wide)
            .map(Self)
            .map_err(|_| UserValidationError::IdOutOfRange(wide))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names for a user that has not been persisted yet.
///
/// ## Invariants
/// - Neither `firstname` nor `lastname` is the empty string. Whitespace-only
///   names pass; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    firstname: String,
    lastname: String,
}

impl NewUser {
    /// Validate and construct a [`NewUser`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::{NewUser, UserValidationError};
    ///
    /// assert!(NewUser::try_new("Ada", "Lovelace").is_ok());
    /// assert_eq!(
    ///     NewUser::try_new("Ada", ""),
    ///     Err(UserValidationError::EmptyFields)
    /// );
    /// ```
    pub fn try_new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let firstname = firstname.into();
        let lastname = lastname.into();
        if firstname.is_empty() || lastname.is_empty() {
            return Err(UserValidationError::EmptyFields);
        }
        Ok(Self {
            firstname,
            lastname,
        })
    }

    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }
}

/// A persisted user.
///
/// Serialises as `{"id": 1, "firstname": "Ada", "lastname": "Lovelace"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    firstname: String,
    lastname: String,
}

impl User {
    /// Build a user from stored values.
    pub fn new(id: UserId, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }
}
