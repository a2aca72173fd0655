//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. These
//! wrappers mirror their wire shape and live in the inbound adapter, where
//! framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-generated identifier.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ada")]
    firstname: String,
    #[schema(example = "Lovelace")]
    lastname: String,
}

/// OpenAPI schema for [`crate::domain::NewUser`].
#[derive(ToSchema)]
#[schema(as = NewUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewUserSchema {
    #[schema(example = "Jane")]
    firstname: String,
    #[schema(example = "Doe")]
    lastname: String,
}

/// OpenAPI schema for the create-user success envelope.
///
/// The generated identifier is not part of this payload.
#[derive(ToSchema)]
#[schema(as = CreatedUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreatedUserSchema {
    success: NewUserSchema,
}

/// OpenAPI schema for [`crate::inbound::http::error::ErrorBody`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message; store faults are passed through verbatim.
    #[schema(example = "User not found")]
    error: String,
}
