//! Users API handlers.
//!
//! ```text
//! POST   /api/v1/users        {"firstname":"Jane","lastname":"Doe"}
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}   (not implemented)
//! DELETE /api/v1/users/{id}   (not implemented)
//! ```
//!
//! Each handler produces exactly one response. Validation happens here,
//! before any store access: a request rejected with 400 or 422 never reaches
//! the repository.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Error, NewUser, USER_NOT_FOUND_MESSAGE, User, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CreatedUserSchema, ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Response message for a body that is not a JSON object of strings.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
/// Response message when either name is empty or missing.
pub const EMPTY_FIELDS_MESSAGE: &str = "Fields are empty";
/// Response message for a path id that is not an integer.
pub const INVALID_USER_ID_MESSAGE: &str = "Invalid user ID";
/// Response message for the update and delete placeholders.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented";

/// Request body for `POST /api/v1/users`.
///
/// Missing and `null` fields deserialise as `None` and are rejected as empty
/// rather than malformed.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Jane")]
    pub firstname: Option<String>,
    #[schema(example = "Doe")]
    pub lastname: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Self::try_new(
            value.firstname.unwrap_or_default(),
            value.lastname.unwrap_or_default(),
        )
    }
}

/// Success envelope for `POST /api/v1/users`: the submitted names, no id.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub success: NewUser,
}

fn malformed(err: &serde_json::Error) -> Error {
    debug!(error = %err, "rejecting malformed create-user body");
    Error::invalid_request(INVALID_INPUT_MESSAGE)
}

fn parse_create_request(body: &[u8]) -> ApiResult<NewUser> {
    // serde accepts a JSON array for a struct; only objects are valid here.
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|err| malformed(&err))?;
    if !value.is_object() {
        return Err(Error::invalid_request(INVALID_INPUT_MESSAGE));
    }
    let request: CreateUserRequest =
        serde_json::from_value(value).map_err(|err| malformed(&err))?;
    NewUser::try_from(request).map_err(|_| Error::unprocessable(EMPTY_FIELDS_MESSAGE))
}

fn parse_user_id(raw: &str) -> ApiResult<UserId> {
    raw.parse().map_err(|err| match err {
        // No SERIAL row can carry this id, so the lookup is answered here.
        UserValidationError::IdOutOfRange(id) => {
            debug!(id, "user id outside stored range");
            Error::not_found(USER_NOT_FOUND_MESSAGE)
        }
        _ => Error::invalid_request(INVALID_USER_ID_MESSAGE),
    })
}

/// Create a user.
///
/// The body is parsed by hand so that malformed JSON maps to the same
/// `{"error": ...}` envelope as every other failure, whatever the
/// `Content-Type` header says.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedUserSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 422, description = "Empty name fields", body = ErrorSchema),
        (status = 500, description = "Store fault", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let user = parse_create_request(&body)?;
    state.users_command.create_user(&user).await?;
    Ok(HttpResponse::Created().json(CreatedUser { success: user }))
}

/// List every stored user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Store fault", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Integer user identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user, including integers outside the id range", body = ErrorSchema),
        (status = 500, description = "Store fault", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(user))
}

/// Update a user. Declared for interface stability; always 501.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Integer user identifier")),
    responses((status = 501, description = "Not implemented", body = ErrorSchema)),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user() -> ApiResult<HttpResponse> {
    Err(Error::not_implemented(NOT_IMPLEMENTED_MESSAGE))
}

/// Delete a user. Declared for interface stability; always 501.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Integer user identifier")),
    responses((status = 501, description = "Not implemented", body = ErrorSchema)),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user() -> ApiResult<HttpResponse> {
    Err(Error::not_implemented(NOT_IMPLEMENTED_MESSAGE))
}
