//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every users route, the health checks, and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document backs Swagger
//! UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{CreatedUserSchema, ErrorSchema, NewUserSchema, UserSchema};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create, list, and fetch users stored in PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        NewUserSchema,
        CreatedUserSchema,
        ErrorSchema,
        CreateUserRequest
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
