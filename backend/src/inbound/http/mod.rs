//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::{Scope, web};

pub use error::{ApiResult, ErrorBody};

/// Versioned API scope with every users route registered.
///
/// Callers attach [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
}
