//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_command: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from the command and query ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use users_api::domain::UsersService;
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::persistence::DieselUserRepository;
    ///
    /// fn wire(repository: DieselUserRepository) -> HttpState {
    ///     let service = Arc::new(UsersService::new(Arc::new(repository)));
    ///     HttpState::new(service.clone(), service)
    /// }
    /// ```
    pub fn new(users_command: Arc<dyn UsersCommand>, users_query: Arc<dyn UsersQuery>) -> Self {
        Self {
            users_command,
            users_query,
        }
    }
}
