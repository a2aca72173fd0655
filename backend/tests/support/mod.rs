//! Shared fixtures for HTTP integration tests.
//!
//! The app comes from the same factory the server uses, with an in-memory
//! repository standing in for PostgreSQL.

use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use users_api::app::build_app;
use users_api::domain::ports::{UserPersistenceError, UserRepository};
use users_api::domain::{NewUser, User, UserId, UsersService};
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::state::HttpState;

#[derive(Default)]
struct Table {
    rows: Vec<User>,
    next_id: i32,
}

/// Repository backed by a vector, assigning ids from 1 like a `SERIAL`.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<Mutex<Table>>,
    unavailable: Option<String>,
}

impl InMemoryUserRepository {
    /// A repository whose every call fails as if the store were unreachable.
    pub fn unavailable(message: &str) -> Self {
        Self {
            table: Arc::default(),
            unavailable: Some(message.to_owned()),
        }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.table.lock().expect("table lock").rows.len()
    }

    fn check_available(&self) -> Result<(), UserPersistenceError> {
        match &self.unavailable {
            Some(message) => Err(UserPersistenceError::connection(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<(), UserPersistenceError> {
        self.check_available()?;
        let mut table = self.table.lock().expect("table lock");
        table.next_id += 1;
        let id = UserId::new(table.next_id);
        table
            .rows
            .push(User::new(id, user.firstname(), user.lastname()));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.check_available()?;
        Ok(self.table.lock().expect("table lock").rows.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError> {
        self.check_available()?;
        self.table
            .lock()
            .expect("table lock")
            .rows
            .iter()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or_else(|| UserPersistenceError::not_found(id))
    }
}

/// Build the full application over `repository`.
pub fn app(
    repository: InMemoryUserRepository,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = Arc::new(UsersService::new(Arc::new(repository)));
    let health = HealthState::new();
    health.mark_ready();
    build_app(
        web::Data::new(health),
        web::Data::new(HttpState::new(service.clone(), service)),
    )
}
