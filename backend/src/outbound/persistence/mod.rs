//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations of domain ports, backed by PostgreSQL through
//! `diesel-async` with `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Scoped connections**: each repository call checks out one connection
//!   and returns it to the pool when the call completes.
//!
//! # Example
//!
//! ```no_run
//! use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() {
//! let pool = DbPool::lazy(PoolConfig::new("postgres://localhost/users"));
//! let repository = DieselUserRepository::new(pool);
//! # let _ = repository;
//! # }
//! ```

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
