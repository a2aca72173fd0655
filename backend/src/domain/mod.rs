//! Domain primitives, ports, and services.
//!
//! Purpose: define the user entity, the error taxonomy, and the use-cases the
//! HTTP adapter drives. Nothing here knows about Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a stable category.
//! - User / NewUser / UserId: the single persisted entity.
//! - UsersService: implements the driving ports over a repository.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId, UserValidationError};
pub use self::users_service::{USER_NOT_FOUND_MESSAGE, UsersService};
