//! Users API library modules.
//!
//! Hexagonal layout: [`domain`] holds the entity, ports, and service;
//! [`inbound::http`] adapts Actix requests onto the driving ports;
//! [`outbound::persistence`] implements the repository port with Diesel.

pub mod app;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
