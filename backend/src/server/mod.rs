//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
pub(crate) use metrics::build_metrics;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};

use users_api::app::build_app;
use users_api::domain::UsersService;
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::persistence::DieselUserRepository;

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let service = Arc::new(UsersService::new(Arc::new(DieselUserRepository::new(
        db_pool,
    ))));
    let http_state = web::Data::new(HttpState::new(service.clone(), service));

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
