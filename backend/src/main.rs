//! Users API entry point: loads configuration, builds the pool, and serves
//! the REST endpoints.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::DbPool;
use users_api::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env()?;
    // A missing connection string halts startup before anything binds.
    let pool_config = settings.pool_config()?;
    let bind_addr = settings.bind_addr();
    let db_pool = DbPool::lazy(pool_config);

    let config = ServerConfig::new(bind_addr, db_pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    info!(%bind_addr, "users API listening");
    server.await.wrap_err("server terminated with an error")
}
