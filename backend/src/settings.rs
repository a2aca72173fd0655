//! Process configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `USERS_API_*` environment variables, and
//! config files. A `.env` file in the working directory is applied first
//! without overriding variables that are already set.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors raised while resolving startup configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Sources could not be read or merged.
    #[error("failed to load configuration: {message}")]
    Load { message: String },
    /// The database connection string was not supplied.
    #[error("database URL is not configured; set USERS_API_DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Configuration values for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Listen address.
    pub host: Option<IpAddr>,
    /// Listen port.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Seconds to wait for a pooled connection before failing the request.
    #[ortho_config(default = 30)]
    pub pool_connection_timeout_secs: u64,
}

impl AppSettings {
    /// Apply `.env` and load settings from the process arguments and
    /// environment.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        load_dotenv();
        Self::load().map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Return the database connection string.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingDatabaseUrl`] when unset or blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Pool settings for the configured database.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingDatabaseUrl`] when no URL is set.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(Duration::from_secs(self.pool_connection_timeout_secs)))
    }
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => debug!(error = %err, "ignoring unreadable .env file"),
    }
}
