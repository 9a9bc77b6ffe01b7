//! Runtime settings. Defaults are fixed here; each can be overridden from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Title reported by `/api/version` and the OpenAPI document.
pub const API_TITLE: &str = "CRUD API";
pub const API_VERSION: &str = "1.0.0";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://sql_app.db";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// The single origin allowed to make cross-origin requests.
    pub allowed_origin: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read `ITEMS_DATABASE_URL`, `ITEMS_ALLOWED_ORIGIN` and `ITEMS_BIND_ADDR`, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("ITEMS_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let allowed_origin = lookup("ITEMS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into());
        let bind = lookup("ITEMS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;
        Ok(AppConfig {
            database_url,
            allowed_origin,
            bind_addr,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}
