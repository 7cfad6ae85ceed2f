//! Server configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected a number between 0 and 65535")]
    InvalidPort { value: String },

    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
}

/// Where to listen and where the datasets and assets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// JSON array of towns (`FUEL_FINDER_TOWNS`)
    pub towns_path: PathBuf,
    /// JSON array of stations (`FUEL_FINDER_STATIONS`)
    pub stations_path: PathBuf,
    /// Directory served under `/static` (`FUEL_FINDER_STATIC`)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("HOST") {
            config.host = value
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?;
        }
        if let Some(value) = lookup("PORT") {
            config.port = value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?;
        }
        if let Some(path) = lookup("FUEL_FINDER_TOWNS") {
            config.towns_path = path.into();
        }
        if let Some(path) = lookup("FUEL_FINDER_STATIONS") {
            config.stations_path = path.into();
        }
        if let Some(path) = lookup("FUEL_FINDER_STATIC") {
            config.static_dir = path.into();
        }

        Ok(config)
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            towns_path: crate_dir.join("data").join("mass_towns.json"),
            stations_path: crate_dir.join("data").join("stations_db.json"),
            static_dir: crate_dir.join("public"),
        }
    }
}
