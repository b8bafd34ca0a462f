//! Server configuration loaded from the environment at startup.
//!
//! `PORT` (default `3000`) and `BIND_ADDR` (default `0.0.0.0`) choose the
//! listen address. Log filtering is read separately from `RUST_LOG`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr { value: String, source: AddrParseError },
    #[error("{name} is not valid unicode")]
    NotUnicode { name: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `PORT` and `BIND_ADDR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(read_var("PORT")?, read_var("BIND_ADDR")?)
    }

    /// Build a config from raw values; `None` or blank falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value is unparseable.
    pub fn from_values(port: Option<String>, bind_addr: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = port.filter(|v| !v.trim().is_empty()) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?;
        }
        if let Some(raw) = bind_addr.filter(|v| !v.trim().is_empty()) {
            config.bind_addr = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value: raw.clone(), source })?;
        }

        Ok(config)
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Read an environment variable, treating an unset one as `None`.
pub(crate) fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { name }),
    }
}
