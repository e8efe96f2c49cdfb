//! Startup configuration read from the process environment.

use std::env;
use std::net::SocketAddr;

use crate::error::Error;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads `PORT`, falling back to [`DEFAULT_PORT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if `PORT` is set but is not a valid TCP port.
    pub fn from_env() -> Result<Self, Error> {
        let port = parse_port(env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    /// Address on all interfaces for the configured port.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| Error::InvalidPort {
            value: value.to_string(),
        }),
    }
}
