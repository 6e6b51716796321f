//! Host configuration parsed from the environment and Cargo metadata.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::config::{LeptosOptions, get_configuration};

use crate::error::ServerError;

/// Overrides the bind address from `[package.metadata.leptos] site-addr`.
pub const SITE_ADDR_ENV: &str = "LIBRARY_SITE_ADDR";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub site_addr: SocketAddr,
    pub leptos_options: LeptosOptions,
}

impl ServerConfig {
    /// Build config from Leptos metadata plus environment overrides.
    ///
    /// Optional:
    /// - `LIBRARY_SITE_ADDR`: bind address, e.g. `0.0.0.0:8080`
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or the
    /// address override does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let site_addr = parse_site_addr(std::env::var(SITE_ADDR_ENV).ok().as_deref(), leptos_options.site_addr)?;
        Ok(Self { site_addr, leptos_options })
    }
}

/// Resolve the bind address; a blank override keeps `default`.
pub fn parse_site_addr(raw: Option<&str>, default: SocketAddr) -> Result<SocketAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::InvalidAddr { var: SITE_ADDR_ENV, value: value.to_owned() }),
    }
}
