//! Host startup and serving errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `[package.metadata.leptos]` is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// `LIBRARY_SITE_ADDR` is not a socket address.
    #[error("invalid {var}: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
