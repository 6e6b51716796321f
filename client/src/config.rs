//! Backend location for the request gateway.
//!
//! The base URL is baked into the WASM bundle at compile time from
//! `LIBRARY_API_URL`, the same way public front-end variables are. An
//! unset or empty value means same-origin relative paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the library backend lives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL, trimming trailing slashes.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Build the config from `LIBRARY_API_URL` captured at compile time.
    pub fn from_env() -> Self {
        Self::new(option_env!("LIBRARY_API_URL").unwrap_or_default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path (`/books/42`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
