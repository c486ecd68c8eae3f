//! RPC endpoint resolution.
//!
//! The endpoint is resolved once at startup, in priority order: explicit
//! `--rpc` argument, then the `ETHEREUM_RPC_URL` environment variable, then
//! the localhost default. The resolved URL is handed to
//! [`EthService`](crate::service::EthService) at construction so nothing
//! downstream reads the environment ad hoc.

use std::env;

use url::Url;

use crate::error::{Error, Result};

/// Fallback endpoint when neither `--rpc` nor the environment provides one.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545/";

/// Environment variable consulted when `--rpc` is not given.
pub const RPC_URL_ENV: &str = "ETHEREUM_RPC_URL";

/// A validated JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcEndpoint {
    url: Url,
}

impl RpcEndpoint {
    /// Resolve the endpoint from an optional explicit URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRpcUrl`] if the winning candidate does not
    /// parse as a URL.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        let raw = match explicit {
            Some(url) => url.to_string(),
            None => env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
        };

        let url = Url::parse(&raw).map_err(|source| Error::InvalidRpcUrl { url: raw, source })?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}
