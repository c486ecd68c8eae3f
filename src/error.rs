use thiserror::Error;

/// Errors surfaced by the service and CLI layers.
///
/// Address and amount validation happen before any network traffic, so
/// `InvalidAddress` and `ParseAmount` never carry a transport cause. `Rpc`
/// wraps the provider failure together with the operation that triggered it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid Ethereum address: {address}")]
    InvalidAddress { address: String },

    #[error("failed to {operation}: {reason}")]
    Rpc { operation: String, reason: String },

    #[error("invalid amount '{input}': {reason}")]
    ParseAmount { input: String, reason: String },

    #[error("could not generate wallet key material: {reason}")]
    KeyGen { reason: String },

    #[error("failed to encrypt keystore: {0}")]
    Keystore(String),

    #[error("invalid RPC URL '{url}': {source}")]
    InvalidRpcUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
