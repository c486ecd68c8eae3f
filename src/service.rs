//! RPC-backed account queries and wallet operations.
//!
//! [`EthService`] bridges typed domain values and a remote JSON-RPC endpoint.
//! Addresses are validated before any network call, provider failures are
//! translated into [`Error::Rpc`] with the operation context, and nothing is
//! retried: a failed call surfaces immediately to the caller.

use std::path::Path;

use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use tracing::debug;

use crate::config::RpcEndpoint;
use crate::error::{Error, Result};
use crate::wallet::{EncryptedKeystore, Wallet};

/// Validate an Ethereum address string.
///
/// Accepts `0x` + 40 hex digits that are either uniformly cased or carry a
/// valid EIP-55 mixed-case checksum. Anything else fails with
/// [`Error::InvalidAddress`] without touching the network.
pub fn validate_address(input: &str) -> Result<Address> {
    let invalid = || Error::InvalidAddress {
        address: input.to_string(),
    };

    let digits = input.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        // Mixed case must be a valid EIP-55 checksum.
        Address::parse_checksummed(input, None).map_err(|_| invalid())
    } else {
        input.parse().map_err(|_| invalid())
    }
}

/// Stateless facade over a JSON-RPC provider.
pub struct EthService {
    provider: DynProvider,
}

impl EthService {
    /// Build a service over the resolved endpoint. The provider handle is
    /// constructed once here and is the only state the service holds.
    pub fn connect(endpoint: &RpcEndpoint) -> Self {
        let provider = ProviderBuilder::new()
            .connect_http(endpoint.url().clone())
            .erased();
        Self { provider }
    }

    /// Get the balance of an address in wei.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddress`] if the address fails validation;
    /// [`Error::Rpc`] on transport failure.
    pub async fn get_balance(&self, address: &str) -> Result<U256> {
        let address = validate_address(address)?;
        debug!(%address, "eth_getBalance");

        self.provider
            .get_balance(address)
            .await
            .map_err(|e| Error::Rpc {
                operation: format!("get balance for {address}"),
                reason: e.to_string(),
            })
    }

    /// Get the current block number.
    ///
    /// # Errors
    ///
    /// [`Error::Rpc`] on transport failure.
    pub async fn get_current_block(&self) -> Result<u64> {
        debug!("eth_blockNumber");

        self.provider
            .get_block_number()
            .await
            .map_err(|e| Error::Rpc {
                operation: "get current block".to_string(),
                reason: e.to_string(),
            })
    }

    /// Get the transaction count (nonce) of an address.
    ///
    /// # Errors
    ///
    /// Same contract as [`EthService::get_balance`].
    pub async fn get_transaction_count(&self, address: &str) -> Result<u64> {
        let address = validate_address(address)?;
        debug!(%address, "eth_getTransactionCount");

        self.provider
            .get_transaction_count(address)
            .await
            .map_err(|e| Error::Rpc {
                operation: format!("get transaction count for {address}"),
                reason: e.to_string(),
            })
    }

    /// Create a fresh wallet. Purely local; the provider is not consulted.
    pub fn create_wallet(&self) -> Result<Wallet> {
        Wallet::generate()
    }

    /// Create a fresh wallet and encrypt it into a V3 keystore file at
    /// `dir/file_name` using `password` as the KDF input.
    ///
    /// Password strength is intentionally not enforced here; the CLI warns
    /// the user instead of blocking.
    pub fn encrypt_wallet(
        &self,
        password: &str,
        dir: &Path,
        file_name: &str,
    ) -> Result<EncryptedKeystore> {
        let wallet = Wallet::generate()?;
        wallet.encrypt_to_keystore(dir, password, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-55 test vector.
    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn accepts_checksummed_address() {
        assert!(validate_address(CHECKSUMMED).is_ok());
    }

    #[test]
    fn accepts_uniform_case_addresses() {
        let lower = CHECKSUMMED.to_lowercase();
        assert!(validate_address(&lower).is_ok());

        let upper = format!("0x{}", CHECKSUMMED[2..].to_uppercase());
        assert!(validate_address(&upper).is_ok());
    }

    #[test]
    fn checksummed_and_lowercase_parse_to_same_address() {
        let a = validate_address(CHECKSUMMED).unwrap();
        let b = validate_address(&CHECKSUMMED.to_lowercase()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_checksum() {
        // Lowercase one checksummed letter.
        let tampered = CHECKSUMMED.replace("aAeb", "aaeb");
        assert!(matches!(
            validate_address(&tampered),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(matches!(
            validate_address(&CHECKSUMMED[2..]),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe"),
            Err(Error::InvalidAddress { .. })
        ));
        assert!(matches!(
            validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed00"),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(matches!(
            validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeg"),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_address_fails_before_transport() {
        // An endpoint that cannot be reached; validation must fail first.
        let endpoint = RpcEndpoint::resolve(Some("http://127.0.0.1:1/")).unwrap();
        let service = EthService::connect(&endpoint);

        let err = service.get_balance("0xnotanaddress").await.unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));

        let err = service
            .get_transaction_count("0xnotanaddress")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_rpc_error() {
        let endpoint = RpcEndpoint::resolve(Some("http://127.0.0.1:1/")).unwrap();
        let service = EthService::connect(&endpoint);

        let err = service.get_balance(CHECKSUMMED).await.unwrap_err();
        match err {
            Error::Rpc { operation, .. } => {
                assert!(operation.contains(CHECKSUMMED));
            }
            other => panic!("expected Rpc error, got {other:?}"),
        }
    }
}
