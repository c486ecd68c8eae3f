//! Wallet generation and persistence shapes.
//!
//! A [`Wallet`] is ephemeral: generated fresh per invocation from a random
//! BIP-39 mnemonic, optionally encrypted into a standard V3 keystore, written
//! once, then dropped. Nothing here is cached or reused across invocations.

use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::{hex, Address};
use alloy_signer_local::coins_bip39::{English, Mnemonic};
use alloy_signer_local::{MnemonicBuilder, PrivateKeySigner};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

const MNEMONIC_WORDS: usize = 12;

/// A freshly generated keypair with its mnemonic phrase.
pub struct Wallet {
    signer: PrivateKeySigner,
    mnemonic: String,
}

impl Wallet {
    /// Generate a new wallet from a random 12-word mnemonic, derived at the
    /// standard Ethereum path m/44'/60'/0'/0/0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyGen`] if mnemonic generation or key derivation
    /// fails. An empty phrase from the library is treated as fatal.
    pub fn generate() -> Result<Self> {
        let mut rng = OsRng;
        let mnemonic =
            Mnemonic::<English>::new_with_count(&mut rng, MNEMONIC_WORDS).map_err(|e| {
                Error::KeyGen {
                    reason: e.to_string(),
                }
            })?;

        let phrase = mnemonic.to_phrase();
        if phrase.is_empty() {
            return Err(Error::KeyGen {
                reason: "mnemonic generation returned an empty phrase".to_string(),
            });
        }

        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.clone())
            .build()
            .map_err(|e| Error::KeyGen {
                reason: e.to_string(),
            })?;

        Ok(Self {
            signer,
            mnemonic: phrase,
        })
    }

    /// Checksummed address of the wallet.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Private key as a 0x-prefixed 64-hex-character string.
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signer.to_bytes()))
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Encrypt the private key into a V3 keystore file at `dir/file_name`.
    ///
    /// The scrypt/AES encryption and the keystore JSON shape come from the
    /// signer library; the file is persisted unmodified. The mnemonic is not
    /// stored in the keystore and cannot be recovered from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Keystore`] if encryption fails, or [`Error::Io`] if
    /// the written blob cannot be read back.
    pub fn encrypt_to_keystore(
        &self,
        dir: &Path,
        password: &str,
        file_name: &str,
    ) -> Result<EncryptedKeystore> {
        let mut rng = OsRng;
        let (signer, _uuid) = PrivateKeySigner::encrypt_keystore(
            dir,
            &mut rng,
            self.signer.to_bytes(),
            password,
            Some(file_name),
        )
        .map_err(|e| Error::Keystore(e.to_string()))?;

        let path = dir.join(file_name);
        let json = fs::read_to_string(&path)?;
        debug!(path = %path.display(), "keystore written");

        Ok(EncryptedKeystore {
            address: signer.address(),
            path,
            json,
        })
    }
}

/// An encrypted keystore written to disk.
pub struct EncryptedKeystore {
    /// Address of the encrypted key, for display.
    pub address: Address,
    /// Location of the keystore file.
    pub path: PathBuf,
    /// The raw keystore JSON blob as written.
    pub json: String,
}

/// On-disk shape of an unencrypted wallet file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletFile {
    pub address: String,
    pub private_key: String,
    pub mnemonic: String,
    pub created_at: DateTime<Utc>,
}

impl WalletFile {
    pub fn new(wallet: &Wallet) -> Self {
        Self {
            address: wallet.address().to_string(),
            private_key: wallet.private_key_hex(),
            mnemonic: wallet.mnemonic().to_string(),
            created_at: Utc::now(),
        }
    }
}
