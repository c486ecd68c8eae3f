//! Wallet creation handler.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use alloy_primitives::hex;
use tracing::debug;

use crate::cli::CreateWalletArgs;
use crate::config::RpcEndpoint;
use crate::error::Result;
use crate::service::EthService;
use crate::wallet::WalletFile;

/// Directory used when no explicit output path is given.
const DEFAULT_WALLET_DIR: &str = "wallet";

/// Create a new wallet and write it to disk.
///
/// With `--password` the wallet is encrypted into a standard V3 keystore.
/// Without it the private key and mnemonic are written in plain JSON and a
/// warning is printed; the write is intentionally not blocked.
pub async fn execute_create(args: CreateWalletArgs) -> Result<()> {
    let endpoint = RpcEndpoint::resolve(None)?;
    let service = EthService::connect(&endpoint);

    let (dir, file_name) = resolve_output(args.output.as_deref())?;
    fs::create_dir_all(&dir)?;

    if let Some(password) = args.password.as_deref() {
        println!("Creating encrypted wallet...");
        let keystore = service.encrypt_wallet(password, &dir, &file_name)?;

        println!("Encrypted wallet saved to: {}", keystore.path.display());
        println!("Address: {}", keystore.address);
    } else {
        println!("Creating unencrypted wallet...");
        let wallet = service.create_wallet()?;

        let path = dir.join(&file_name);
        fs::write(&path, serde_json::to_string_pretty(&WalletFile::new(&wallet))?)?;
        debug!(path = %path.display(), "wallet written");

        println!("Wallet saved to: {}", path.display());
        println!("Address: {}", wallet.address());
        println!("Private Key: {}", wallet.private_key_hex());
        println!("Mnemonic: {}", wallet.mnemonic());
        println!();
        println!("WARNING: Private key and mnemonic are saved in the file. Keep it secure!");
    }

    Ok(())
}

/// Split the output option into a directory and file name, generating a
/// random `wallet_<8 hex>.json` name under `wallet/` when none is given.
fn resolve_output(output: Option<&Path>) -> Result<(PathBuf, String)> {
    match output {
        Some(path) => {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
                })?
                .to_string();

            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };

            Ok((dir, file_name))
        }
        None => {
            let suffix = hex::encode(rand::random::<[u8; 4]>());
            Ok((
                PathBuf::from(DEFAULT_WALLET_DIR),
                format!("wallet_{suffix}.json"),
            ))
        }
    }
}
