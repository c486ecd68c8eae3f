//! Command-line interface definitions.
//!
//! The `balance` and `balances` subcommands claim `-h` for
//! `--human-readable`, so those two disable the short help flag and keep
//! `--help` long-only.

pub mod balance;
pub mod chain;
pub mod wallet;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// ethcli - query Ethereum balances and manage wallets.
#[derive(Parser, Debug)]
#[command(name = "ethcli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the ETH balance of an address
    #[command(visible_alias = "bal")]
    Balance(BalanceArgs),

    /// Query ETH balances for multiple addresses
    #[command(visible_alias = "bals")]
    Balances(BalancesArgs),

    /// Print the current block number
    BlockNumber(RpcArgs),

    /// Print the transaction count for an address
    #[command(visible_alias = "nonce")]
    TxCount(TxCountArgs),

    /// Create a new wallet, optionally encrypted as a V3 keystore
    #[command(visible_alias = "wallet")]
    CreateWallet(CreateWalletArgs),
}

/// Arguments for the `balance` subcommand.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct BalanceArgs {
    /// Ethereum address to query
    pub address: String,

    /// RPC endpoint URL (ETHEREUM_RPC_URL is used if not provided)
    #[arg(short, long)]
    pub rpc: Option<String>,

    /// Display the balance in ETH instead of Wei
    #[arg(short = 'h', long)]
    pub human_readable: bool,

    /// Number of decimals for human-readable formatting
    #[arg(short, long, default_value_t = 18)]
    pub decimals: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Arguments for the `balances` subcommand.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct BalancesArgs {
    /// Ethereum addresses to query
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// RPC endpoint URL (ETHEREUM_RPC_URL is used if not provided)
    #[arg(short, long)]
    pub rpc: Option<String>,

    /// Display balances in ETH instead of Wei
    #[arg(short = 'h', long)]
    pub human_readable: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Shared arguments for commands that only need an endpoint.
#[derive(Parser, Debug)]
pub struct RpcArgs {
    /// RPC endpoint URL (ETHEREUM_RPC_URL is used if not provided)
    #[arg(short, long)]
    pub rpc: Option<String>,
}

/// Arguments for the `tx-count` subcommand.
#[derive(Parser, Debug)]
pub struct TxCountArgs {
    /// Ethereum address to query
    pub address: String,

    /// RPC endpoint URL (ETHEREUM_RPC_URL is used if not provided)
    #[arg(short, long)]
    pub rpc: Option<String>,
}

/// Arguments for the `create-wallet` subcommand.
#[derive(Parser, Debug)]
pub struct CreateWalletArgs {
    /// Output file path (default: wallet/wallet_<random>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Password to encrypt the wallet; stored unencrypted if omitted
    #[arg(short, long)]
    pub password: Option<String>,
}
