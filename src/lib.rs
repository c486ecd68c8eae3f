//! ethcli - query Ethereum balances and manage wallets.
//!
//! A thin orchestration layer over the alloy crates: account queries go
//! through a JSON-RPC provider, wallet generation and keystore encryption are
//! delegated to the signer library. This crate contributes the seams between
//! them: address validation, exact wei/decimal conversion, and translation of
//! provider failures into matchable error kinds.
//!
//! # Modules
//!
//! - [`cli`] - clap command definitions and handlers
//! - [`config`] - RPC endpoint resolution (argument > environment > default)
//! - [`error`] - error kinds for the crate
//! - [`service`] - RPC-backed queries and wallet operations
//! - [`units`] - fixed-point wei/decimal conversion
//! - [`wallet`] - wallet generation and on-disk shapes

pub mod cli;
pub mod config;
pub mod error;
pub mod service;
pub mod units;
pub mod wallet;
