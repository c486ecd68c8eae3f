//! Chain state query handlers.

use crate::cli::{RpcArgs, TxCountArgs};
use crate::config::RpcEndpoint;
use crate::error::Result;
use crate::service::EthService;

/// Print the current block number.
pub async fn execute_block_number(args: RpcArgs) -> Result<()> {
    let endpoint = RpcEndpoint::resolve(args.rpc.as_deref())?;
    let service = EthService::connect(&endpoint);

    let block = service.get_current_block().await?;
    println!("{block}");

    Ok(())
}

/// Print the transaction count for an address.
pub async fn execute_tx_count(args: TxCountArgs) -> Result<()> {
    let endpoint = RpcEndpoint::resolve(args.rpc.as_deref())?;
    let service = EthService::connect(&endpoint);

    let count = service.get_transaction_count(&args.address).await?;
    println!("{count}");

    Ok(())
}
