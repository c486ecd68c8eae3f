//! Balance query handlers.

use crate::cli::{BalanceArgs, BalancesArgs};
use crate::config::RpcEndpoint;
use crate::error::Result;
use crate::service::EthService;
use crate::units::{self, ETHER_DECIMALS};

/// Query and print the balance of a single address.
pub async fn execute(args: BalanceArgs) -> Result<()> {
    let endpoint = RpcEndpoint::resolve(args.rpc.as_deref())?;
    let service = EthService::connect(&endpoint);

    let wei = service.get_balance(&args.address).await?;

    if args.human_readable {
        println!("{} ETH", units::format_amount(wei, args.decimals)?);
    } else {
        println!("{wei} Wei");
    }

    Ok(())
}

/// Query each address independently and print one line per address.
///
/// A failure on one address is reported inline on that address's line and
/// does not abort the remaining queries or affect the exit code. Only a
/// failure before the loop starts (an unparseable RPC URL) is propagated.
pub async fn execute_many(args: BalancesArgs) -> Result<()> {
    let endpoint = RpcEndpoint::resolve(args.rpc.as_deref())?;
    let service = EthService::connect(&endpoint);

    for address in &args.addresses {
        let line = match service.get_balance(address).await {
            Ok(wei) if args.human_readable => {
                units::format_amount(wei, ETHER_DECIMALS).map(|eth| format!("{eth} ETH"))
            }
            Ok(wei) => Ok(format!("{wei} Wei")),
            Err(e) => Err(e),
        };

        match line {
            Ok(balance) => println!("{address}: {balance}"),
            Err(e) => eprintln!("{address}: Error - {e}"),
        }
    }

    Ok(())
}
