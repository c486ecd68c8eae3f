use clap::Parser;
use ethcli::cli::{balance, chain, wallet, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Balance(args) => balance::execute(args).await,
        Commands::Balances(args) => balance::execute_many(args).await,
        Commands::BlockNumber(args) => chain::execute_block_number(args).await,
        Commands::TxCount(args) => chain::execute_tx_count(args).await,
        Commands::CreateWallet(args) => wallet::execute_create(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` overrides the
/// quiet default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
