//! Run the read-only adapters against the configured explorer.
//!
//! Run with: cargo run -p explorer-tools --example live_adapters -- [address]
//!
//! Reads EXPLORER_API_KEY (and optional overrides) from .env.

use std::env;

use explorer_tools::Explorer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("explorer_tools=debug".parse()?),
        )
        .init();

    println!("=== Explorer Adapters ===\n");

    let explorer = Explorer::from_env()?;

    println!("Networks: {}\n", explorer.registry().short_names());

    println!("{}\n", explorer.gas_price_text().await);
    println!("{}\n", explorer.eth_price_text().await);
    println!("{}\n", explorer.network_stats_text().await);
    println!("{}\n", explorer.block_heights_text().await);

    if let Some(address) = env::args().nth(1) {
        println!("--- {} ---", address);
        for balance in explorer.balances(&address).await {
            println!("{}: {} {}", balance.network_name, balance.balance, balance.currency);
        }
        println!("\n{}", explorer.transactions_text(&address).await);
        println!("Total transactions: {}", explorer.transaction_count_text(&address).await);
    }

    println!("\n=== Done ===");
    Ok(())
}
