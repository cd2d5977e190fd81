//! Multi-network wallet analysis.

use std::panic::AssertUnwindSafe;

use explorer_tools::Explorer;
use futures::FutureExt;
use tracing::{info, warn};

use crate::report::{SectionKind, WalletReport};

/// Text returned when gathering the wallet data fails outright.
pub fn wallet_apology(address: &str) -> String {
    format!(
        "Sorry, I couldn't fetch balance information for wallet {}. This might be due to \
         network issues or an invalid wallet address. Please verify the address and try again.",
        address
    )
}

/// Fetch balances on every network plus mainnet activity and build the report.
///
/// Individual adapter failures only drop their section; the apology is
/// returned only if the gather itself panics.
pub async fn analyze_wallet(explorer: &Explorer, address: &str) -> String {
    match AssertUnwindSafe(build_report(explorer, address))
        .catch_unwind()
        .await
    {
        Ok(report) => report.render(),
        Err(_) => {
            warn!("Wallet analysis for {} aborted", address);
            wallet_apology(address)
        }
    }
}

/// Gather all sections for `address`.
pub async fn build_report(explorer: &Explorer, address: &str) -> WalletReport {
    info!("Analyzing wallet {}", address);

    let (balances, transactions, internal, tokens, nfts, contract, risk) = futures::join!(
        explorer.balances(address),
        explorer.transactions_text(address),
        explorer.internal_transactions_text(address),
        explorer.token_transfers_text(address),
        explorer.nft_transfers_text(address),
        explorer.contract_info_text(address),
        explorer.risk().insights_text(address),
    );

    let count = explorer.transaction_count_text(address).await;
    let mainnet = explorer.registry().mainnet();
    let mainnet_balance = balances.iter().find(|b| b.network_name == mainnet.display_name);

    WalletReport::new(address)
        .balances(&balances)
        .section(SectionKind::Transactions, transactions)
        .section(SectionKind::InternalTransactions, internal)
        .section(SectionKind::TokenActivity, tokens)
        .section(SectionKind::NftActivity, nfts)
        .section(SectionKind::ContractInfo, contract)
        .transaction_summary(&count, &mainnet.display_name)
        .overview(mainnet_balance)
        .section(SectionKind::RiskInsights, risk)
        .explorer_link(address)
}
