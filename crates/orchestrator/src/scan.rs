//! Cross-network transaction lookup.

use explorer_tools::units::{group_thousands, hex_quantity_to_decimal, wei_to_ether, wei_to_gwei};
use explorer_tools::{
    Explorer, ExplorerError, Network, NetworkRegistry, ReceiptStatus, TransactionInfo,
    TransactionReceipt, ZERO_BALANCE,
};
use tracing::{debug, info};

/// A transaction found on one network.
#[derive(Debug, Clone)]
pub struct TransactionMatch {
    pub network: Network,
    pub transaction: TransactionInfo,
    /// Absent while the transaction is pending or when the receipt call failed.
    pub receipt: Option<TransactionReceipt>,
}

impl TransactionMatch {
    /// Execution outcome according to the receipt.
    pub fn status(&self) -> ReceiptStatus {
        match &self.receipt {
            Some(receipt) if receipt.succeeded() => ReceiptStatus::Successful,
            Some(_) => ReceiptStatus::Failed,
            None => ReceiptStatus::Unknown,
        }
    }
}

/// Query each network in registry order; the first one that knows the hash wins.
///
/// Networks are tried one at a time so that the winner is always the
/// earliest registered network holding the transaction.
pub async fn find_transaction(explorer: &Explorer, hash: &str) -> Option<TransactionMatch> {
    for network in explorer.registry().iter() {
        let transaction = match explorer.fetch_transaction(network, hash).await {
            Ok(transaction) => transaction,
            Err(ExplorerError::MissingResult) => {
                debug!("{} not on {}", hash, network.id);
                continue;
            }
            Err(err) => {
                debug!("Lookup of {} on {} failed: {}", hash, network.id, err);
                continue;
            }
        };

        info!("Found transaction {} on {}", hash, network.display_name);
        let receipt = match explorer.fetch_transaction_receipt(network, hash).await {
            Ok(receipt) => Some(receipt),
            Err(err) => {
                debug!("Receipt for {} on {} unavailable: {}", hash, network.id, err);
                None
            }
        };

        return Some(TransactionMatch {
            network: network.clone(),
            transaction,
            receipt,
        });
    }

    None
}

/// Message used when no network knows the hash.
pub fn not_found_text(hash: &str, registry: &NetworkRegistry) -> String {
    format!(
        "Transaction hash {} not found on any supported Ethereum networks ({}). \
         Please verify the hash is correct or the transaction might be on a different network.",
        hash,
        registry.short_names()
    )
}

fn grouped_quantity(hex: &str) -> Option<String> {
    hex_quantity_to_decimal(hex).map(|decimal| group_thousands(&decimal))
}

/// Render a found transaction as a detailed report.
pub fn format_transaction_details(hash: &str, found: &TransactionMatch) -> String {
    let tx = &found.transaction;
    let network = &found.network;
    let currency = &network.currency_symbol;

    let block_number = tx
        .block_number
        .as_deref()
        .and_then(grouped_quantity)
        .unwrap_or_else(|| "Pending".to_string());
    let block_hash = tx.block_hash.as_deref().unwrap_or("Pending");
    let to = tx.to.as_deref().unwrap_or("Contract Creation");
    let value = hex_quantity_to_decimal(&tx.value)
        .and_then(|wei| wei_to_ether(&wei))
        .unwrap_or_else(|| ZERO_BALANCE.to_string());
    let gas_limit = grouped_quantity(&tx.gas).unwrap_or_else(|| tx.gas.clone());
    let gas_used = found
        .receipt
        .as_ref()
        .and_then(|receipt| grouped_quantity(&receipt.gas_used))
        .unwrap_or_else(|| "N/A".to_string());
    let gas_price = tx
        .gas_price
        .as_deref()
        .and_then(hex_quantity_to_decimal)
        .and_then(|wei| wei_to_gwei(&wei))
        .unwrap_or_else(|| "N/A".to_string());
    let nonce = grouped_quantity(&tx.nonce).unwrap_or_else(|| tx.nonce.clone());
    let status = found.status();

    let value_sentence = if value == ZERO_BALANCE {
        "This appears to be a contract interaction or token transfer with no native currency value."
            .to_string()
    } else {
        format!("{} {} was transferred.", value, currency)
    };
    let outcome = match status {
        ReceiptStatus::Successful => "completed successfully",
        ReceiptStatus::Failed => "failed",
        ReceiptStatus::Unknown => "has not been confirmed yet",
    };

    format!(
        "**Transaction Details for {hash}**\n\n\
         **Network:** {network}\n\n\
         **Block Information:**\n\
         • Block Number: {block_number}\n\
         • Block Hash: {block_hash}\n\n\
         **Transaction Details:**\n\
         • From: {from}\n\
         • To: {to}\n\
         • Value: {value} {currency}\n\
         • Gas Limit: {gas_limit}\n\
         • Gas Used: {gas_used}\n\
         • Gas Price: {gas_price} Gwei\n\
         • Nonce: {nonce}\n\
         • Status: {status}\n\n\
         **Analysis:**\n\
         This transaction occurred on {network} at block {block_number}. {value_sentence} \
         The transaction {outcome} and used {gas_used} gas out of the {gas_limit} gas limit.\n\n\
         You can view more details including token transfers and logs on the respective explorer.",
        network = network.display_name,
        from = tx.from,
    )
}

/// Scan all networks for `hash` and render the outcome.
pub async fn transaction_details_text(explorer: &Explorer, hash: &str) -> String {
    match find_transaction(explorer, hash).await {
        Some(found) => format_transaction_details(hash, &found),
        None => not_found_text(hash, explorer.registry()),
    }
}
