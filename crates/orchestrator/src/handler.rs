//! Intent dispatch to the explorer adapters.

use std::sync::Arc;

use explorer_tools::Explorer;
use tracing::debug;

use crate::intent::{Classification, IntentTag};
use crate::{scan, wallet};

pub const PROMPT_BALANCE_ADDRESS: &str = "Please provide a wallet address to check balance.";
pub const PROMPT_TRANSACTIONS_ADDRESS: &str =
    "Please provide a wallet address to view transactions.";
pub const PROMPT_TOKEN_ADDRESS: &str = "Please provide a wallet address to view token activity.";
pub const PROMPT_STATUS_HASH: &str = "Please provide a transaction hash to check status.";
pub const PROMPT_DETAILS_HASH: &str = "Please provide a valid transaction hash.";
pub const PROMPT_CONTRACT_ADDRESS: &str =
    "Please provide a contract address to check verification status.";
pub const PROMPT_ANALYSIS_ADDRESS: &str =
    "Please provide a wallet address for comprehensive analysis.";

/// Produces data-backed text for a classified question.
///
/// An empty string means "nothing to say", which is always the case for
/// [`IntentTag::General`] and may happen when every adapter behind an
/// intent came back empty.
#[derive(Clone)]
pub struct IntentHandler {
    explorer: Arc<Explorer>,
}

impl IntentHandler {
    pub fn new(explorer: Arc<Explorer>) -> Self {
        Self { explorer }
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Run the branch for `query.intent`.
    pub async fn handle(&self, query: &Classification) -> String {
        debug!("Handling intent {}", query.intent);
        let explorer = self.explorer.as_ref();
        let address = query.address.as_deref();
        let hash = query.hash.as_deref();

        match query.intent {
            IntentTag::GasFee => explorer.gas_price_text().await,
            IntentTag::EthPrice => explorer.eth_price_text().await,
            IntentTag::WalletBalance => match address {
                Some(address) => {
                    let mainnet = explorer.registry().mainnet();
                    let balance = explorer.network_balance(mainnet, address).await;
                    format!(
                        "**{} Balance for {}:**\n• {} {}",
                        balance.currency, address, balance.balance, balance.currency
                    )
                }
                None => PROMPT_BALANCE_ADDRESS.to_string(),
            },
            IntentTag::TransactionList => match address {
                Some(address) => explorer.transactions_text(address).await,
                None => PROMPT_TRANSACTIONS_ADDRESS.to_string(),
            },
            IntentTag::TokenActivity => match address {
                Some(address) => explorer.token_transfers_text(address).await,
                None => PROMPT_TOKEN_ADDRESS.to_string(),
            },
            IntentTag::TransactionStatus => match hash {
                Some(hash) => format!(
                    "**Transaction Status for {}:**\n• Status: {}",
                    hash,
                    explorer.receipt_status(hash).await
                ),
                None => PROMPT_STATUS_HASH.to_string(),
            },
            IntentTag::TransactionDetails => match hash {
                Some(hash) => scan::transaction_details_text(explorer, hash).await,
                None => PROMPT_DETAILS_HASH.to_string(),
            },
            IntentTag::ContractVerification => match address {
                Some(address) => {
                    let (info, supply) = futures::join!(
                        explorer.contract_info_text(address),
                        explorer.token_supply_text(address),
                    );
                    join_present(&[info, supply], "\n")
                }
                None => PROMPT_CONTRACT_ADDRESS.to_string(),
            },
            IntentTag::NetworkStatus => {
                let (stats, gas) =
                    futures::join!(explorer.network_stats_text(), explorer.gas_price_text());
                join_present(&[stats, gas], "\n\n")
            }
            IntentTag::BlockHeight => {
                let (heights, latest) =
                    futures::join!(explorer.block_heights_text(), explorer.latest_block_text());
                join_present(&[heights, latest], "\n\n")
            }
            IntentTag::WalletAnalysis => match address {
                Some(address) => wallet::analyze_wallet(explorer, address).await,
                None => PROMPT_ANALYSIS_ADDRESS.to_string(),
            },
            IntentTag::General => String::new(),
        }
    }
}

fn join_present(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_tools::{ExplorerClient, Network, NetworkRegistry};
    use std::time::Duration;

    /// Explorer pointed at a closed port; any adapter call would fail fast.
    fn offline_handler() -> IntentHandler {
        let registry =
            NetworkRegistry::new(Network::new("ethereum", "Ethereum Mainnet", "ETH", "http://127.0.0.1:9"));
        let client = ExplorerClient::new(Duration::from_millis(200)).unwrap();
        IntentHandler::new(Arc::new(Explorer::new(registry, client)))
    }

    #[test]
    fn test_join_present() {
        let parts = ["a".to_string(), " ".to_string(), "b".to_string()];
        assert_eq!(join_present(&parts, "\n\n"), "a\n\nb");
        assert_eq!(join_present(&[String::new()], "\n"), "");
    }

    #[tokio::test]
    async fn test_prompts_without_entities() {
        let handler = offline_handler();
        let cases = [
            ("what is my wallet balance", PROMPT_BALANCE_ADDRESS),
            ("show recent transactions", PROMPT_TRANSACTIONS_ADDRESS),
            ("token transfer activity", PROMPT_TOKEN_ADDRESS),
            ("did the tx confirm", PROMPT_STATUS_HASH),
            ("is the contract source verified", PROMPT_CONTRACT_ADDRESS),
        ];

        for (text, prompt) in cases {
            let query = Classification::from_text(text);
            assert_eq!(handler.handle(&query).await, prompt, "text: {:?}", text);
        }
    }

    #[tokio::test]
    async fn test_prompts_for_forced_intents() {
        let handler = offline_handler();
        let details = Classification {
            intent: IntentTag::TransactionDetails,
            hash: None,
            address: None,
        };
        assert_eq!(handler.handle(&details).await, PROMPT_DETAILS_HASH);

        let analysis = Classification {
            intent: IntentTag::WalletAnalysis,
            hash: None,
            address: None,
        };
        assert_eq!(handler.handle(&analysis).await, PROMPT_ANALYSIS_ADDRESS);
    }

    #[tokio::test]
    async fn test_general_is_empty() {
        let handler = offline_handler();
        let query = Classification::from_text("what is a blockchain?");
        assert_eq!(handler.handle(&query).await, "");
    }
}
