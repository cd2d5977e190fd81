//! Account module adapters: balances, transactions, token and NFT transfers.

use futures::future::join_all;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{log_swallowed, Sentinels, ZERO_BALANCE};
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;
use crate::units::{group_thousands, wei_to_ether};

const TRANSACTION_SENTINELS: Sentinels = Sentinels {
    http_status: "Unable to fetch transactions",
    envelope: "No transactions found",
    transport: "Error fetching transactions",
};

/// Transactions rendered in a transaction list.
const LISTED_TRANSACTIONS: usize = 5;

/// Distinct tokens named in a token-activity line.
const LISTED_TOKENS: usize = 8;

/// One network's balance for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkBalance {
    pub network_name: String,
    pub currency: String,
    /// Ether amount with 6 fractional digits.
    pub balance: String,
}

impl NetworkBalance {
    /// Whether the balance is strictly positive.
    pub fn has_funds(&self) -> bool {
        self.balance.bytes().any(|b| matches!(b, b'1'..=b'9'))
    }
}

/// A normal transaction as listed by `account/txlist`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSummary {
    pub hash: String,
    /// Value in wei.
    pub value: String,
    pub block_number: String,
}

/// An ERC-20 transfer as listed by `account/tokentx`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub contract_address: String,
    pub token_symbol: String,
}

/// Format up to five transactions.
pub fn format_transactions(transactions: &[TxSummary], currency: &str) -> String {
    let lines: Vec<String> = transactions
        .iter()
        .take(LISTED_TRANSACTIONS)
        .map(|tx| {
            let short_hash = tx.hash.get(..10).unwrap_or(&tx.hash);
            let value = wei_to_ether(&tx.value).unwrap_or_else(|| ZERO_BALANCE.to_string());
            format!(
                "• {}... | {} {} | Block {}",
                short_hash,
                value,
                currency,
                group_thousands(&tx.block_number)
            )
        })
        .collect();
    format!("**Recent Transactions:**\n{}", lines.join("\n"))
}

/// Summarize token transfers by distinct contract, in first-seen order.
pub fn format_token_activity(transfers: &[TokenTransfer]) -> String {
    let mut unique: IndexMap<&str, &str> = IndexMap::new();
    for transfer in transfers {
        unique
            .entry(transfer.contract_address.as_str())
            .or_insert(transfer.token_symbol.as_str());
    }

    let named: Vec<&str> = unique.values().take(LISTED_TOKENS).copied().collect();
    let mut line = format!("**Token Activity:** Interacted with {}", named.join(", "));
    if unique.len() > LISTED_TOKENS {
        line.push_str(&format!(" and {} more tokens", unique.len() - LISTED_TOKENS));
    }
    line
}

impl Explorer {
    /// `account/balance` in wei.
    pub async fn fetch_balance(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<String, ExplorerError> {
        self.client
            .call_as(
                network,
                "account",
                "balance",
                &[("address", address), ("tag", "latest")],
            )
            .await
    }

    /// Balance on one network, zero if it could not be read.
    pub async fn network_balance(&self, network: &Network, address: &str) -> NetworkBalance {
        let balance = match self.fetch_balance(network, address).await {
            Ok(wei) => wei_to_ether(&wei).unwrap_or_else(|| ZERO_BALANCE.to_string()),
            Err(e) => {
                log_swallowed("balance", &network.id, &e);
                ZERO_BALANCE.to_string()
            }
        };

        NetworkBalance {
            network_name: network.display_name.clone(),
            currency: network.currency_symbol.clone(),
            balance,
        }
    }

    /// Balance on every registered network, concurrently, in registry order.
    pub async fn balances(&self, address: &str) -> Vec<NetworkBalance> {
        join_all(
            self.registry
                .iter()
                .map(|network| self.network_balance(network, address)),
        )
        .await
    }

    /// `account/txlist`, newest first.
    pub async fn fetch_transactions(
        &self,
        network: &Network,
        address: &str,
        page: u32,
        offset: u32,
    ) -> Result<Vec<TxSummary>, ExplorerError> {
        let page = page.to_string();
        let offset = offset.to_string();
        self.client
            .call_as(
                network,
                "account",
                "txlist",
                &[
                    ("address", address),
                    ("startblock", "0"),
                    ("endblock", "99999999"),
                    ("page", page.as_str()),
                    ("offset", offset.as_str()),
                    ("sort", "desc"),
                ],
            )
            .await
    }

    /// Recent mainnet transactions, or a sentinel.
    pub async fn transactions_text(&self, address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_transactions(mainnet, address, 1, 10).await {
            Ok(txs) if !txs.is_empty() => format_transactions(&txs, &mainnet.currency_symbol),
            Ok(_) => TRANSACTION_SENTINELS.envelope.to_string(),
            Err(e) => {
                log_swallowed("transaction list", &mainnet.id, &e);
                TRANSACTION_SENTINELS.pick(&e).to_string()
            }
        }
    }

    /// `account/txlistinternal`.
    pub async fn fetch_internal_transactions(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<Value>, ExplorerError> {
        self.client
            .call_as(
                network,
                "account",
                "txlistinternal",
                &[
                    ("address", address),
                    ("startblock", "0"),
                    ("endblock", "99999999"),
                    ("page", "1"),
                    ("offset", "10"),
                    ("sort", "desc"),
                ],
            )
            .await
    }

    /// Mainnet internal transaction summary, or empty.
    pub async fn internal_transactions_text(&self, address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_internal_transactions(mainnet, address).await {
            Ok(txs) if !txs.is_empty() => format!(
                "**Internal Transactions:** {} contract interactions found",
                txs.len()
            ),
            Ok(_) => String::new(),
            Err(e) => {
                log_swallowed("internal transactions", &mainnet.id, &e);
                String::new()
            }
        }
    }

    /// `account/tokentx`.
    pub async fn fetch_token_transfers(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<TokenTransfer>, ExplorerError> {
        self.client
            .call_as(
                network,
                "account",
                "tokentx",
                &[
                    ("address", address),
                    ("page", "1"),
                    ("offset", "20"),
                    ("sort", "desc"),
                ],
            )
            .await
    }

    /// Mainnet token activity summary, or empty.
    pub async fn token_transfers_text(&self, address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_token_transfers(mainnet, address).await {
            Ok(transfers) if !transfers.is_empty() => format_token_activity(&transfers),
            Ok(_) => String::new(),
            Err(e) => {
                log_swallowed("token transfers", &mainnet.id, &e);
                String::new()
            }
        }
    }

    /// `account/tokennfttx`.
    pub async fn fetch_nft_transfers(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<Vec<Value>, ExplorerError> {
        self.client
            .call_as(
                network,
                "account",
                "tokennfttx",
                &[
                    ("address", address),
                    ("page", "1"),
                    ("offset", "10"),
                    ("sort", "desc"),
                ],
            )
            .await
    }

    /// Mainnet NFT activity summary, or empty.
    pub async fn nft_transfers_text(&self, address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_nft_transfers(mainnet, address).await {
            Ok(transfers) if !transfers.is_empty() => {
                format!("**NFT Activity:** {} NFT transfers found", transfers.len())
            }
            Ok(_) => String::new(),
            Err(e) => {
                log_swallowed("nft transfers", &mainnet.id, &e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(contract: &str, symbol: &str) -> TokenTransfer {
        TokenTransfer {
            contract_address: contract.to_string(),
            token_symbol: symbol.to_string(),
        }
    }

    #[test]
    fn test_format_transactions_caps_at_five() {
        let txs: Vec<TxSummary> = (0..7)
            .map(|i| TxSummary {
                hash: format!("0xabcdef0123456789{}", i),
                value: "1500000000000000000".to_string(),
                block_number: "19000000".to_string(),
            })
            .collect();

        let text = format_transactions(&txs, "ETH");
        assert!(text.starts_with("**Recent Transactions:**\n"));
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("• 0xabcdef01... | 1.500000 ETH | Block 19,000,000"));
    }

    #[test]
    fn test_token_activity_dedupes_by_contract() {
        let transfers = vec![
            transfer("0x1", "USDC"),
            transfer("0x2", "DAI"),
            transfer("0x1", "USDC"),
        ];
        assert_eq!(
            format_token_activity(&transfers),
            "**Token Activity:** Interacted with USDC, DAI"
        );
    }

    #[test]
    fn test_token_activity_overflow() {
        let transfers: Vec<TokenTransfer> = (0..10)
            .map(|i| transfer(&format!("0x{}", i), &format!("T{}", i)))
            .collect();
        assert_eq!(
            format_token_activity(&transfers),
            "**Token Activity:** Interacted with T0, T1, T2, T3, T4, T5, T6, T7 and 2 more tokens"
        );
    }

    #[test]
    fn test_has_funds() {
        let balance = |b: &str| NetworkBalance {
            network_name: "Ethereum Mainnet".to_string(),
            currency: "ETH".to_string(),
            balance: b.to_string(),
        };
        assert!(!balance(ZERO_BALANCE).has_funds());
        assert!(balance("0.000001").has_funds());
        assert!(balance("12.500000").has_funds());
    }
}
