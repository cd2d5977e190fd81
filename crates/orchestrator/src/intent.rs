//! Intent tags and extracted entities.

use std::fmt;

use explorer_tools::{extract_address, extract_hash};
use serde::{Deserialize, Serialize};

use crate::classifier::classify;

/// The classified purpose of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    GasFee,
    EthPrice,
    WalletBalance,
    TransactionList,
    TokenActivity,
    TransactionStatus,
    TransactionDetails,
    ContractVerification,
    NetworkStatus,
    BlockHeight,
    WalletAnalysis,
    General,
}

impl IntentTag {
    /// Snake-case name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GasFee => "gas_fee",
            Self::EthPrice => "eth_price",
            Self::WalletBalance => "wallet_balance",
            Self::TransactionList => "transaction_list",
            Self::TokenActivity => "token_activity",
            Self::TransactionStatus => "transaction_status",
            Self::TransactionDetails => "transaction_details",
            Self::ContractVerification => "contract_verification",
            Self::NetworkStatus => "network_status",
            Self::BlockHeight => "block_height",
            Self::WalletAnalysis => "wallet_analysis",
            Self::General => "general",
        }
    }

    /// The entity this intent cannot be answered without, if any.
    pub fn required_entity(&self) -> Option<EntityKind> {
        match self {
            Self::WalletBalance
            | Self::TransactionList
            | Self::TokenActivity
            | Self::ContractVerification
            | Self::WalletAnalysis => Some(EntityKind::Address),
            Self::TransactionStatus | Self::TransactionDetails => Some(EntityKind::Hash),
            Self::GasFee
            | Self::EthPrice
            | Self::NetworkStatus
            | Self::BlockHeight
            | Self::General => None,
        }
    }
}

impl fmt::Display for IntentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entity pulled from a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Hash,
    Address,
}

/// A hash or address found in a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub kind: EntityKind,
    pub value: String,
}

/// Everything the handler needs to know about one question.
///
/// At most one hash and one address are kept: the first of each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub intent: IntentTag,
    pub hash: Option<String>,
    pub address: Option<String>,
}

impl Classification {
    /// Classify `text` and extract its entities.
    pub fn from_text(text: &str) -> Self {
        Self {
            intent: classify(text),
            hash: extract_hash(text).map(str::to_string),
            address: extract_address(text).map(str::to_string),
        }
    }

    /// Extracted entities, hash first.
    pub fn entities(&self) -> Vec<ExtractedEntity> {
        let hash = self.hash.iter().map(|value| ExtractedEntity {
            kind: EntityKind::Hash,
            value: value.clone(),
        });
        let address = self.address.iter().map(|value| ExtractedEntity {
            kind: EntityKind::Address,
            value: value.clone(),
        });
        hash.chain(address).collect()
    }

    /// Whether the entity the intent needs was found.
    pub fn has_required_entity(&self) -> bool {
        match self.intent.required_entity() {
            Some(EntityKind::Hash) => self.hash.is_some(),
            Some(EntityKind::Address) => self.address.is_some(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
    const ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

    #[test]
    fn test_intent_serializes_snake_case() {
        let json = serde_json::to_string(&IntentTag::ContractVerification).unwrap();
        assert_eq!(json, "\"contract_verification\"");
        assert_eq!(IntentTag::GasFee.to_string(), "gas_fee");
    }

    #[test]
    fn test_classification_entities() {
        let c = Classification::from_text(&format!("did {} come from {}?", HASH, ADDRESS));
        assert_eq!(c.intent, IntentTag::TransactionDetails);
        assert_eq!(
            c.entities(),
            vec![
                ExtractedEntity {
                    kind: EntityKind::Hash,
                    value: HASH.to_string()
                },
                ExtractedEntity {
                    kind: EntityKind::Address,
                    value: ADDRESS.to_string()
                },
            ]
        );
    }

    #[test]
    fn test_required_entity() {
        let c = Classification::from_text("what is my wallet balance?");
        assert_eq!(c.intent, IntentTag::WalletBalance);
        assert!(!c.has_required_entity());

        let c = Classification::from_text("current gas price");
        assert!(c.has_required_entity());
    }
}
