//! Keyword-ladder intent classification.

use explorer_tools::{extract_address, extract_hash};

use crate::intent::IntentTag;

/// Fires when the text contains any word of `any` and any word of `with`.
struct KeywordRule {
    any: &'static [&'static str],
    with: &'static [&'static str],
    intent: IntentTag,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.any.iter().any(|k| lowered.contains(k))
            && self.with.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluated top to bottom; the first matching rule wins.
///
/// Keyword tests are plain substring tests on the lower-cased text, so
/// "eth" also matches inside "ethereum" and "tx" inside "context".
const RULES: &[KeywordRule] = &[
    KeywordRule {
        any: &["gas", "fee"],
        with: &["current", "price", "cost"],
        intent: IntentTag::GasFee,
    },
    KeywordRule {
        any: &["eth", "ethereum"],
        with: &["price", "current", "cost"],
        intent: IntentTag::EthPrice,
    },
    KeywordRule {
        any: &["balance", "how much"],
        with: &["wallet", "address", "eth"],
        intent: IntentTag::WalletBalance,
    },
    KeywordRule {
        any: &["transaction", "tx"],
        with: &["latest", "recent", "history"],
        intent: IntentTag::TransactionList,
    },
    KeywordRule {
        any: &["token", "erc"],
        with: &["interact", "transfer", "activity"],
        intent: IntentTag::TokenActivity,
    },
    KeywordRule {
        any: &["transaction", "tx"],
        with: &["confirm", "status", "success"],
        intent: IntentTag::TransactionStatus,
    },
    KeywordRule {
        any: &["contract"],
        with: &["verified", "source", "code"],
        intent: IntentTag::ContractVerification,
    },
    KeywordRule {
        any: &["network", "ethereum"],
        with: &["status", "stats", "performance"],
        intent: IntentTag::NetworkStatus,
    },
    KeywordRule {
        any: &["block", "height"],
        with: &["current", "latest", "number"],
        intent: IntentTag::BlockHeight,
    },
];

/// Map raw question text to an intent.
///
/// Keyword pairings take precedence over the bare presence of a hash or
/// address; a hash takes precedence over an address.
pub fn classify(text: &str) -> IntentTag {
    let lowered = text.to_lowercase();

    if let Some(rule) = RULES.iter().find(|rule| rule.matches(&lowered)) {
        return rule.intent;
    }

    if extract_hash(text).is_some() {
        return IntentTag::TransactionDetails;
    }

    if extract_address(text).is_some() {
        return IntentTag::WalletAnalysis;
    }

    IntentTag::General
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
    const ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

    #[test]
    fn test_each_rule() {
        let cases = [
            ("What's the current gas price?", IntentTag::GasFee),
            ("How much does ETH cost today", IntentTag::EthPrice),
            ("ethereum price please", IntentTag::EthPrice),
            ("What is the balance of my wallet", IntentTag::WalletBalance),
            ("show my recent transactions", IntentTag::TransactionList),
            ("any ERC20 transfers?", IntentTag::TokenActivity),
            ("did my tx confirm", IntentTag::TransactionStatus),
            ("is this contract verified", IntentTag::ContractVerification),
            ("network stats", IntentTag::NetworkStatus),
            ("latest block", IntentTag::BlockHeight),
            ("what is a blockchain?", IntentTag::General),
        ];

        for (text, expected) in cases {
            assert_eq!(classify(text), expected, "text: {:?}", text);
        }
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(classify("current gas block height"), IntentTag::GasFee);
        // rule 4 precedes rule 6
        assert_eq!(
            classify("recent transaction status"),
            IntentTag::TransactionList
        );
    }

    #[test]
    fn test_hash_without_keywords() {
        assert_eq!(
            classify(&format!("what happened here {}", HASH)),
            IntentTag::TransactionDetails
        );
    }

    #[test]
    fn test_address_without_keywords() {
        assert_eq!(
            classify(&format!("tell me about {}", ADDRESS)),
            IntentTag::WalletAnalysis
        );
    }

    #[test]
    fn test_hash_beats_address() {
        assert_eq!(
            classify(&format!("{} {}", ADDRESS, HASH)),
            IntentTag::TransactionDetails
        );
    }

    #[test]
    fn test_keywords_beat_entities() {
        assert_eq!(
            classify(&format!("status of transaction {}", HASH)),
            IntentTag::TransactionStatus
        );
        assert_eq!(
            classify(&format!("balance of wallet {}", ADDRESS)),
            IntentTag::WalletBalance
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("CURRENT GAS"), IntentTag::GasFee);
    }
}
