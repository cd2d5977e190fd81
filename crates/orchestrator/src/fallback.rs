//! Canned replies used when the model backend cannot answer.

use std::time::Duration;

use rand::Rng;

pub const WALLET_RESPONSE: &str = "A wallet address is a public address on the Ethereum \
blockchain. You can explore it using blockchain explorers to see: transaction history, token \
balances, NFT holdings, smart contract interactions, and total value. However, you cannot see \
the private key or personal information of the wallet owner.";

pub const WEB3_RESPONSE: &str = "Web3 refers to the next generation of the internet built on \
blockchain technology. Key differences from Web2: decentralization (no single controlling \
entity), user ownership of data and assets, built-in payments via cryptocurrencies, smart \
contracts for automated agreements, and permissionless innovation. Benefits include reduced \
censorship, better privacy control, and new economic models.";

pub const BLOCKCHAIN_RESPONSE: &str = "**How to Submit a Transaction to a Blockchain**

**1. Connect to a Wallet**
• Choose a crypto wallet (e.g., MetaMask, Phantom, Keplr)
• Make sure it supports the blockchain you're working on (e.g., Ethereum, Solana, Cosmos)

**2. Prepare the Transaction**
• Define:
  - Recipient address (where you're sending tokens/data)
  - Amount of tokens
  - Optional data (e.g., smart contract call or memo)

**3. Set Gas Fee (for EVM chains)**
• Choose between:
  - Low (cheaper, slower confirmation)
  - Medium (balanced)
  - High (faster, more expensive)
• Tools like Etherscan Gas Tracker help decide a fair gas price

**4. Sign the Transaction**
• Your wallet will prompt you to sign the transaction
• This uses your private key to authorize it (without revealing the key)

**5. Broadcast the Transaction**
• Once signed, the transaction is sent to the blockchain node (via RPC)
• It's now in the mempool (waiting area)

**6. Wait for Confirmation**
• Miners/validators pick it up, include it in a block, and confirm it
• You'll receive a transaction hash you can use to track status";

pub const DEFAULT_RESPONSE: &str = "Great question about blockchain technology! The blockchain \
is a distributed ledger that records transactions across multiple computers. Key concepts \
include decentralization, cryptographic security, consensus mechanisms, and immutability. Each \
block contains transaction data, timestamp, and a hash of the previous block, creating an \
unbreakable chain of records.";

/// Pick a canned reply by keyword, first match wins.
pub fn canned_response(text: &str) -> &'static str {
    let lowered = text.to_lowercase();

    if lowered.contains("wallet") || lowered.contains("address") {
        WALLET_RESPONSE
    } else if lowered.contains("web3") {
        WEB3_RESPONSE
    } else if ["submit", "gas", "confirm"].iter().any(|k| lowered.contains(k)) {
        BLOCKCHAIN_RESPONSE
    } else {
        DEFAULT_RESPONSE
    }
}

/// Uniform random delay in `[min, max]`. Returns `min` when the range is empty.
pub fn fallback_delay(min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_table() {
        assert_eq!(canned_response("check my WALLET"), WALLET_RESPONSE);
        assert_eq!(canned_response("what address should I use"), WALLET_RESPONSE);
        assert_eq!(canned_response("explain web3"), WEB3_RESPONSE);
        assert_eq!(canned_response("how do I submit this"), BLOCKCHAIN_RESPONSE);
        assert_eq!(canned_response("why won't it confirm"), BLOCKCHAIN_RESPONSE);
        assert_eq!(canned_response("hello"), DEFAULT_RESPONSE);
        assert_eq!(canned_response(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_wallet_beats_web3() {
        assert_eq!(canned_response("web3 wallet"), WALLET_RESPONSE);
    }

    #[test]
    fn test_fallback_delay_range() {
        let min = Duration::from_millis(10);
        let max = Duration::from_millis(20);
        for _ in 0..50 {
            let delay = fallback_delay(min, max);
            assert!(delay >= min && delay <= max);
        }
        assert_eq!(fallback_delay(Duration::ZERO, Duration::ZERO), Duration::ZERO);
        assert_eq!(fallback_delay(max, min), max);
    }
}
