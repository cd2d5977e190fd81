//! Hash and address extraction from free text.

use std::sync::OnceLock;

use regex::Regex;

/// Hex digits in a transaction hash.
pub const HASH_HEX_LEN: usize = 64;

/// Hex digits in an account address.
pub const ADDRESS_HEX_LEN: usize = 40;

fn hex_run() -> &'static Regex {
    static HEX_RUN: OnceLock<Regex> = OnceLock::new();
    HEX_RUN.get_or_init(|| Regex::new(r"0x[0-9a-fA-F]+").expect("hex run pattern is valid"))
}

/// First `0x`-prefixed hex run with exactly `digits` hex digits.
///
/// The whole run is measured, so a 64-digit hash never yields a 40-digit
/// address from its prefix.
fn first_run_of(text: &str, digits: usize) -> Option<&str> {
    hex_run()
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|run| run.len() == digits + 2)
}

/// Extract the first transaction hash (`0x` + 64 hex digits) from `text`.
pub fn extract_hash(text: &str) -> Option<&str> {
    first_run_of(text, HASH_HEX_LEN)
}

/// Extract the first account address (`0x` + 40 hex digits) from `text`.
pub fn extract_address(text: &str) -> Option<&str> {
    first_run_of(text, ADDRESS_HEX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
    const ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";

    #[test]
    fn test_extract_hash() {
        let text = format!("what happened in {}?", HASH);
        assert_eq!(extract_hash(&text), Some(HASH));
        assert_eq!(extract_address(&text), None);
    }

    #[test]
    fn test_extract_address_preserves_case() {
        let text = format!("check {} please", ADDRESS);
        assert_eq!(extract_address(&text), Some(ADDRESS));
        assert_eq!(extract_hash(&text), None);
    }

    #[test]
    fn test_first_match_wins() {
        let other = "0x0000000000000000000000000000000000000001";
        let text = format!("{} and {}", ADDRESS, other);
        assert_eq!(extract_address(&text), Some(ADDRESS));
    }

    #[test]
    fn test_both_kinds_present() {
        let text = format!("tx {} from {}", HASH, ADDRESS);
        assert_eq!(extract_hash(&text), Some(HASH));
        assert_eq!(extract_address(&text), Some(ADDRESS));
    }

    #[test]
    fn test_in_between_lengths_ignored() {
        let text = format!("0x{}", "a".repeat(50));
        assert_eq!(extract_hash(&text), None);
        assert_eq!(extract_address(&text), None);

        let too_long = format!("0x{}", "b".repeat(65));
        assert_eq!(extract_hash(&too_long), None);
    }

    #[test]
    fn test_no_prefix_no_match() {
        assert_eq!(extract_address(&"c".repeat(40)), None);
        assert_eq!(extract_hash(""), None);
    }
}
