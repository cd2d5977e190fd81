//! Prompt fingerprinting, so logs can say which system prompt was in effect
//! without printing it.

use sha2::{Digest, Sha256};

/// Number of hex characters kept by [`hash_prompt`].
const FINGERPRINT_LEN: usize = 16;

/// Compute a stable, shortened SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
        .chars()
        .take(FINGERPRINT_LEN)
        .collect()
}
