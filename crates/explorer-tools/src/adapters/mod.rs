//! Data source adapters, grouped by explorer module.
//!
//! - [`gas`] - gas oracle
//! - [`price`] - ETH spot price
//! - [`account`] - balances, transaction lists, token and NFT transfers
//! - [`contract`] - verified source metadata and token supply
//! - [`transaction`] - receipt status, transaction by hash, transaction count
//! - [`stats`] - network statistics
//! - [`block`] - live block heights and block-by-number

pub mod account;
pub mod block;
pub mod contract;
pub mod gas;
pub mod price;
pub mod stats;
pub mod transaction;

use tracing::{debug, warn};

use crate::error::ExplorerError;

/// Balance shown when a network's balance could not be read.
pub const ZERO_BALANCE: &str = "0.000000";

/// Shown for receipt status and transaction count when unavailable.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel texts for adapters that report which stage failed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sentinels {
    /// Non-2xx response.
    pub http_status: &'static str,
    /// Envelope status mismatch, missing result or bad payload.
    pub envelope: &'static str,
    /// No response at all.
    pub transport: &'static str,
}

impl Sentinels {
    pub(crate) fn pick(&self, err: &ExplorerError) -> &'static str {
        match err {
            ExplorerError::Transport(_) => self.transport,
            ExplorerError::HttpStatus(_) => self.http_status,
            _ => self.envelope,
        }
    }
}

/// Log a failure that a text adapter is about to replace with its sentinel.
///
/// Empty-result envelopes are routine (an address with no NFTs), so only
/// transport and HTTP failures are logged as warnings.
pub(crate) fn log_swallowed(adapter: &str, network_id: &str, err: &ExplorerError) {
    if err.is_transport() || err.is_http_status() {
        warn!("{} on {} failed: {}", adapter, network_id, err);
    } else {
        debug!("{} on {} returned no data: {}", adapter, network_id, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_pick() {
        let sentinels = Sentinels {
            http_status: "http",
            envelope: "envelope",
            transport: "transport",
        };
        assert_eq!(sentinels.pick(&ExplorerError::HttpStatus(500)), "http");
        assert_eq!(sentinels.pick(&ExplorerError::MissingResult), "envelope");
        assert_eq!(
            sentinels.pick(&ExplorerError::StatusMismatch {
                status: "0".into(),
                message: "NOTOK".into()
            }),
            "envelope"
        );
    }
}
