//! Composite wallet report assembled from independently fetched sections.

use std::collections::BTreeMap;

use explorer_tools::NetworkBalance;

/// Report sections, declared in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Header,
    Balances,
    Transactions,
    InternalTransactions,
    TokenActivity,
    NftActivity,
    ContractInfo,
    TransactionSummary,
    Overview,
    RiskInsights,
    ExplorerLink,
}

impl SectionKind {
    /// Activity sections are packed together with single line breaks.
    fn is_activity(self) -> bool {
        matches!(
            self,
            Self::Transactions
                | Self::InternalTransactions
                | Self::TokenActivity
                | Self::NftActivity
                | Self::ContractInfo
        )
    }
}

/// Builder for the wallet analysis report.
///
/// Sections can be supplied in any order; blank sections are dropped and
/// the rest are rendered in [`SectionKind`] order.
#[derive(Debug, Clone, Default)]
pub struct WalletReport {
    sections: BTreeMap<SectionKind, String>,
}

impl WalletReport {
    /// Start a report for `address`.
    pub fn new(address: &str) -> Self {
        Self::default().section(
            SectionKind::Header,
            format!("**Comprehensive Wallet Analysis for {}**", address),
        )
    }

    /// Set a section. Whitespace-only text clears it.
    pub fn section(mut self, kind: SectionKind, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            self.sections.remove(&kind);
        } else {
            self.sections.insert(kind, text);
        }
        self
    }

    /// One line per network, in the order given.
    pub fn balances(self, balances: &[NetworkBalance]) -> Self {
        let lines: Vec<String> = balances
            .iter()
            .map(|b| format!("**{}:** {} {}", b.network_name, b.balance, b.currency))
            .collect();
        if lines.is_empty() {
            return self;
        }
        self.section(
            SectionKind::Balances,
            format!("**Network Balances:**\n{}", lines.join("\n")),
        )
    }

    pub fn transaction_summary(self, count: &str, network_name: &str) -> Self {
        self.section(
            SectionKind::TransactionSummary,
            format!(
                "**Transaction Summary:**\n• Total Transactions: {} ({})",
                count, network_name
            ),
        )
    }

    /// Closing paragraph based on the mainnet balance.
    pub fn overview(self, mainnet: Option<&NetworkBalance>) -> Self {
        let funds = match mainnet {
            Some(b) if b.has_funds() => format!(
                "The wallet has {} {} on {}.",
                b.balance, b.currency, b.network_name
            ),
            Some(b) => format!(
                "The wallet appears to have minimal activity on {}.",
                b.network_name
            ),
            None => "The wallet appears to have minimal activity.".to_string(),
        };
        self.section(
            SectionKind::Overview,
            format!(
                "**Wallet Overview:**\nThis wallet address has balances across multiple \
                 Ethereum-related networks. {} You can explore detailed transaction history \
                 and token holdings on each network's respective explorer.",
                funds
            ),
        )
    }

    pub fn explorer_link(self, address: &str) -> Self {
        self.section(
            SectionKind::ExplorerLink,
            format!(
                "You can explore this wallet further on [Etherscan](https://etherscan.io/address/{}).",
                address
            ),
        )
    }

    /// Sections that will be rendered, in order.
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.keys().copied().collect()
    }

    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.sections.get(&kind).map(String::as_str)
    }

    /// Join the present sections.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut previous: Option<SectionKind> = None;

        for (kind, text) in &self.sections {
            if let Some(prev) = previous {
                if prev.is_activity() && kind.is_activity() {
                    out.push('\n');
                } else {
                    out.push_str("\n\n");
                }
            }
            out.push_str(text.trim_end());
            previous = Some(*kind);
        }

        out
    }
}
