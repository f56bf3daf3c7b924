// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::domain::constants::chain_name;
use crate::network::zeroex::SwapApi;

/// Liquidity sources the aggregator can route through on one chain, in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCatalog {
    pub chain_id: u64,
    pub names: Vec<String>,
}

impl SourceCatalog {
    pub async fn fetch<A: SwapApi>(api: &A, chain_id: u64) -> Result<Self, AppError> {
        let names = api.sources(chain_id).await?;
        tracing::info!(target: "workflow", chain_id, count = names.len(), "Fetched liquidity sources");
        Ok(Self { chain_id, names })
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "Sources de liquidité disponibles sur {}:",
                chain_name(self.chain_id)
            ),
            self.names.join(", "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::CHAIN_SCROLL;

    #[test]
    fn renders_header_and_comma_separated_names() {
        let catalog = SourceCatalog {
            chain_id: CHAIN_SCROLL,
            names: vec!["Ambient".into(), "SyncSwap".into(), "Zebra".into()],
        };
        assert_eq!(
            catalog.lines(),
            [
                "Sources de liquidité disponibles sur Scroll:",
                "Ambient, SyncSwap, Zebra"
            ]
        );
    }
}
