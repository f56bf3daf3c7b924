// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use super::percent::bps_to_percent;
use crate::domain::model::{TaxInfo, TokenMetadata};

const UNKNOWN_TAX: &str = "inconnue";

/// Percentages of one token; `None` marks a tax the aggregator could not determine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPair {
    pub buy_tax: Option<String>,
    pub sell_tax: Option<String>,
}

impl TaxPair {
    // Unknown taxes never count as taxed on their own.
    fn if_taxed(info: &TaxInfo) -> Option<Self> {
        let taxed = |bps: Option<u32>| bps.is_some_and(|v| v > 0);
        (taxed(info.buy_tax_bps) || taxed(info.sell_tax_bps)).then(|| Self {
            buy_tax: info.buy_tax_bps.map(bps_to_percent),
            sell_tax: info.sell_tax_bps.map(bps_to_percent),
        })
    }
}

fn render(tax: Option<&str>) -> String {
    match tax {
        Some(percent) => format!("{percent}%"),
        None => UNKNOWN_TAX.to_string(),
    }
}

/// Transfer taxes of both tokens. Each side is kept only when one of its taxes is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxReport {
    pub buy_token: Option<TaxPair>,
    pub sell_token: Option<TaxPair>,
}

impl TaxReport {
    pub fn from_metadata(meta: &TokenMetadata) -> Self {
        Self {
            buy_token: TaxPair::if_taxed(&meta.buy_token),
            sell_token: TaxPair::if_taxed(&meta.sell_token),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buy_token.is_none() && self.sell_token.is_none()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (pair, token) in [
            (&self.buy_token, "token d'achat"),
            (&self.sell_token, "token de vente"),
        ] {
            if let Some(pair) = pair {
                lines.push(format!(
                    "Taxe d'achat du {token} : {}",
                    render(pair.buy_tax.as_deref())
                ));
                lines.push(format!(
                    "Taxe de vente du {token} : {}",
                    render(pair.sell_tax.as_deref())
                ));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tax(buy_tax_bps: u32, sell_tax_bps: u32) -> TaxInfo {
        TaxInfo {
            buy_tax_bps: Some(buy_tax_bps),
            sell_tax_bps: Some(sell_tax_bps),
        }
    }

    #[test]
    fn untaxed_tokens_produce_no_lines() {
        let report = TaxReport::from_metadata(&TokenMetadata {
            buy_token: tax(0, 0),
            sell_token: tax(0, 0),
        });
        assert!(report.is_empty());
        assert!(report.lines().is_empty());
    }

    #[test]
    fn sell_only_tax_is_still_reported() {
        let report = TaxReport::from_metadata(&TokenMetadata {
            buy_token: tax(0, 0),
            sell_token: tax(0, 150),
        });
        assert!(report.buy_token.is_none());
        assert_eq!(
            report.lines(),
            [
                "Taxe d'achat du token de vente : 0.00%",
                "Taxe de vente du token de vente : 1.50%"
            ]
        );
    }

    #[test]
    fn sides_are_evaluated_independently() {
        let report = TaxReport::from_metadata(&TokenMetadata {
            buy_token: tax(300, 0),
            sell_token: tax(0, 0),
        });
        assert_eq!(
            report.lines(),
            [
                "Taxe d'achat du token d'achat : 3.00%",
                "Taxe de vente du token d'achat : 0.00%"
            ]
        );

        let report = TaxReport::from_metadata(&TokenMetadata {
            buy_token: tax(100, 200),
            sell_token: tax(50, 0),
        });
        assert_eq!(report.lines().len(), 4);
    }

    #[test]
    fn unknown_taxes_are_not_reported_as_taxed() {
        let report = TaxReport::from_metadata(&TokenMetadata {
            buy_token: TaxInfo::default(),
            sell_token: TaxInfo {
                buy_tax_bps: None,
                sell_tax_bps: Some(0),
            },
        });
        assert!(report.is_empty());
    }

    #[test]
    fn unknown_side_of_a_taxed_pair_is_marked() {
        let report = TaxReport::from_metadata(&TokenMetadata {
            buy_token: TaxInfo {
                buy_tax_bps: Some(500),
                sell_tax_bps: None,
            },
            sell_token: tax(0, 0),
        });
        assert_eq!(
            report.lines(),
            [
                "Taxe d'achat du token d'achat : 5.00%",
                "Taxe de vente du token d'achat : inconnue"
            ]
        );
    }
}
