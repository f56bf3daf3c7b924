// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use super::percent::bps_to_percent;
use crate::common::parsing::is_positive_decimal;
use crate::domain::model::QuoteResponse;

/// Integrator revenue attached to a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetizationReport {
    /// Affiliate fee as a percentage, when the quote carries one.
    pub affiliate_fee: Option<String>,
    /// Raw surplus amount as returned by the aggregator; only kept when positive.
    pub trade_surplus: Option<String>,
}

impl MonetizationReport {
    pub fn from_quote(quote: &QuoteResponse) -> Self {
        Self {
            affiliate_fee: quote.affiliate_fee_bps.map(bps_to_percent),
            trade_surplus: quote
                .trade_surplus
                .as_deref()
                .filter(|raw| is_positive_decimal(raw))
                .map(str::to_string),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(fee) = &self.affiliate_fee {
            lines.push(format!("Frais d'affiliation : {fee}%"));
        }
        if let Some(surplus) = &self.trade_surplus {
            lines.push(format!("Surplus collecté : {surplus}"));
        }
        lines
    }
}
