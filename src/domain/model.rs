// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

//! Request parameters and response shapes of the aggregator's price/quote protocol.

use crate::common::parsing::{deserialize_bps, deserialize_opt_amount, deserialize_opt_bps};
use alloy::primitives::{Address, U256};
use serde::Deserialize;

/// Chain and token facts resolved once at startup. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainContext {
    pub chain_id: u64,
    pub taker: Address,
    pub sell_token: Address,
    pub buy_token: Address,
    pub sell_decimals: u8,
    pub buy_decimals: u8,
}

/// Integrator monetization settings sent with every price/quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monetization {
    pub affiliate_fee_bps: u32,
    pub surplus_collection: bool,
}

/// Canonical parameter set shared by the price and quote requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequestParams {
    pub chain_id: u64,
    pub sell_token: Address,
    pub buy_token: Address,
    pub sell_amount: U256,
    pub taker: Address,
    pub affiliate_fee_bps: u32,
    pub surplus_collection: bool,
}

impl SwapRequestParams {
    pub fn new(ctx: &ChainContext, sell_amount: U256, monetization: Monetization) -> Self {
        Self {
            chain_id: ctx.chain_id,
            sell_token: ctx.sell_token,
            buy_token: ctx.buy_token,
            sell_amount,
            taker: ctx.taker,
            affiliate_fee_bps: monetization.affiliate_fee_bps,
            surplus_collection: monetization.surplus_collection,
        }
    }

    /// Query pairs in wire order. Both phases serialize through this.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("chainId", self.chain_id.to_string()),
            ("sellToken", self.sell_token.to_string()),
            ("buyToken", self.buy_token.to_string()),
            ("sellAmount", self.sell_amount.to_string()),
            ("taker", self.taker.to_string()),
            ("affiliateFee", self.affiliate_fee_bps.to_string()),
            ("surplusCollection", self.surplus_collection.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issues {
    #[serde(default)]
    pub allowance: Option<AllowanceGap>,
    #[serde(default)]
    pub balance: Option<BalanceShortfall>,
}

/// The spender has not been approved for enough of the sell token.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceGap {
    pub spender: Address,
    #[serde(default, alias = "actual", deserialize_with = "deserialize_opt_amount")]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceShortfall {
    pub token: Address,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub actual: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub source: String,
    #[serde(deserialize_with = "deserialize_bps")]
    pub proportion_bps: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Route {
    #[serde(default)]
    pub fills: Vec<Fill>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// `None` when the aggregator could not determine the tax (sent as `null`).
pub struct TaxInfo {
    #[serde(default, deserialize_with = "deserialize_opt_bps")]
    pub buy_tax_bps: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_opt_bps")]
    pub sell_tax_bps: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(default)]
    pub buy_token: TaxInfo,
    #[serde(default)]
    pub sell_token: TaxInfo,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    #[serde(default)]
    pub issues: Issues,
    #[serde(default)]
    pub route: Option<Route>,
    #[serde(default)]
    pub liquidity_available: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub buy_amount: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub min_buy_amount: Option<String>,
}

impl PriceResponse {
    pub fn allowance_gap(&self) -> Option<&AllowanceGap> {
        self.issues.allowance.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(default)]
    pub route: Option<Route>,
    #[serde(default)]
    pub token_metadata: Option<TokenMetadata>,
    #[serde(default, deserialize_with = "deserialize_opt_bps")]
    pub affiliate_fee_bps: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub trade_surplus: Option<String>,
    #[serde(default)]
    pub issues: Issues,
    #[serde(default)]
    pub liquidity_available: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub buy_amount: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub min_buy_amount: Option<String>,
}
