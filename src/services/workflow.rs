// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::data::wallet::TokenWallet;
use crate::domain::constants::token_label;
use crate::domain::model::{ChainContext, Monetization, SwapRequestParams};
use crate::network::zeroex::SwapApi;
use crate::services::negotiator::{Negotiation, QuoteNegotiator};
use crate::services::reports::{LiquidityReport, MonetizationReport, TaxReport};
use crate::services::sources::SourceCatalog;
use alloy::primitives::utils::{format_units, parse_units};
use alloy::primitives::{Address, U256};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    pub sell_token: Address,
    pub buy_token: Address,
    /// Human-readable amount, scaled by the sell token's decimals.
    pub sell_amount: String,
    pub monetization: Monetization,
    /// Abort when the source catalog cannot be fetched instead of warning.
    pub sources_strict: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct WorkflowReport {
    pub chain: ChainContext,
    pub sources: Option<SourceCatalog>,
    pub negotiation: Negotiation,
    pub liquidity: Option<LiquidityReport>,
    pub taxes: Option<TaxReport>,
    pub monetization: MonetizationReport,
}

/// One-shot run: sources, price, allowance, quote, then the quote reports.
pub struct SwapWorkflow<'a, A, W> {
    api: &'a A,
    wallet: &'a W,
    settings: WorkflowSettings,
}

impl<'a, A, W> SwapWorkflow<'a, A, W>
where
    A: SwapApi,
    W: TokenWallet,
{
    pub fn new(api: &'a A, wallet: &'a W, settings: WorkflowSettings) -> Self {
        Self {
            api,
            wallet,
            settings,
        }
    }

    pub async fn run<O: Write>(&self, out: &mut O) -> Result<WorkflowReport, AppError> {
        let chain_id = self.wallet.chain_id().await?;
        let taker = self.wallet.address();
        tracing::info!(
            target: "workflow",
            chain_id,
            taker = %format!("{taker:#x}"),
            dry_run = self.settings.dry_run,
            "Starting quote workflow"
        );

        let sources = self.list_sources(chain_id, out).await?;

        let chain = self.resolve_context(chain_id, taker).await?;
        let sell_amount = scale_amount(&self.settings.sell_amount, chain.sell_decimals)?;
        let params = SwapRequestParams::new(&chain, sell_amount, self.settings.monetization);

        let buy_label = token_label(chain_id, chain.buy_token);
        let trade = format!(
            "{} {} contre {}",
            self.settings.sell_amount.trim(),
            token_label(chain_id, chain.sell_token),
            buy_label
        );

        let mut negotiator =
            QuoteNegotiator::new(self.api, self.wallet, params).dry_run(self.settings.dry_run);

        let price = negotiator.request_price().await?;
        tracing::debug!(target: "workflow", response = ?price, "Price");
        writeln!(out, "Prix pour échanger {trade}:")?;
        write_amount_summary(
            out,
            price.liquidity_available,
            price.buy_amount.as_deref(),
            chain.buy_decimals,
            &buy_label,
        )?;

        let approval = negotiator.settle_allowance(&price, out).await?;

        let quote = negotiator.request_quote().await?;
        tracing::debug!(target: "workflow", response = ?quote, "Quote");
        writeln!(out, "Devis pour échanger {trade}:")?;
        write_amount_summary(
            out,
            quote.liquidity_available,
            quote.buy_amount.as_deref(),
            chain.buy_decimals,
            &buy_label,
        )?;
        negotiator.finish()?;

        let liquidity = quote.route.as_ref().map(LiquidityReport::from_route);
        let taxes = quote.token_metadata.as_ref().map(TaxReport::from_metadata);
        let monetization = MonetizationReport::from_quote(&quote);

        let report_lines = liquidity
            .iter()
            .flat_map(LiquidityReport::lines)
            .chain(taxes.iter().flat_map(TaxReport::lines))
            .chain(monetization.lines());
        for line in report_lines {
            writeln!(out, "{line}")?;
        }

        tracing::info!(
            target: "workflow",
            approval = ?approval,
            fills = liquidity.as_ref().map(LiquidityReport::source_count).unwrap_or(0),
            "Quote workflow finished"
        );

        Ok(WorkflowReport {
            chain,
            sources,
            negotiation: Negotiation {
                params: negotiator.params().clone(),
                price,
                approval,
                quote,
            },
            liquidity,
            taxes,
            monetization,
        })
    }

    async fn list_sources<O: Write>(
        &self,
        chain_id: u64,
        out: &mut O,
    ) -> Result<Option<SourceCatalog>, AppError> {
        match SourceCatalog::fetch(self.api, chain_id).await {
            Ok(catalog) => {
                for line in catalog.lines() {
                    writeln!(out, "{line}")?;
                }
                Ok(Some(catalog))
            }
            Err(e) if !self.settings.sources_strict => {
                tracing::warn!(
                    target: "workflow",
                    chain_id,
                    error = %e,
                    "Source catalog unavailable; continuing"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn resolve_context(&self, chain_id: u64, taker: Address) -> Result<ChainContext, AppError> {
        let sell_decimals = self.wallet.decimals(self.settings.sell_token).await?;
        let buy_decimals = self.wallet.decimals(self.settings.buy_token).await?;
        Ok(ChainContext {
            chain_id,
            taker,
            sell_token: self.settings.sell_token,
            buy_token: self.settings.buy_token,
            sell_decimals,
            buy_decimals,
        })
    }
}

/// Scale a human amount (`"0.1"`) to base units; the result must be strictly positive.
pub fn scale_amount(human: &str, decimals: u8) -> Result<U256, AppError> {
    let invalid = |message: String| AppError::Validation {
        field: "sell_amount".to_string(),
        message,
    };

    let trimmed = human.trim();
    if trimmed.starts_with('-') {
        return Err(invalid(format!("{trimmed} is negative")));
    }
    let amount = parse_units(trimmed, decimals)
        .map_err(|e| invalid(format!("{trimmed}: {e}")))?
        .get_absolute();
    if amount.is_zero() {
        return Err(invalid(format!("{trimmed} scales to zero base units")));
    }
    Ok(amount)
}

fn write_amount_summary<O: Write>(
    out: &mut O,
    liquidity_available: Option<bool>,
    buy_amount: Option<&str>,
    buy_decimals: u8,
    buy_label: &str,
) -> Result<(), AppError> {
    if liquidity_available == Some(false) {
        writeln!(out, "Liquidité disponible : non")?;
    }
    if let Some(raw) = buy_amount {
        writeln!(
            out,
            "Montant d'achat estimé : {} {buy_label}",
            display_units(raw, buy_decimals)
        )?;
    }
    Ok(())
}

// Falls back to the raw base-unit string when it is not an integer.
fn display_units(raw: &str, decimals: u8) -> String {
    let Ok(value) = raw.parse::<U256>() else {
        return raw.to_string();
    };
    match format_units(value, decimals) {
        Ok(formatted) if formatted.contains('.') => formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        Ok(formatted) => formatted,
        Err(_) => raw.to_string(),
    }
}
