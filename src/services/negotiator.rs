// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::data::wallet::TokenWallet;
use crate::domain::model::{PriceResponse, QuoteResponse, SwapRequestParams};
use crate::network::zeroex::SwapApi;
use alloy::primitives::{Address, B256, U256};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationState {
    Init,
    Priced,
    AwaitingApproval,
    Quoted,
    Done,
    Failed,
}

impl NegotiationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NegotiationState::Done | NegotiationState::Failed)
    }
}

impl fmt::Display for NegotiationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NegotiationState::Init => "INIT",
            NegotiationState::Priced => "PRICED",
            NegotiationState::AwaitingApproval => "AWAITING_APPROVAL",
            NegotiationState::Quoted => "QUOTED",
            NegotiationState::Done => "DONE",
            NegotiationState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Result of the allowance branch. A failed approval is a value here, never the run's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    NotRequired,
    Submitted { spender: Address, tx_hash: B256 },
    Failed { spender: Address, reason: String },
    Skipped { spender: Address },
}

impl ApprovalOutcome {
    /// Whether the wallet was asked to submit an approval.
    pub fn attempted(&self) -> bool {
        matches!(
            self,
            ApprovalOutcome::Submitted { .. } | ApprovalOutcome::Failed { .. }
        )
    }
}

/// Everything one negotiation produced, handed to the reporters.
#[derive(Debug, Clone)]
pub struct Negotiation {
    pub params: SwapRequestParams,
    pub price: PriceResponse,
    pub approval: ApprovalOutcome,
    pub quote: QuoteResponse,
}

/// Drives price -> (approval) -> quote for a single parameter set.
///
/// The parameters are fixed at construction so the quote is always requested with exactly
/// the values that were priced.
pub struct QuoteNegotiator<'a, A, W> {
    api: &'a A,
    wallet: &'a W,
    params: SwapRequestParams,
    dry_run: bool,
    state: NegotiationState,
}

impl<'a, A, W> QuoteNegotiator<'a, A, W>
where
    A: SwapApi,
    W: TokenWallet,
{
    pub fn new(api: &'a A, wallet: &'a W, params: SwapRequestParams) -> Self {
        Self {
            api,
            wallet,
            params,
            dry_run: false,
            state: NegotiationState::Init,
        }
    }

    /// Record allowance gaps without asking the wallet to approve.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn state(&self) -> NegotiationState {
        self.state
    }

    pub fn params(&self) -> &SwapRequestParams {
        &self.params
    }

    /// INIT -> PRICED.
    pub async fn request_price(&mut self) -> Result<PriceResponse, AppError> {
        let result = self.price_inner().await;
        self.track(result)
    }

    /// PRICED -> AWAITING_APPROVAL when the price reports an allowance gap, otherwise a no-op.
    pub async fn settle_allowance<O: Write>(
        &mut self,
        price: &PriceResponse,
        out: &mut O,
    ) -> Result<ApprovalOutcome, AppError> {
        let result = self.settle_inner(price, out).await;
        self.track(result)
    }

    /// PRICED | AWAITING_APPROVAL -> QUOTED.
    pub async fn request_quote(&mut self) -> Result<QuoteResponse, AppError> {
        let result = self.quote_inner().await;
        self.track(result)
    }

    /// QUOTED -> DONE.
    pub fn finish(&mut self) -> Result<(), AppError> {
        let result = self
            .ensure(&[NegotiationState::Quoted], NegotiationState::Done)
            .map(|_| self.transition(NegotiationState::Done));
        self.track(result)
    }

    async fn price_inner(&mut self) -> Result<PriceResponse, AppError> {
        self.ensure(&[NegotiationState::Init], NegotiationState::Priced)?;
        let price = self.api.price(&self.params).await?;
        self.transition(NegotiationState::Priced);

        if let Some(balance) = &price.issues.balance {
            tracing::warn!(
                target: "negotiator",
                token = %format!("{:#x}", balance.token),
                actual = balance.actual.as_deref().unwrap_or("?"),
                expected = balance.expected.as_deref().unwrap_or("?"),
                "Taker balance is below the sell amount"
            );
        }
        Ok(price)
    }

    async fn settle_inner<O: Write>(
        &mut self,
        price: &PriceResponse,
        out: &mut O,
    ) -> Result<ApprovalOutcome, AppError> {
        self.ensure(&[NegotiationState::Priced], NegotiationState::AwaitingApproval)?;

        let Some(gap) = price.allowance_gap() else {
            tracing::debug!(target: "negotiator", "No allowance issue reported");
            writeln!(out, "Aucune approbation nécessaire pour Permit2.")?;
            return Ok(ApprovalOutcome::NotRequired);
        };
        let spender = gap.spender;
        self.transition(NegotiationState::AwaitingApproval);

        if self.dry_run {
            tracing::info!(
                target: "negotiator",
                spender = %format!("{spender:#x}"),
                "Dry-run: skipping approval"
            );
            writeln!(out, "Approbation ignorée (dry-run) pour Permit2 : {spender}")?;
            return Ok(ApprovalOutcome::Skipped { spender });
        }

        writeln!(out, "Approbation en cours pour Permit2...")?;
        let outcome = match self
            .wallet
            .approve(self.params.sell_token, spender, U256::MAX)
            .await
        {
            Ok(tx_hash) => {
                writeln!(out, "Transaction d'approbation pour Permit2 : {tx_hash}")?;
                ApprovalOutcome::Submitted { spender, tx_hash }
            }
            Err(e) => {
                tracing::warn!(
                    target: "negotiator",
                    spender = %format!("{spender:#x}"),
                    error = %e,
                    "Approval failed; continuing to quote"
                );
                writeln!(out, "Erreur lors de l'approbation pour Permit2 : {e}")?;
                ApprovalOutcome::Failed {
                    spender,
                    reason: e.to_string(),
                }
            }
        };
        Ok(outcome)
    }

    async fn quote_inner(&mut self) -> Result<QuoteResponse, AppError> {
        self.ensure(
            &[NegotiationState::Priced, NegotiationState::AwaitingApproval],
            NegotiationState::Quoted,
        )?;
        let quote = self.api.quote(&self.params).await?;
        self.transition(NegotiationState::Quoted);
        Ok(quote)
    }

    fn ensure(&self, allowed: &[NegotiationState], to: NegotiationState) -> Result<(), AppError> {
        if allowed.contains(&self.state) {
            return Ok(());
        }
        Err(AppError::InvalidTransition {
            from: self.state.to_string(),
            to: to.to_string(),
        })
    }

    fn transition(&mut self, next: NegotiationState) {
        tracing::debug!(target: "negotiator", from = %self.state, to = %next, "State transition");
        self.state = next;
    }

    fn track<T>(&mut self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(e) = &result
            && !self.state.is_terminal()
        {
            tracing::warn!(target: "negotiator", from = %self.state, error = %e, "Negotiation failed");
            self.state = NegotiationState::Failed;
        }
        result
    }
}
