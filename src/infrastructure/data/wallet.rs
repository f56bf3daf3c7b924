// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::data::erc20::IERC20;
use crate::network::provider::SignerProvider;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::Provider;
use async_trait::async_trait;

/// Taker wallet as seen by the quote workflow.
#[async_trait]
pub trait TokenWallet: Send + Sync {
    fn address(&self) -> Address;

    async fn chain_id(&self) -> Result<u64, AppError>;

    async fn decimals(&self, token: Address) -> Result<u8, AppError>;

    /// Simulate then submit `approve(spender, amount)` on `token`.
    /// Resolves once the transaction is accepted by the node; confirmation is not awaited.
    async fn approve(&self, token: Address, spender: Address, amount: U256)
    -> Result<B256, AppError>;
}

pub struct AlloyWallet {
    provider: SignerProvider,
    address: Address,
}

impl AlloyWallet {
    pub fn new(provider: SignerProvider, address: Address) -> Self {
        Self { provider, address }
    }
}

#[async_trait]
impl TokenWallet for AlloyWallet {
    fn address(&self) -> Address {
        self.address
    }

    async fn chain_id(&self) -> Result<u64, AppError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| AppError::Connection(format!("chain_id request failed: {}", e)))
    }

    async fn decimals(&self, token: Address) -> Result<u8, AppError> {
        let contract = IERC20::new(token, self.provider.clone());
        contract.decimals().call().await.map_err(|e| {
            AppError::Connection(format!("decimals() failed for {token:#x}: {}", e))
        })
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<B256, AppError> {
        let contract = IERC20::new(token, self.provider.clone());
        let call = contract.approve(spender, amount).from(self.address);

        let accepted = call
            .call()
            .await
            .map_err(|e| AppError::Approval(format!("simulation failed: {}", e)))?;
        if !accepted {
            return Err(AppError::Approval(format!(
                "{token:#x} approve() simulation returned false"
            )));
        }

        let pending = call
            .send()
            .await
            .map_err(|e| AppError::Approval(format!("send failed: {}", e)))?;
        let tx_hash = *pending.tx_hash();
        tracing::info!(
            target: "wallet",
            token = %format!("{token:#x}"),
            spender = %format!("{spender:#x}"),
            tx_hash = %tx_hash,
            "Approval submitted"
        );
        Ok(tx_hash)
    }
}
