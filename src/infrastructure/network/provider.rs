// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::common::error::AppError;
use alloy::network::{Ethereum, EthereumWallet};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use url::Url;

/// HTTP provider with nonce/gas fillers and a local signer attached.
pub type SignerProvider = DynProvider<Ethereum>;

pub struct ConnectionFactory;

impl ConnectionFactory {
    pub fn signing_http(rpc_url: &str, signer: PrivateKeySigner) -> Result<SignerProvider, AppError> {
        let url =
            Url::parse(rpc_url).map_err(|e| AppError::Config(format!("Invalid RPC URL: {}", e)))?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_rpc_url() {
        let err = ConnectionFactory::signing_http("not a url", PrivateKeySigner::random())
            .err()
            .expect("malformed url must fail");
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn builds_provider_for_http_url() {
        assert!(
            ConnectionFactory::signing_http("http://127.0.0.1:8545", PrivateKeySigner::random())
                .is_ok()
        );
    }
}
