// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::{ApiPhase, AppError};
use crate::domain::model::{PriceResponse, QuoteResponse, SwapRequestParams};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const API_KEY_HEADER: &str = "0x-api-key";
const API_VERSION_HEADER: &str = "0x-version";
const ERROR_BODY_LIMIT: usize = 512;

/// Read endpoints of the swap aggregator consumed by the workflow.
#[async_trait]
pub trait SwapApi: Send + Sync {
    async fn sources(&self, chain_id: u64) -> Result<Vec<String>, AppError>;
    async fn price(&self, params: &SwapRequestParams) -> Result<PriceResponse, AppError>;
    async fn quote(&self, params: &SwapRequestParams) -> Result<QuoteResponse, AppError>;
}

/// Connection settings supplied by the caller; the client never reads the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_version: String,
    pub swap_path: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SourcesEnvelope {
    sources: SourceCatalog,
}

// v1 returns an object keyed by source name, v2 a plain list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceCatalog {
    Named(serde_json::Map<String, serde_json::Value>),
    Listed(Vec<String>),
}

impl SourceCatalog {
    fn into_names(self) -> Vec<String> {
        match self {
            SourceCatalog::Named(map) => map.into_iter().map(|(name, _)| name).collect(),
            SourceCatalog::Listed(names) => names,
        }
    }
}

pub struct ZeroExClient {
    client: Client,
    base_url: String,
    swap_path: String,
}

impl ZeroExClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(default_headers(&config)?)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Initialization(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            swap_path: config.swap_path.trim_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| AppError::Config(format!("Invalid aggregator URL {raw}: {e}")))
    }

    pub fn sources_url(&self, chain_id: u64) -> Result<Url, AppError> {
        let mut url = self.endpoint("sources")?;
        url.query_pairs_mut()
            .append_pair("chainId", &chain_id.to_string());
        Ok(url)
    }

    pub fn price_url(&self, params: &SwapRequestParams) -> Result<Url, AppError> {
        self.swap_url("price", params)
    }

    pub fn quote_url(&self, params: &SwapRequestParams) -> Result<Url, AppError> {
        self.swap_url("quote", params)
    }

    fn swap_url(&self, action: &str, params: &SwapRequestParams) -> Result<Url, AppError> {
        let mut url = self.endpoint(&format!("{}/{}", self.swap_path, action))?;
        url.query_pairs_mut().extend_pairs(params.query_pairs());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, phase: ApiPhase, url: Url) -> Result<T, AppError> {
        tracing::debug!(target: "zeroex", %phase, url = %url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Transport {
                phase,
                reason: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| AppError::Transport {
            phase,
            reason: format!("reading body: {e}"),
        })?;

        if !status.is_success() {
            return Err(AppError::ApiStatus {
                phase,
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        tracing::debug!(target: "zeroex", %phase, body = %body, "Aggregator response");
        serde_json::from_str(&body).map_err(|e| AppError::Parse {
            phase,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl SwapApi for ZeroExClient {
    async fn sources(&self, chain_id: u64) -> Result<Vec<String>, AppError> {
        let url = self.sources_url(chain_id)?;
        let envelope: SourcesEnvelope = self.get_json(ApiPhase::Sources, url).await?;
        Ok(envelope.sources.into_names())
    }

    async fn price(&self, params: &SwapRequestParams) -> Result<PriceResponse, AppError> {
        let url = self.price_url(params)?;
        self.get_json(ApiPhase::Price, url).await
    }

    async fn quote(&self, params: &SwapRequestParams) -> Result<QuoteResponse, AppError> {
        let url = self.quote_url(params)?;
        self.get_json(ApiPhase::Quote, url).await
    }
}

fn default_headers(config: &ApiConfig) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in [
        (API_KEY_HEADER, config.api_key.as_str()),
        (API_VERSION_HEADER, config.api_version.as_str()),
    ] {
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::Config(format!("Invalid {name} header: {e}")))?;
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}

fn truncate(body: &str, limit: usize) -> String {
    if body.len() <= limit {
        return body.to_string();
    }
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{CHAIN_SCROLL, WETH_SCROLL, WSTETH_SCROLL};
    use alloy::primitives::{Address, U256};

    fn config() -> ApiConfig {
        ApiConfig {
            base_url: "https://api.0x.org/".to_string(),
            api_key: "test-key".to_string(),
            api_version: "v2".to_string(),
            swap_path: "/swap/permit2/".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    fn params() -> SwapRequestParams {
        SwapRequestParams {
            chain_id: CHAIN_SCROLL,
            sell_token: WETH_SCROLL,
            buy_token: WSTETH_SCROLL,
            sell_amount: U256::from(100_000_000_000_000_000u64),
            taker: Address::from([0x22; 20]),
            affiliate_fee_bps: 100,
            surplus_collection: true,
        }
    }

    #[test]
    fn price_and_quote_share_the_query_string() {
        let client = ZeroExClient::new(config()).unwrap();
        let price = client.price_url(&params()).unwrap();
        let quote = client.quote_url(&params()).unwrap();

        assert_eq!(price.path(), "/swap/permit2/price");
        assert_eq!(quote.path(), "/swap/permit2/quote");
        assert_eq!(price.query(), quote.query());
        let expected = format!(
            "chainId=534352&sellToken={}&buyToken={}&sellAmount=100000000000000000\
             &taker=0x2222222222222222222222222222222222222222&affiliateFee=100\
             &surplusCollection=true",
            WETH_SCROLL, WSTETH_SCROLL
        );
        assert_eq!(price.query(), Some(expected.as_str()));
    }

    #[test]
    fn sources_url_carries_chain_id() {
        let client = ZeroExClient::new(config()).unwrap();
        let url = client.sources_url(CHAIN_SCROLL).unwrap();
        assert_eq!(url.as_str(), "https://api.0x.org/sources?chainId=534352");
    }

    #[test]
    fn invalid_api_key_header_is_a_config_error() {
        let mut cfg = config();
        cfg.api_key = "bad\nkey".to_string();
        assert!(matches!(ZeroExClient::new(cfg), Err(AppError::Config(_))));
    }

    #[test]
    fn source_catalog_keeps_response_order() {
        let raw = r#"{"sources":{"Ambient":{},"SyncSwap":{},"Nuri":{},"Curve":{}}}"#;
        let envelope: SourcesEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(
            envelope.sources.into_names(),
            ["Ambient", "SyncSwap", "Nuri", "Curve"]
        );

        let raw = r#"{"sources":["Uniswap_V3","Maverick_V2"],"zid":"0x1"}"#;
        let envelope: SourcesEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.sources.into_names(), ["Uniswap_V3", "Maverick_V2"]);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééé", 3), "é…");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let mut cfg = config();
        cfg.base_url = "http://127.0.0.1:9".to_string();
        cfg.timeout = Duration::from_millis(500);
        let client = ZeroExClient::new(cfg).unwrap();
        let err = client.price(&params()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Transport {
                phase: ApiPhase::Price,
                ..
            }
        ));
    }
}
