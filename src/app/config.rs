// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::common::parsing::strip_0x;
use crate::domain::constants::{
    self, BPS_DENOMINATOR, DEFAULT_AFFILIATE_FEE_BPS, WETH_SCROLL, WSTETH_SCROLL,
};
use crate::domain::error::AppError;
use crate::domain::model::Monetization;
use crate::network::zeroex::ApiConfig;
use crate::services::workflow::WorkflowSettings;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    // General
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub log_json: bool,

    // Identity / endpoints
    pub private_key: Option<String>,
    pub zero_ex_api_key: Option<String>,
    pub rpc_url: Option<String>,
    pub alchemy_http_transport_url: Option<String>,

    // Aggregator
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_swap_path")]
    pub swap_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    // Trade
    #[serde(default = "default_sell_token")]
    pub sell_token: Address,
    #[serde(default = "default_buy_token")]
    pub buy_token: Address,
    #[serde(default = "default_sell_amount")]
    pub sell_amount: String,
    #[serde(default = "default_affiliate_fee_bps")]
    pub affiliate_fee_bps: u32,
    #[serde(default = "default_true")]
    pub surplus_collection: bool,

    // Behaviour
    #[serde(default)]
    pub sources_strict: bool,
    #[serde(default)]
    pub dry_run: bool,
}

// Defaults
fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}
fn default_api_version() -> String {
    constants::DEFAULT_API_VERSION.to_string()
}
fn default_swap_path() -> String {
    constants::DEFAULT_SWAP_PATH.to_string()
}
fn default_request_timeout_secs() -> u64 {
    constants::DEFAULT_REQUEST_TIMEOUT_SECS
}
fn default_sell_token() -> Address {
    WETH_SCROLL
}
fn default_buy_token() -> Address {
    WSTETH_SCROLL
}
fn default_sell_amount() -> String {
    constants::DEFAULT_SELL_AMOUNT.to_string()
}
fn default_affiliate_fee_bps() -> u32 {
    DEFAULT_AFFILIATE_FEE_BPS
}
fn default_true() -> bool {
    true
}

impl Settings {
    pub fn load_with_path(path: Option<&str>) -> Result<Self, AppError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let mut builder = Config::builder();
        if let Some(selected_path) = path {
            builder = builder.add_source(File::from(Path::new(selected_path)).required(true));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }
        // Environment (and .env) wins over the file; CLI flags are applied in main.
        builder = builder.add_source(Environment::default());

        Self::from_config(builder.build()?)
    }

    /// Deserialize only; call `validate` once every override has been applied.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        Ok(config.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        required(&self.private_key, "PRIVATE_KEY")?;
        required(&self.zero_ex_api_key, "ZERO_EX_API_KEY")?;
        self.rpc_url()?;
        if self.affiliate_fee_bps > BPS_DENOMINATOR {
            return Err(AppError::Config(format!(
                "affiliate_fee_bps {} exceeds {}",
                self.affiliate_fee_bps, BPS_DENOMINATOR
            )));
        }
        if self.sell_token == self.buy_token {
            return Err(AppError::Config(
                "sell_token and buy_token must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// `RPC_URL` wins; `ALCHEMY_HTTP_TRANSPORT_URL` is the fallback.
    pub fn rpc_url(&self) -> Result<&str, AppError> {
        required(&self.rpc_url, "RPC_URL")
            .or_else(|_| required(&self.alchemy_http_transport_url, "RPC_URL"))
            .map_err(|_| {
                AppError::Config("RPC_URL (or ALCHEMY_HTTP_TRANSPORT_URL) is missing".to_string())
            })
    }

    pub fn signer(&self) -> Result<PrivateKeySigner, AppError> {
        let raw = required(&self.private_key, "PRIVATE_KEY")?;
        let hex = strip_0x(raw);
        if hex.len() != 64 {
            return Err(AppError::Config(format!(
                "PRIVATE_KEY must be 32 bytes of hex, got {} characters",
                hex.len()
            )));
        }
        PrivateKeySigner::from_str(hex)
            .map_err(|e| AppError::Config(format!("Invalid PRIVATE_KEY: {}", e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn api_config(&self) -> Result<ApiConfig, AppError> {
        Ok(ApiConfig {
            base_url: self.api_base_url.clone(),
            api_key: required(&self.zero_ex_api_key, "ZERO_EX_API_KEY")?.to_string(),
            api_version: self.api_version.clone(),
            swap_path: self.swap_path.clone(),
            timeout: self.request_timeout(),
        })
    }

    pub fn workflow_settings(&self) -> WorkflowSettings {
        WorkflowSettings {
            sell_token: self.sell_token,
            buy_token: self.buy_token,
            sell_amount: self.sell_amount.clone(),
            monetization: Monetization {
                affiliate_fee_bps: self.affiliate_fee_bps,
                surplus_collection: self.surplus_collection,
            },
            sources_strict: self.sources_strict,
            dry_run: self.dry_run,
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Config(format!("{name} is missing")))
}
