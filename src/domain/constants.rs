// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use alloy::primitives::{Address, address};

// =============================================================================
// NETWORK CONSTANTS
// =============================================================================

pub const CHAIN_ETHEREUM: u64 = 1;
pub const CHAIN_SCROLL: u64 = 534352;

pub fn chain_name(chain_id: u64) -> String {
    match chain_id {
        CHAIN_ETHEREUM => "Ethereum".to_string(),
        CHAIN_SCROLL => "Scroll".to_string(),
        other => format!("chain {other}"),
    }
}

// =============================================================================
// TOKENS (Scroll)
// =============================================================================

pub const WETH_SCROLL: Address = address!("5300000000000000000000000000000000000004");
pub const WSTETH_SCROLL: Address = address!("f610A9dfB7C89644979b4A0f27063E9e7d7Cda32");

/// Display label for a token: symbol when known, hex address otherwise.
pub fn token_label(chain_id: u64, token: Address) -> String {
    match (chain_id, token) {
        (CHAIN_SCROLL, WETH_SCROLL) => "WETH".to_string(),
        (CHAIN_SCROLL, WSTETH_SCROLL) => "wstETH".to_string(),
        _ => format!("{token:#x}"),
    }
}

// =============================================================================
// AGGREGATOR DEFAULTS
// =============================================================================

pub const DEFAULT_API_BASE_URL: &str = "https://api.0x.org";
pub const DEFAULT_API_VERSION: &str = "v2";
pub const DEFAULT_SWAP_PATH: &str = "swap/permit2";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_SELL_AMOUNT: &str = "0.1";
pub const DEFAULT_AFFILIATE_FEE_BPS: u32 = 100;

/// 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_scroll_tokens_use_symbols() {
        assert_eq!(token_label(CHAIN_SCROLL, WETH_SCROLL), "WETH");
        assert_eq!(token_label(CHAIN_SCROLL, WSTETH_SCROLL), "wstETH");
        assert_eq!(
            token_label(CHAIN_ETHEREUM, WETH_SCROLL),
            "0x5300000000000000000000000000000000000004"
        );
    }

    #[test]
    fn unknown_chains_fall_back_to_id() {
        assert_eq!(chain_name(CHAIN_SCROLL), "Scroll");
        assert_eq!(chain_name(8453), "chain 8453");
    }
}
