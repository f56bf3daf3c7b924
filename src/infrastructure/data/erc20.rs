// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};
    use alloy::sol_types::SolCall;

    #[test]
    fn approve_calldata_uses_erc20_selector() {
        let call = IERC20::approveCall {
            spender: Address::from([0xaa; 20]),
            amount: U256::MAX,
        };
        let data = call.abi_encode();
        assert_eq!(&data[..4], &[0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(data.len(), 4 + 32 * 2);
        assert!(data[4 + 32..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn decimals_selector_matches_erc20() {
        assert_eq!(IERC20::decimalsCall::SELECTOR, [0x31, 0x3c, 0xe5, 0x67]);
    }
}
