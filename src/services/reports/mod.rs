// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

pub mod liquidity;
pub mod monetization;
pub mod percent;
pub mod taxes;

pub use liquidity::LiquidityReport;
pub use monetization::MonetizationReport;
pub use percent::bps_to_percent;
pub use taxes::TaxReport;
