// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use super::percent::bps_to_percent;
use crate::domain::model::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceShare {
    pub source: String,
    pub percent: String,
}

/// Share of the swapped amount routed through each liquidity source, in route order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityReport {
    pub shares: Vec<SourceShare>,
}

impl LiquidityReport {
    /// Each fill is converted on its own; proportions are not summed or renormalized.
    pub fn from_route(route: &Route) -> Self {
        let shares = route
            .fills
            .iter()
            .map(|fill| SourceShare {
                source: fill.source.clone(),
                percent: bps_to_percent(fill.proportion_bps),
            })
            .collect();
        Self { shares }
    }

    pub fn source_count(&self) -> usize {
        self.shares.len()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.shares.len() + 1);
        lines.push(format!("{} Sources de liquidité :", self.source_count()));
        lines.extend(
            self.shares
                .iter()
                .map(|share| format!("{} : {}%", share.source, share.percent)),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Fill;

    fn fill(source: &str, proportion_bps: u32) -> Fill {
        Fill {
            source: source.to_string(),
            proportion_bps,
        }
    }

    #[test]
    fn keeps_input_order_instead_of_sorting() {
        let route = Route {
            fills: vec![fill("Small", 250), fill("Large", 9000), fill("Mid", 750)],
        };
        let report = LiquidityReport::from_route(&route);
        assert_eq!(report.source_count(), 3);
        assert_eq!(
            report.lines(),
            [
                "3 Sources de liquidité :",
                "Small : 2.50%",
                "Large : 90.00%",
                "Mid : 7.50%"
            ]
        );
    }

    #[test]
    fn does_not_renormalize_partial_routes() {
        let route = Route {
            fills: vec![fill("A", 3000), fill("B", 3000)],
        };
        let report = LiquidityReport::from_route(&route);
        assert_eq!(report.shares[0].percent, "30.00");
        assert_eq!(report.shares[1].percent, "30.00");
    }

    #[test]
    fn empty_route_reports_zero_sources() {
        let report = LiquidityReport::from_route(&Route::default());
        assert_eq!(report.lines(), ["0 Sources de liquidité :"]);
    }
}
