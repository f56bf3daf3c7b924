// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

/// Basis points as a percentage with exactly two decimals (`250` -> `"2.50"`).
pub fn bps_to_percent(bps: u32) -> String {
    format!("{}.{:02}", bps / 100, bps % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimals() {
        assert_eq!(bps_to_percent(250), "2.50");
        assert_eq!(bps_to_percent(6000), "60.00");
        assert_eq!(bps_to_percent(10_000), "100.00");
        assert_eq!(bps_to_percent(1), "0.01");
        assert_eq!(bps_to_percent(0), "0.00");
        assert_eq!(bps_to_percent(3333), "33.33");
    }

    #[test]
    fn matches_float_division_over_the_bps_range() {
        for bps in (0..=10_000u32).step_by(7) {
            assert_eq!(bps_to_percent(bps), format!("{:.2}", bps as f64 / 100.0));
        }
    }
}
