// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// `true` only when `raw` parses as a finite decimal strictly above zero.
pub fn is_positive_decimal(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|v| v.is_finite() && v > 0.0)
        .unwrap_or(false)
}

/// Basis points arrive either as JSON numbers or as decimal strings.
pub fn deserialize_bps<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct BpsVisitor;

    impl<'de> Visitor<'de> for BpsVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative basis point value as number or string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            u32::try_from(v).map_err(|_| E::custom(format!("bps value {v} out of range")))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            u32::try_from(v).map_err(|_| E::custom(format!("bps value {v} out of range")))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            v.trim()
                .parse::<u32>()
                .map_err(|_| E::custom(format!("invalid bps value {v:?}")))
        }
    }

    deserializer.deserialize_any(BpsVisitor)
}

pub fn deserialize_opt_bps<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Bps(#[serde(deserialize_with = "deserialize_bps")] u32);

    Ok(Option::<Bps>::deserialize(deserializer)?.map(|Bps(v)| v))
}

/// Token amounts are kept as their decimal text; numbers are rendered back to text.
pub fn deserialize_opt_amount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<Amount>::deserialize(deserializer)?.map(|amount| match amount {
            Amount::Text(s) => s,
            Amount::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_bps")]
        bps: u32,
        #[serde(default, deserialize_with = "deserialize_opt_bps")]
        fee: Option<u32>,
        #[serde(default, deserialize_with = "deserialize_opt_amount")]
        surplus: Option<String>,
    }

    #[test]
    fn bps_accepts_numbers_and_strings() {
        let p: Probe = serde_json::from_str(r#"{"bps": 250}"#).unwrap();
        assert_eq!(p.bps, 250);
        let p: Probe = serde_json::from_str(r#"{"bps": "6000"}"#).unwrap();
        assert_eq!(p.bps, 6000);
        assert!(serde_json::from_str::<Probe>(r#"{"bps": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"bps": -1}"#).is_err());
    }

    #[test]
    fn optional_fields_distinguish_absent_null_and_zero() {
        let p: Probe = serde_json::from_str(r#"{"bps": 0}"#).unwrap();
        assert_eq!(p.fee, None);
        assert_eq!(p.surplus, None);

        let p: Probe = serde_json::from_str(r#"{"bps": 0, "fee": null, "surplus": null}"#).unwrap();
        assert_eq!(p.fee, None);
        assert_eq!(p.surplus, None);

        let p: Probe = serde_json::from_str(r#"{"bps": 0, "fee": "0", "surplus": "0"}"#).unwrap();
        assert_eq!(p.fee, Some(0));
        assert_eq!(p.surplus.as_deref(), Some("0"));

        let p: Probe = serde_json::from_str(r#"{"bps": 0, "surplus": 12}"#).unwrap();
        assert_eq!(p.surplus.as_deref(), Some("12"));
    }

    #[test]
    fn positive_decimal_rejects_zero_and_garbage() {
        assert!(is_positive_decimal("0.0013"));
        assert!(is_positive_decimal(" 5 "));
        assert!(!is_positive_decimal("0"));
        assert!(!is_positive_decimal("0.000"));
        assert!(!is_positive_decimal("-1"));
        assert!(!is_positive_decimal("n/a"));
        assert!(!is_positive_decimal("NaN"));
    }

    #[test]
    fn strip_0x_accepts_both_prefixes() {
        assert_eq!(strip_0x("0xabcd"), "abcd");
        assert_eq!(strip_0x("0Xabcd"), "abcd");
        assert_eq!(strip_0x("abcd"), "abcd");
    }
}
