//! Exact amounts.
//!
//! Amounts are decimals so that sums do not depend on the order in which
//! they are added. On the wire they are plain JSON numbers; numeric strings
//! are accepted on input.

use crate::model::TransactionKind;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses a JSON number or numeric string.
pub fn parse_amount(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Two decimals, e.g. `70.00`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// `+Rs. 10.00` for credits, `-Rs. 40.00` for debits.
pub fn signed_amount(kind: TransactionKind, amount: Decimal) -> String {
    let sign = match kind {
        TransactionKind::Credit => '+',
        TransactionKind::Debit => '-',
    };
    format!("{sign}Rs. {}", format_amount(amount))
}

/// Serde adapter writing decimals as JSON numbers.
pub mod serde_float {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(amount.to_f64().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        parse_amount(&value).ok_or_else(|| de::Error::custom(format!("invalid amount: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_numbers_and_strings_exactly() {
        assert_eq!(parse_amount(&json!(0.1)), Some(Decimal::new(1, 1)));
        assert_eq!(parse_amount(&json!(250)), Some(Decimal::from(250)));
        assert_eq!(parse_amount(&json!(" 99.50 ")), Some(Decimal::new(9950, 2)));
        assert_eq!(parse_amount(&json!("ten")), None);
        assert_eq!(parse_amount(&json!(null)), None);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_amount(Decimal::from(70)), "70.00");
        assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
        assert_eq!(signed_amount(TransactionKind::Credit, Decimal::from(10)), "+Rs. 10.00");
        assert_eq!(signed_amount(TransactionKind::Debit, Decimal::from(40)), "-Rs. 40.00");
    }
}
