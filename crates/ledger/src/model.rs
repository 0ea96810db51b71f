use crate::amount::{parse_amount, serde_float};
use crate::error::LedgerError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }

    /// Sign applied to the amount when computing a balance.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Credit => amount,
            TransactionKind::Debit => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(TransactionKind::Credit),
            "debit" => Ok(TransactionKind::Debit),
            other => Err(LedgerError::InvalidField {
                field: "type",
                reason: format!("expected 'credit' or 'debit', got '{other}'"),
            }),
        }
    }
}

/// One immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "serde_float")]
    pub amount: Decimal,
    pub person: String,
    #[serde(default)]
    pub purpose: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// A transaction as submitted by a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl NewTransaction {
    pub fn new(kind: TransactionKind, amount: impl Into<Decimal>, person: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.as_str().to_string()),
            amount: Some(serde_json::Value::String(amount.into().to_string())),
            person: Some(person.into()),
            ..Self::default()
        }
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Checks the submission and turns it into a stored transaction with a
    /// fresh id. A missing timestamp defaults to `received_at`.
    pub fn validate(self, received_at: DateTime<Utc>) -> Result<Transaction, LedgerError> {
        let kind = self.kind.as_deref().filter(|k| !k.trim().is_empty());
        let person = self.person.as_deref().filter(|p| !p.trim().is_empty());
        let amount = self.amount.as_ref().filter(|v| !v.is_null() && v.as_str() != Some(""));

        let mut missing = Vec::new();
        if kind.is_none() {
            missing.push("type");
        }
        if amount.is_none() {
            missing.push("amount");
        }
        if person.is_none() {
            missing.push("person");
        }
        let (Some(kind), Some(amount), Some(person)) = (kind, amount, person) else {
            return Err(LedgerError::MissingFields(missing));
        };

        let kind = TransactionKind::from_str(kind)?;
        let amount = parse_amount(amount).ok_or_else(|| LedgerError::InvalidField {
            field: "amount",
            reason: format!("'{amount}' is not a number"),
        })?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidField {
                field: "amount",
                reason: "must be greater than zero".into(),
            });
        }
        let timestamp = match self.timestamp.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => parse_timestamp(raw)?,
            None => received_at,
        };

        Ok(Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            amount,
            person: person.to_string(),
            purpose: self.purpose.unwrap_or_default(),
            timestamp,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, LedgerError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| LedgerError::InvalidField {
            field: "timestamp",
            reason: format!("'{raw}' is neither RFC 3339 nor YYYY-MM-DD"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap()
    }

    fn submit(body: serde_json::Value) -> Result<Transaction, LedgerError> {
        serde_json::from_value::<NewTransaction>(body).unwrap().validate(now())
    }

    #[test]
    fn valid_submission_gets_id_and_default_timestamp() {
        let tx = submit(json!({"type": "credit", "amount": 100, "person": "Harshal", "purpose": "panels"})).unwrap();
        assert_eq!(tx.kind, TransactionKind::Credit);
        assert_eq!(tx.amount, Decimal::from(100));
        assert_eq!(tx.timestamp, now());
        assert_eq!(tx.purpose, "panels");
        assert!(!tx.id.is_empty());
    }

    #[test]
    fn missing_fields_are_listed_together() {
        let err = submit(json!({"purpose": "x"})).unwrap_err();
        assert_eq!(err, LedgerError::MissingFields(vec!["type", "amount", "person"]));
        assert_eq!(err.to_string(), "Missing required fields: type, amount, person");
        let err = submit(json!({"type": "debit", "amount": 5, "person": "   "})).unwrap_err();
        assert_eq!(err.fields(), vec!["person"]);
    }

    #[test]
    fn rejects_bad_values() {
        for tag in ["refund", "DEBIT", " credit"] {
            let bad_type = submit(json!({"type": tag, "amount": 5, "person": "A"})).unwrap_err();
            assert_eq!(bad_type.fields(), vec!["type"], "{tag:?}");
        }
        let zero = submit(json!({"type": "debit", "amount": 0, "person": "A"})).unwrap_err();
        assert_eq!(zero.fields(), vec!["amount"]);
        let negative = submit(json!({"type": "debit", "amount": "-3", "person": "A"})).unwrap_err();
        assert_eq!(negative.fields(), vec!["amount"]);
        let text = submit(json!({"type": "debit", "amount": "lots", "person": "A"})).unwrap_err();
        assert_eq!(text.fields(), vec!["amount"]);
        let when = submit(json!({"type": "debit", "amount": 1, "person": "A", "timestamp": "yesterday"})).unwrap_err();
        assert_eq!(when.fields(), vec!["timestamp"]);
    }

    #[test]
    fn accepts_string_amounts_and_dates() {
        let tx = submit(json!({"type": "debit", "amount": "40.5", "person": "B", "timestamp": "2024-01-31"})).unwrap();
        assert_eq!(tx.kind, TransactionKind::Debit);
        assert_eq!(tx.amount, Decimal::new(405, 1));
        assert_eq!(tx.timestamp, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn person_and_purpose_are_kept_verbatim() {
        let tx = NewTransaction::new(TransactionKind::Credit, 10, "Harshal ")
            .purpose(" Panels ")
            .validate(now())
            .unwrap();
        assert_eq!(tx.person, "Harshal ");
        assert_eq!(tx.purpose, " Panels ");
    }

    #[test]
    fn wire_format_uses_type_and_numbers() {
        let tx = submit(json!({"type": "credit", "amount": 0.1, "person": "A"})).unwrap();
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "credit");
        assert_eq!(value["amount"], json!(0.1));
        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, tx);
    }
}
