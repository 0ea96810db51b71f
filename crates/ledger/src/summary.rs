use crate::aggregate::{compute_balance, compute_totals, group_by_party_with, ExactMatch, PartyKey, PartySummary, Totals};
use crate::amount::serde_float;
use crate::model::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;

/// The ledger as the expense endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSnapshot {
    pub transactions: Vec<Transaction>,
    #[serde(with = "serde_float")]
    pub balance: Decimal,
}

impl LedgerSnapshot {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let balance = compute_balance(&transactions);
        Self { transactions, balance }
    }
}

/// Every derived figure of a ledger, computed in one pass of the
/// aggregation functions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    #[serde(with = "serde_float")]
    pub balance: Decimal,
    pub totals: Totals,
    pub parties: Vec<PartySummary>,
}

impl LedgerSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self::with_key(transactions, &ExactMatch)
    }

    pub fn with_key<K: PartyKey + ?Sized>(transactions: &[Transaction], key: &K) -> Self {
        Self {
            balance: compute_balance(transactions),
            totals: compute_totals(transactions),
            parties: group_by_party_with(transactions, key),
        }
    }

    pub fn party(&self, name: &str) -> Option<&PartySummary> {
        self.parties.iter().find(|p| p.name == name)
    }
}
