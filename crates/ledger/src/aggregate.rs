//! Balance, totals and per-party grouping.
//!
//! All functions are pure and order independent except for the tie-break
//! of [`group_by_party`], which keeps parties with equal net contribution
//! in order of first appearance.

use crate::amount::serde_float;
use crate::model::{Transaction, TransactionKind};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;

/// Sum of credits minus sum of debits.
pub fn compute_balance<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions.into_iter().map(Transaction::signed_amount).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    #[serde(with = "serde_float")]
    pub total_credits: Decimal,
    #[serde(with = "serde_float")]
    pub total_debits: Decimal,
}

impl Totals {
    pub fn net(&self) -> Decimal {
        self.total_credits - self.total_debits
    }

    fn add(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Credit => self.total_credits += tx.amount,
            TransactionKind::Debit => self.total_debits += tx.amount,
        }
    }
}

pub fn compute_totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Totals {
    let mut totals = Totals::default();
    for tx in transactions {
        totals.add(tx);
    }
    totals
}

/// Decides which `person` strings belong to the same party.
///
/// This is the single place where party names are normalised; grouping and
/// filtering both go through it.
pub trait PartyKey {
    fn key<'a>(&self, person: &'a str) -> Cow<'a, str>;
}

/// Exact, case-sensitive matching: `"Harshal "` and `"Harshal"` are two
/// parties.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatch;

impl PartyKey for ExactMatch {
    fn key<'a>(&self, person: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(person)
    }
}

/// Ignores surrounding whitespace and letter case.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimmedCaseInsensitive;

impl PartyKey for TrimmedCaseInsensitive {
    fn key<'a>(&self, person: &'a str) -> Cow<'a, str> {
        let trimmed = person.trim();
        if trimmed.chars().any(char::is_uppercase) {
            Cow::Owned(trimmed.to_lowercase())
        } else {
            Cow::Borrowed(trimmed)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    /// The party name as first seen in the ledger.
    pub name: String,
    #[serde(with = "serde_float")]
    pub total_credits: Decimal,
    #[serde(with = "serde_float")]
    pub total_debits: Decimal,
    #[serde(with = "serde_float")]
    pub net_contribution: Decimal,
    pub transaction_count: usize,
}

/// Groups by exact party name, sorted by net contribution, largest first.
pub fn group_by_party<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Vec<PartySummary> {
    group_by_party_with(transactions, &ExactMatch)
}

pub fn group_by_party_with<'a, K: PartyKey + ?Sized>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: &K,
) -> Vec<PartySummary> {
    let mut groups: IndexMap<Cow<'a, str>, (String, Totals, usize)> = IndexMap::new();
    for tx in transactions {
        let entry = groups
            .entry(key.key(&tx.person))
            .or_insert_with(|| (tx.person.clone(), Totals::default(), 0));
        entry.1.add(tx);
        entry.2 += 1;
    }

    let mut parties: Vec<PartySummary> = groups
        .into_values()
        .map(|(name, totals, count)| PartySummary {
            name,
            total_credits: totals.total_credits,
            total_debits: totals.total_debits,
            net_contribution: totals.net(),
            transaction_count: count,
        })
        .collect();
    // Stable: equal nets keep first-appearance order.
    parties.sort_by(|a, b| b.net_contribution.cmp(&a.net_contribution));
    parties
}

/// The transactions of one party, in ledger order.
pub fn party_transactions<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    party: &str,
) -> Vec<&'a Transaction> {
    party_transactions_with(transactions, party, &ExactMatch)
}

pub fn party_transactions_with<'a, K: PartyKey + ?Sized>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    party: &str,
    key: &K,
) -> Vec<&'a Transaction> {
    let wanted = key.key(party);
    transactions.into_iter().filter(|tx| key.key(&tx.person) == wanted).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(kind: TransactionKind, amount: i64, person: &str) -> Transaction {
        Transaction {
            id: format!("{person}-{amount}"),
            kind,
            amount: Decimal::from(amount),
            person: person.to_string(),
            purpose: String::new(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn credit(amount: i64, person: &str) -> Transaction {
        tx(TransactionKind::Credit, amount, person)
    }

    fn debit(amount: i64, person: &str) -> Transaction {
        tx(TransactionKind::Debit, amount, person)
    }

    fn simple_ledger() -> Vec<Transaction> {
        vec![credit(100, "A"), debit(40, "B"), credit(10, "A")]
    }

    #[test]
    fn empty_ledger() {
        let empty: Vec<Transaction> = Vec::new();
        assert_eq!(compute_balance(&empty), Decimal::ZERO);
        assert_eq!(compute_totals(&empty), Totals::default());
        assert!(group_by_party(&empty).is_empty());
    }

    #[test]
    fn simple_ledger_scenario() {
        let ledger = simple_ledger();
        assert_eq!(compute_balance(&ledger), Decimal::from(70));

        let parties = group_by_party(&ledger);
        assert_eq!(
            parties,
            vec![
                PartySummary {
                    name: "A".into(),
                    total_credits: Decimal::from(110),
                    total_debits: Decimal::ZERO,
                    net_contribution: Decimal::from(110),
                    transaction_count: 2,
                },
                PartySummary {
                    name: "B".into(),
                    total_credits: Decimal::ZERO,
                    total_debits: Decimal::from(40),
                    net_contribution: Decimal::from(-40),
                    transaction_count: 1,
                },
            ]
        );
    }

    #[test]
    fn balance_is_credits_minus_debits_in_any_order() {
        let mut ledger = vec![
            credit(100, "A"),
            debit(40, "B"),
            credit(10, "A"),
            debit(7, "C"),
            credit(3, "C"),
        ];
        let totals = compute_totals(&ledger);
        let expected = compute_balance(&ledger);
        assert_eq!(expected, totals.total_credits - totals.total_debits);
        for _ in 0..ledger.len() {
            ledger.rotate_left(1);
            assert_eq!(compute_balance(&ledger), expected);
        }
        ledger.reverse();
        assert_eq!(compute_balance(&ledger), expected);
    }

    #[test]
    fn party_nets_add_up_to_the_balance() {
        let mut ledger = simple_ledger();
        ledger.push(Transaction { amount: Decimal::new(1, 1), ..credit(0, "D") });
        ledger.push(Transaction { amount: Decimal::new(2, 1), ..debit(0, "E") });
        let parties = group_by_party(&ledger);
        let net_sum: Decimal = parties.iter().map(|p| p.net_contribution).sum();
        let count_sum: usize = parties.iter().map(|p| p.transaction_count).sum();
        assert_eq!(net_sum, compute_balance(&ledger));
        assert_eq!(count_sum, ledger.len());
    }

    #[test]
    fn parties_are_sorted_by_net_with_stable_ties() {
        let ledger = vec![debit(5, "Z"), credit(20, "Y"), credit(20, "X"), debit(5, "W")];
        let names: Vec<_> = group_by_party(&ledger).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Y", "X", "Z", "W"]);
        let parties = group_by_party(&ledger);
        assert!(parties.windows(2).all(|w| w[0].net_contribution >= w[1].net_contribution));
    }

    #[test]
    fn exact_match_keeps_near_duplicates_apart() {
        let ledger = vec![credit(10, "Harshal "), credit(5, "Harshal"), credit(1, "harshal")];
        assert_eq!(group_by_party(&ledger).len(), 3);

        let merged = group_by_party_with(&ledger, &TrimmedCaseInsensitive);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Harshal ");
        assert_eq!(merged[0].net_contribution, Decimal::from(16));
        assert_eq!(party_transactions_with(&ledger, "HARSHAL", &TrimmedCaseInsensitive).len(), 3);
    }

    #[test]
    fn party_transactions_keep_ledger_order() {
        let ledger = simple_ledger();
        let a: Vec<_> = party_transactions(&ledger, "A").into_iter().map(|t| t.amount).collect();
        assert_eq!(a, vec![Decimal::from(100), Decimal::from(10)]);
        assert!(party_transactions(&ledger, "nobody").is_empty());
    }
}
