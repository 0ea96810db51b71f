//! The shared-expense ledger.
//!
//! A ledger is an append-only list of credit and debit [`Transaction`]s.
//! Everything else (balance, totals, per-party contributions) is derived by
//! the functions in [`aggregate`], which are the only aggregation code in
//! the workspace: the JSON views and the PDF exports both call them.

pub mod aggregate;
pub mod amount;
mod error;
mod model;
mod summary;

pub use aggregate::{
    compute_balance, compute_totals, group_by_party, group_by_party_with, party_transactions,
    party_transactions_with, ExactMatch, PartyKey, PartySummary, Totals, TrimmedCaseInsensitive,
};
pub use amount::{format_amount, parse_amount, signed_amount};
pub use error::LedgerError;
pub use model::{NewTransaction, Transaction, TransactionKind};
pub use summary::{LedgerSnapshot, LedgerSummary};

pub use rust_decimal::Decimal;
