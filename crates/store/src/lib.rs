//! Persistence for form records and the expense ledger.
//!
//! The HTTP layer only sees the [`RecordStore`] and [`TransactionStore`]
//! traits. The shipped implementation keeps every collection in memory
//! behind a `tokio` lock and, for a `file://` store URL, mirrors each
//! collection to a JSON file after every change.

mod collection;
mod error;
mod location;
mod memory;
mod page;
mod record;

pub use error::StoreError;
pub use location::{open, StoreLocation};
pub use memory::{MemoryStore, MemoryTransactionStore};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use record::{list_with_timeout, RecordStore, Stored, TransactionStore};
