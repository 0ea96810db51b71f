//! In-process stores.

use crate::collection::Collection;
use crate::error::StoreError;
use crate::location::StoreLocation;
use crate::page::{Page, PageRequest};
use crate::record::{RecordStore, Stored, TransactionStore};
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use solardocs_ledger::Transaction;
use std::fmt;
use uuid::Uuid;

/// A [`RecordStore`] over one in-memory collection.
pub struct MemoryStore<R> {
    collection: Collection<Stored<R>>,
}

impl<R> fmt::Debug for MemoryStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

impl<R> MemoryStore<R>
where
    R: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// A store that keeps nothing beyond the process.
    pub fn new(name: &'static str) -> Self {
        Self { collection: Collection::in_memory(name) }
    }

    /// Opens the `name` collection at `location`, loading what was
    /// persisted before.
    pub async fn open(location: &StoreLocation, name: &'static str) -> Result<Self, StoreError> {
        Ok(Self { collection: Collection::load(location, name).await? })
    }
}

#[async_trait]
impl<R> RecordStore<R> for MemoryStore<R>
where
    R: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn create(&self, record: R) -> Result<Stored<R>, StoreError> {
        let stored = Stored {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            record,
        };
        let copy = stored.clone();
        self.collection
            .mutate(move |items| {
                items.push(copy);
                Ok(())
            })
            .await?;
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<Stored<R>, StoreError> {
        self.collection
            .read()
            .await
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<Stored<R>, StoreError> {
        self.collection
            .mutate(|items| {
                let index = items
                    .iter()
                    .position(|stored| stored.id == id)
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
                Ok(items.remove(index))
            })
            .await
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Stored<R>>, StoreError> {
        let items = self.collection.read().await;
        // Later insertions first, so equal timestamps also read newest first.
        let mut ordered: Vec<&Stored<R>> = items.iter().rev().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(request.slice(&ordered).map(|stored| stored.clone()))
    }
}

/// The expense ledger kept in memory.
#[derive(Debug)]
pub struct MemoryTransactionStore {
    collection: Collection<Transaction>,
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self { collection: Collection::in_memory(Self::COLLECTION) }
    }
}

impl MemoryTransactionStore {
    pub const COLLECTION: &'static str = "expenses";

    pub async fn open(location: &StoreLocation) -> Result<Self, StoreError> {
        Ok(Self { collection: Collection::load(location, Self::COLLECTION).await? })
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn append(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        let copy = transaction.clone();
        self.collection
            .mutate(move |items| {
                items.push(copy);
                Ok(())
            })
            .await?;
        Ok(transaction)
    }

    async fn delete(&self, id: &str) -> Result<Transaction, StoreError> {
        self.collection
            .mutate(|items| {
                let index = items
                    .iter()
                    .position(|tx| tx.id == id)
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
                Ok(items.remove(index))
            })
            .await
    }

    async fn all(&self) -> Result<Vec<Transaction>, StoreError> {
        let items = self.collection.read().await;
        let mut ordered: Vec<Transaction> = items.iter().rev().cloned().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(ordered)
    }
}
