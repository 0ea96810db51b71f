//! Store interfaces.

use crate::error::StoreError;
use crate::page::{Page, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solardocs_ledger::Transaction;
use std::time::Duration;

/// A record as it is stored and returned: server-assigned id and creation
/// time next to the record's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<R> {
    #[serde(alias = "_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: R,
}

/// Create, read, delete and list for one kind of form record.
///
/// There is no update: a changed record is created again.
#[async_trait]
pub trait RecordStore<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    async fn create(&self, record: R) -> Result<Stored<R>, StoreError>;

    async fn get(&self, id: &str) -> Result<Stored<R>, StoreError>;

    /// Removes the record and returns it. An unknown id is
    /// [`StoreError::NotFound`], also when it was deleted a moment ago.
    async fn delete(&self, id: &str) -> Result<Stored<R>, StoreError>;

    /// Newest first.
    async fn list(&self, request: PageRequest) -> Result<Page<Stored<R>>, StoreError>;
}

/// The append-only expense ledger.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn append(&self, transaction: Transaction) -> Result<Transaction, StoreError>;

    async fn delete(&self, id: &str) -> Result<Transaction, StoreError>;

    /// Every transaction, newest timestamp first.
    async fn all(&self) -> Result<Vec<Transaction>, StoreError>;
}

/// Runs a list query under a time bound.
///
/// When the bound passes first the query future is dropped and the caller
/// gets [`StoreError::Timeout`]; there is no partial result.
pub async fn list_with_timeout<R>(
    store: &dyn RecordStore<R>,
    request: PageRequest,
    bound: Duration,
) -> Result<Page<Stored<R>>, StoreError>
where
    R: Send + Sync + 'static,
{
    match tokio::time::timeout(bound, store.list(request)).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("List query abandoned after {}ms", bound.as_millis());
            Err(StoreError::Timeout(bound))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Form {
        consumer_name: String,
    }

    struct SlowStore;

    #[async_trait]
    impl RecordStore<Form> for SlowStore {
        async fn create(&self, _record: Form) -> Result<Stored<Form>, StoreError> {
            unimplemented!()
        }

        async fn get(&self, id: &str) -> Result<Stored<Form>, StoreError> {
            Err(StoreError::NotFound(id.to_string()))
        }

        async fn delete(&self, id: &str) -> Result<Stored<Form>, StoreError> {
            Err(StoreError::NotFound(id.to_string()))
        }

        async fn list(&self, request: PageRequest) -> Result<Page<Stored<Form>>, StoreError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(request.slice(&[]))
        }
    }

    #[test]
    fn envelope_flattens_the_record() {
        let stored = Stored {
            id: "r1".to_string(),
            created_at: "2024-03-05T10:00:00Z".parse().unwrap(),
            record: Form { consumer_name: "Asha Patil".into() },
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(
            value,
            json!({ "id": "r1", "createdAt": "2024-03-05T10:00:00Z", "consumerName": "Asha Patil" })
        );
        let back: Stored<Form> = serde_json::from_value(value).unwrap();
        assert_eq!(back, stored);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_list_times_out() {
        let err = list_with_timeout(&SlowStore, PageRequest::default(), Duration::from_millis(5000))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Timeout(d) if d == Duration::from_millis(5000)));
        assert_eq!(err.to_string(), "Query did not finish within 5000ms");
    }
}
