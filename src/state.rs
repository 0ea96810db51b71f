use crate::config::AppConfig;
use solardocs_documents::{DocumentComposer, InstallationRecord, WorkCompletionRecord};
use solardocs_store::{MemoryStore, MemoryTransactionStore, RecordStore, StoreError, TransactionStore};
use std::sync::Arc;
use std::time::Duration;

pub const WORK_COMPLETION_COLLECTION: &str = "work-completion";
pub const INSTALLATION_COLLECTION: &str = "multi-purpose";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub work_completion: Arc<dyn RecordStore<WorkCompletionRecord>>,
    pub installations: Arc<dyn RecordStore<InstallationRecord>>,
    pub transactions: Arc<dyn TransactionStore>,
    pub composer: DocumentComposer,
    /// Bound on list queries.
    pub list_timeout: Duration,
}

impl AppState {
    /// Opens the stores named by the configured store URL.
    pub async fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let location = solardocs_store::open(&config.store_url).await?;
        log::info!("Using store {:?}", location);
        Ok(Self {
            work_completion: Arc::new(MemoryStore::open(&location, WORK_COMPLETION_COLLECTION).await?),
            installations: Arc::new(MemoryStore::open(&location, INSTALLATION_COLLECTION).await?),
            transactions: Arc::new(MemoryTransactionStore::open(&location).await?),
            composer: DocumentComposer::default(),
            list_timeout: config.list_timeout(),
        })
    }

    /// Fresh in-process stores and the default list bound.
    pub fn in_memory() -> Self {
        Self {
            work_completion: Arc::new(MemoryStore::new(WORK_COMPLETION_COLLECTION)),
            installations: Arc::new(MemoryStore::new(INSTALLATION_COLLECTION)),
            transactions: Arc::new(MemoryTransactionStore::default()),
            composer: DocumentComposer::default(),
            list_timeout: AppConfig::default().list_timeout(),
        }
    }

    pub fn with_list_timeout(self, list_timeout: Duration) -> Self {
        Self { list_timeout, ..self }
    }
}
