use crate::error::StoreError;
use crate::location::StoreLocation;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::{RwLock, RwLockReadGuard};

/// A list of items behind one lock, optionally mirrored to a JSON file.
///
/// Mutations run against a copy; the copy replaces the list only after it
/// has been written out, so memory and file never disagree.
#[derive(Debug)]
pub(crate) struct Collection<T> {
    name: &'static str,
    file: Option<PathBuf>,
    items: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub(crate) fn in_memory(name: &'static str) -> Self {
        Self { name, file: None, items: RwLock::new(Vec::new()) }
    }

    pub(crate) async fn load(location: &StoreLocation, name: &'static str) -> Result<Self, StoreError> {
        let file = location.file_for(name);
        let items = match &file {
            Some(path) => match tokio::fs::read(path).await {
                Ok(bytes) => serde_json::from_slice(&bytes)?,
                Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
                Err(e) => return Err(e.into()),
            },
            None => Vec::new(),
        };
        log::debug!("Loaded {} {} entries", items.len(), name);
        Ok(Self { name, file, items: RwLock::new(items) })
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().await
    }

    pub(crate) async fn mutate<O>(
        &self,
        change: impl FnOnce(&mut Vec<T>) -> Result<O, StoreError>,
    ) -> Result<O, StoreError> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let out = change(&mut next)?;
        self.persist(&next).await?;
        *items = next;
        Ok(out)
    }

    async fn persist(&self, items: &[T]) -> Result<(), StoreError> {
        let Some(path) = &self.file else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(items)?;
        let temp = path.with_extension("json.tmp");
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, path).await?;
        log::trace!("Wrote {} {} entries to {}", items.len(), self.name, path.display());
        Ok(())
    }
}
