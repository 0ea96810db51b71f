use crate::error::StoreError;
use std::path::{Path, PathBuf};

/// Where the stores keep their data, parsed from a store URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreLocation {
    /// `memory://`: nothing survives a restart.
    #[default]
    Memory,
    /// `file:///<dir>`: one JSON file per collection in `dir`.
    Directory(PathBuf),
}

impl StoreLocation {
    pub fn parse(url: &str) -> Result<Self, StoreError> {
        let url = url.trim();
        if url.is_empty() || url == "memory://" || url == "memory" {
            return Ok(StoreLocation::Memory);
        }
        match url.strip_prefix("file://") {
            Some(path) if !path.is_empty() => Ok(StoreLocation::Directory(PathBuf::from(path))),
            _ => Err(StoreError::UnsupportedUrl(url.to_string())),
        }
    }

    /// File backing `collection`, if the location persists anything.
    pub fn file_for(&self, collection: &str) -> Option<PathBuf> {
        match self {
            StoreLocation::Memory => None,
            StoreLocation::Directory(dir) => Some(dir.join(format!("{collection}.json"))),
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        match self {
            StoreLocation::Memory => None,
            StoreLocation::Directory(dir) => Some(dir),
        }
    }
}

/// Parses `url` and makes sure a persistence directory exists.
pub async fn open(url: &str) -> Result<StoreLocation, StoreError> {
    let location = StoreLocation::parse(url)?;
    if let Some(dir) = location.directory() {
        tokio::fs::create_dir_all(dir).await?;
        log::info!("Persisting records below {}", dir.display());
    } else {
        log::info!("Records are kept in memory only");
    }
    Ok(location)
}
