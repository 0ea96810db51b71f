use crate::error::ResourceError;
use std::fmt::Debug;
use std::sync::Arc;

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// Resolves an image source string to its raw bytes.
///
/// Implementations are called from blocking worker threads, so they may do
/// synchronous I/O.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, source: &str) -> Result<SharedResourceData, ResourceError>;

    /// Name of the provider, used in log messages.
    fn name(&self) -> &'static str;
}
