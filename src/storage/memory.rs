//! In-memory backend using `DashMap`.
//!
//! This is the default backend for tests and embedding without durability -
//! data is lost when the process exits. For persistence, use `FileBackend`.

use super::StorageBackend;
use crate::Result;
use dashmap::DashMap;

/// Volatile in-memory key-value backend.
///
/// # Example
///
/// ```rust
/// use robopedia::storage::{MemoryBackend, StorageBackend};
///
/// let backend = MemoryBackend::new();
/// backend.write("robots", "[]")?;
/// assert_eq!(backend.read("robots")?, Some("[]".to_string()));
/// # Ok::<(), robopedia::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, String>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}
