//! Media Blob Store - persistence for uploaded files
//!
//! Blobs live in a single JSON object keyed by blob id. Ids are allocated
//! at store time from the upload timestamp plus a random suffix; collisions
//! are negligible, not impossible, so allocation retries on the (unlikely)
//! clash with an existing id.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, error};

use super::MediaBlob;
use crate::storage::{keys, StorageBackend};
use crate::{Error, Result};

/// Persistent store for media blobs.
///
/// Exclusively owns the `media` key of its backend. Blob deletion is
/// idempotent and nothing here is ever garbage-collected automatically;
/// orphan cleanup is an explicit catalog operation.
#[derive(Clone)]
pub struct MediaStore {
    backend: Arc<dyn StorageBackend>,
}

impl MediaStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store an uploaded file, returning the allocated blob id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn store(
        &self,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Result<String> {
        self.store_encoded(filename, mime_type, MediaBlob::encode(bytes))
    }

    /// Store an already base64-encoded payload, returning the blob id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn store_encoded(
        &self,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        encoded: String,
    ) -> Result<String> {
        let mut blobs = self.load()?;

        let mut id = allocate_id();
        while blobs.contains_key(&id) {
            id = allocate_id();
        }

        let blob = MediaBlob::new(id.clone(), filename, mime_type, encoded);
        debug!(blob_id = %id, filename = blob.filename(), "storing media blob");
        blobs.insert(id.clone(), blob);
        self.save(&blobs)?;
        Ok(id)
    }

    /// Get a blob by id, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn get(&self, id: &str) -> Result<Option<MediaBlob>> {
        Ok(self.load()?.remove(id))
    }

    /// Delete a blob by id.
    ///
    /// Idempotent: returns `false` without error when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut blobs = self.load()?;
        let removed = blobs.remove(id).is_some();
        if removed {
            self.save(&blobs)?;
        }
        Ok(removed)
    }

    /// All stored blob ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }

    /// Number of stored blobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Whether no blobs are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    /// Delete every blob whose id is not in `referenced`, returning the
    /// removed ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn retain(&self, referenced: &std::collections::HashSet<&str>) -> Result<Vec<String>> {
        let mut blobs = self.load()?;
        let orphans: Vec<String> = blobs
            .keys()
            .filter(|id| !referenced.contains(id.as_str()))
            .cloned()
            .collect();
        if !orphans.is_empty() {
            for id in &orphans {
                blobs.remove(id);
            }
            self.save(&blobs)?;
        }
        Ok(orphans)
    }

    pub(crate) fn init_empty(&self) -> Result<()> {
        if !self.backend.contains(keys::MEDIA)? {
            self.save(&BTreeMap::new())?;
        }
        Ok(())
    }

    pub(crate) fn wipe(&self) -> Result<()> {
        self.backend.remove(keys::MEDIA)?;
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, MediaBlob>> {
        match self.backend.read(keys::MEDIA)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                error!(error = %e, "corrupt media map in storage");
                Error::Serde(e)
            }),
            None => Ok(BTreeMap::new()),
        }
    }

    fn save(&self, blobs: &BTreeMap<String, MediaBlob>) -> Result<()> {
        let raw = serde_json::to_string(blobs)?;
        self.backend.write(keys::MEDIA, &raw).map_err(|e| {
            error!(error = %e, "failed to persist media map");
            e
        })
    }
}

/// Timestamp + random suffix. Unique enough for a single-writer store.
fn allocate_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("m{}-{}", Utc::now().timestamp_millis(), suffix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use std::collections::HashSet;

    fn store() -> MediaStore {
        MediaStore::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_store_and_get() {
        let media = store();
        let id = media.store("spot.png", "image/png", b"bytes").unwrap();

        let blob = media.get(&id).unwrap().expect("blob present");
        assert_eq!(blob.id(), id);
        assert_eq!(blob.filename(), "spot.png");
        assert_eq!(blob.mime_type(), "image/png");
        assert_eq!(blob.decode().unwrap(), b"bytes");
    }

    #[test]
    fn test_get_absent_is_none() {
        let media = store();
        assert!(media.get("m0-zzzzzz").unwrap().is_none());
    }

    #[test]
    fn test_delete_idempotent() {
        let media = store();
        let id = media.store("a.png", "image/png", b"x").unwrap();

        assert!(media.delete(&id).unwrap());
        assert!(!media.delete(&id).unwrap());
        assert!(media.get(&id).unwrap().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let media = store();
        let a = media.store("a.png", "image/png", b"a").unwrap();
        let b = media.store("b.png", "image/png", b"b").unwrap();
        assert_ne!(a, b);
        assert_eq!(media.len().unwrap(), 2);
    }

    #[test]
    fn test_retain_removes_unreferenced() {
        let media = store();
        let keep = media.store("keep.png", "image/png", b"k").unwrap();
        let orphan = media.store("orphan.png", "image/png", b"d").unwrap();

        let referenced: HashSet<&str> = [keep.as_str()].into();
        let removed = media.retain(&referenced).unwrap();

        assert_eq!(removed, vec![orphan.clone()]);
        assert!(media.get(&keep).unwrap().is_some());
        assert!(media.get(&orphan).unwrap().is_none());
    }
}
