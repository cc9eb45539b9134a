//! Storage backends
//!
//! The catalog persists whole JSON values under a small, fixed set of string
//! keys (see [`keys`]), mirroring a browser's durable key-value storage.
//! Every write is a whole-value replacement: callers read the full value,
//! mutate an in-memory copy, and write it back. Two logically concurrent
//! writers on the same key therefore resolve last-write-wins; the store is
//! designed for a single writer and does not guard against this.
//!
//! Backends are synchronous. A read of an absent key is `Ok(None)` (that is
//! the first-run bootstrap signal, not an error); any other failure of the
//! underlying medium surfaces as an error and is never swallowed.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::Result;

/// Well-known storage keys used by the catalog.
pub mod keys {
    /// Ordered JSON array of robot records.
    pub const ROBOTS: &str = "robots";
    /// JSON object mapping blob id to media blob.
    pub const MEDIA: &str = "media";
    /// Monotonic id counter for robot records.
    pub const NEXT_ID: &str = "next_id";
}

/// Synchronous key-value backend for catalog persistence.
///
/// Implementations store opaque JSON strings; serialization happens in the
/// stores layered on top.
pub trait StorageBackend: Send + Sync {
    /// Read the value for `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`, returning whether a value was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Check whether `key` holds a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.read(key)?.is_some())
    }
}
