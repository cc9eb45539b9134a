//! Record Store - persistence for the robot array and id counter
//!
//! The store owns two keys: the full ordered record array and the monotonic
//! id counter. Every mutation is a whole-array write; the catalog façade on
//! top does read-modify-write cycles through `load`/`save`.

use std::sync::Arc;

use tracing::error;

use super::RobotRecord;
use crate::storage::{keys, StorageBackend};
use crate::{Error, Result};

/// Persistent store for robot records.
///
/// Exclusively owns the `robots` and `next_id` keys of its backend.
#[derive(Clone)]
pub struct RobotStore {
    backend: Arc<dyn StorageBackend>,
}

impl RobotStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Whether the record array has ever been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn is_initialized(&self) -> Result<bool> {
        self.backend.contains(keys::ROBOTS)
    }

    /// Load the full ordered record array.
    ///
    /// An absent key is an error here: initialization (seeding) must have
    /// run first, so a missing array means the store was bypassed.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if uninitialized, or the backend/deserialization
    /// failure.
    pub fn load(&self) -> Result<Vec<RobotRecord>> {
        let raw = self.backend.read(keys::ROBOTS)?.ok_or_else(|| {
            Error::Storage("record store is not initialized".to_string())
        })?;
        let records = serde_json::from_str(&raw).map_err(|e| {
            error!(error = %e, "corrupt robot array in storage");
            Error::Serde(e)
        })?;
        Ok(records)
    }

    /// Persist the full record array, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend fails.
    pub fn save(&self, records: &[RobotRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.write(keys::ROBOTS, &raw).map_err(|e| {
            error!(error = %e, "failed to persist robot array");
            e
        })
    }

    /// Allocate the next record id.
    ///
    /// Reads the persisted counter, reconciles it against the ids actually
    /// present (so a stale counter can never hand out a duplicate), persists
    /// counter+1 and returns the allocated value. Ids are never reused after
    /// deletion because the counter only moves forward.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn next_id(&self, records: &[RobotRecord]) -> Result<u64> {
        let persisted = self.peek_next_id()?;
        let floor = records.iter().map(RobotRecord::id).max().map_or(1, |m| m + 1);
        let id = persisted.max(floor);
        self.write_next_id(id + 1)?;
        Ok(id)
    }

    /// Read the counter without allocating. Absent counter means 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the counter is corrupt.
    pub fn peek_next_id(&self) -> Result<u64> {
        match self.backend.read(keys::NEXT_ID)? {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| Error::Storage(format!("corrupt id counter '{raw}': {e}"))),
            None => Ok(1),
        }
    }

    pub(crate) fn write_next_id(&self, value: u64) -> Result<()> {
        self.backend.write(keys::NEXT_ID, &value.to_string())
    }

    pub(crate) fn wipe(&self) -> Result<()> {
        self.backend.remove(keys::ROBOTS)?;
        self.backend.remove(keys::NEXT_ID)?;
        Ok(())
    }
}
