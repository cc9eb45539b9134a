//! Error types for robopedia
//!
//! Failures are raised, never returned as sentinels: callers of the catalog
//! façade must handle `NotFound` and `Validation` explicitly.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Robopedia error types
#[derive(Error, Debug)]
pub enum Error {
    /// The addressed record or blob does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Input failed validation (e.g. missing name on create)
    #[error("validation failed: {0}")]
    Validation(String),

    /// The persisted-state read or write itself failed
    #[error("storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Build a `NotFound` error for a robot addressed by id.
    #[must_use]
    pub fn robot_not_found(id: u64) -> Self {
        Self::NotFound(format!("robot id {id}"))
    }

    /// Build a `NotFound` error for a robot addressed by slug.
    #[must_use]
    pub fn slug_not_found(slug: &str) -> Self {
        Self::NotFound(format!("robot slug '{slug}'"))
    }
}
