//! Catalog façade - the single coordinating interface over storage
//!
//! The catalog composes the record store, the media store and the slug
//! allocator behind one API. It holds no record state of its own: every
//! operation is a read-modify-write cycle against the backend, so the
//! backend is always the source of truth.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──open()──> Seeded ──create/update/delete──> Active
//!                              ^                                │
//!                              └───────────── clear() ──────────┘
//! ```
//!
//! Construction is explicit dependency injection via [`CatalogBuilder`];
//! there is no global instance and no implicit first-touch initialization.

mod query;

pub use query::{Page, RobotQuery, DEFAULT_PER_PAGE};

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::media::MediaStore;
use crate::robot::{RobotDraft, RobotPatch, RobotRecord, RobotStatus, RobotStore};
use crate::seed::sample_records;
use crate::slug::unique_slug;
use crate::storage::{MemoryBackend, StorageBackend};
use crate::{Error, Result};

/// The catalog façade.
///
/// # Example
///
/// ```rust
/// use robopedia::{Catalog, robot::RobotDraft};
///
/// let catalog = Catalog::builder().seed(false).open()?;
/// let spot = catalog.create(RobotDraft::new("Spot"))?;
/// assert_eq!(spot.id(), 1);
/// assert_eq!(spot.slug(), "spot");
/// # Ok::<(), robopedia::Error>(())
/// ```
pub struct Catalog {
    robots: RobotStore,
    media: MediaStore,
    seed: bool,
}

/// Builder for [`Catalog`]: pick a backend and a seeding policy, then `open`.
pub struct CatalogBuilder {
    backend: Option<Arc<dyn StorageBackend>>,
    seed: bool,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            backend: None,
            seed: true,
        }
    }
}

impl CatalogBuilder {
    /// Use the given backend. Defaults to a fresh [`MemoryBackend`].
    #[must_use]
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Whether first-run initialization writes the built-in sample records
    /// (default) or an empty catalog.
    #[must_use]
    pub const fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Open the catalog, running first-run initialization if the backend
    /// has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails during initialization.
    pub fn open(self) -> Result<Catalog> {
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(MemoryBackend::new()));
        let catalog = Catalog {
            robots: RobotStore::new(Arc::clone(&backend)),
            media: MediaStore::new(backend),
            seed: self.seed,
        };
        catalog.init()?;
        Ok(catalog)
    }
}

impl Catalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Open a seeded catalog over a fresh in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails.
    pub fn open_in_memory() -> Result<Self> {
        Self::builder().open()
    }

    /// The media blob store, for uploads and blob lookups.
    #[must_use]
    pub const fn media(&self) -> &MediaStore {
        &self.media
    }

    /// All records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn list(&self) -> Result<Vec<RobotRecord>> {
        self.robots.load()
    }

    /// Get a record by id.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id.
    pub fn get(&self, id: u64) -> Result<RobotRecord> {
        self.robots
            .load()?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::robot_not_found(id))
    }

    /// Get a record by slug.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<RobotRecord> {
        self.robots
            .load()?
            .into_iter()
            .find(|r| r.slug() == slug)
            .ok_or_else(|| Error::slug_not_found(slug))
    }

    /// Filtered, paginated listing. See [`RobotQuery`].
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn find(&self, query: &RobotQuery) -> Result<Page> {
        Ok(query.run(self.robots.load()?))
    }

    /// Create a record from a draft.
    ///
    /// Allocates a fresh id, resolves the slug (the draft's slug if given,
    /// else derived from the name) against all existing slugs, stamps both
    /// timestamps and persists.
    ///
    /// # Errors
    ///
    /// `Validation` if the name is empty; otherwise backend failures.
    pub fn create(&self, draft: RobotDraft) -> Result<RobotRecord> {
        if draft.name.trim().is_empty() {
            return Err(Error::Validation("robot name is required".to_string()));
        }

        let mut records = self.robots.load()?;

        let candidate = draft.slug.clone().unwrap_or_else(|| draft.name.clone());
        let slug = unique_slug(&candidate, |s| records.iter().any(|r| r.slug() == s));
        let id = self.robots.next_id(&records)?;

        let record = RobotRecord::from_draft(id, slug, draft);
        debug!(id, slug = record.slug(), "creating robot record");
        records.push(record.clone());
        self.robots.save(&records)?;
        Ok(record)
    }

    /// Partially update a record.
    ///
    /// A supplied slug that differs from the current one is re-resolved for
    /// uniqueness, excluding the record's own slug (so re-submitting the
    /// current slug is a no-op, not a rename to `slug-1`). The rest of the
    /// patch merges shallowly; `updated_at` refreshes even for an empty
    /// patch.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id; otherwise backend failures.
    pub fn update(&self, id: u64, patch: RobotPatch) -> Result<RobotRecord> {
        let mut records = self.robots.load()?;
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::robot_not_found(id))?;

        if let Some(candidate) = patch.slug.clone() {
            let slug = unique_slug(&candidate, |s| {
                records.iter().any(|r| r.id() != id && r.slug() == s)
            });
            records[idx].set_slug(slug);
        }

        records[idx].apply(patch);
        let record = records[idx].clone();
        debug!(id, slug = record.slug(), "updated robot record");
        self.robots.save(&records)?;
        Ok(record)
    }

    /// Hard-delete a record.
    ///
    /// Referenced media blobs are left untouched; use
    /// [`sweep_orphaned_media`](Self::sweep_orphaned_media) to clean up.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id; otherwise backend failures.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut records = self.robots.load()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(Error::robot_not_found(id));
        }
        debug!(id, "deleted robot record");
        self.robots.save(&records)
    }

    /// Archive a record: the soft-delete. The record stays in the store but
    /// drops out of published listings.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id; otherwise backend failures.
    pub fn archive(&self, id: u64) -> Result<RobotRecord> {
        self.with_record(id, |r| r.set_status(RobotStatus::Archived))
    }

    /// Count a view for the record with this slug, returning it updated.
    ///
    /// Kept separate from [`get_by_slug`](Self::get_by_slug) so plain reads
    /// stay side-effect free. Does not refresh `updated_at`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this slug; otherwise backend failures.
    pub fn record_view(&self, slug: &str) -> Result<RobotRecord> {
        let mut records = self.robots.load()?;
        let idx = records
            .iter()
            .position(|r| r.slug() == slug)
            .ok_or_else(|| Error::slug_not_found(slug))?;
        records[idx].record_view();
        let record = records[idx].clone();
        self.robots.save(&records)?;
        Ok(record)
    }

    /// Count a favorite for a record, returning it updated.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id; otherwise backend failures.
    pub fn add_favorite(&self, id: u64) -> Result<RobotRecord> {
        self.with_record(id, RobotRecord::add_favorite)
    }

    /// Delete every blob no record references, returning the removed ids.
    ///
    /// Record deletion deliberately leaves blobs behind; this sweep is the
    /// explicit cleanup path.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn sweep_orphaned_media(&self) -> Result<Vec<String>> {
        let records = self.robots.load()?;
        let referenced: HashSet<&str> = records
            .iter()
            .flat_map(|r| r.media().blob_ids())
            .collect();
        let removed = self.media.retain(&referenced)?;
        if !removed.is_empty() {
            info!(count = removed.len(), "swept orphaned media blobs");
        }
        Ok(removed)
    }

    /// Wipe all state and run first-run initialization again, honoring the
    /// seeding policy the catalog was opened with.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn clear(&self) -> Result<()> {
        self.robots.wipe()?;
        self.media.wipe()?;
        self.init()
    }

    fn init(&self) -> Result<()> {
        if !self.robots.is_initialized()? {
            let records = if self.seed {
                sample_records()
            } else {
                Vec::new()
            };
            let next_id = records.iter().map(RobotRecord::id).max().map_or(1, |m| m + 1);
            self.robots.save(&records)?;
            self.robots.write_next_id(next_id)?;
            info!(records = records.len(), "initialized catalog storage");
        }
        self.media.init_empty()
    }

    fn with_record(
        &self,
        id: u64,
        mutate: impl FnOnce(&mut RobotRecord),
    ) -> Result<RobotRecord> {
        let mut records = self.robots.load()?;
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::robot_not_found(id))?;
        mutate(&mut records[idx]);
        let record = records[idx].clone();
        self.robots.save(&records)?;
        Ok(record)
    }
}
