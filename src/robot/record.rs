//! Robot Record - a single catalog entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Manufacturer, MediaBlock, RobotDraft, RobotPatch, Specification};

/// Publication status of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    /// Not yet visible; the initial state.
    #[default]
    Draft,
    /// Publicly listed.
    Published,
    /// Soft-deleted: kept in the store but out of published listings.
    Archived,
}

/// Denormalized per-record counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RobotStats {
    /// How often the record was viewed.
    pub views: u64,
    /// How often the record was favorited.
    pub favorites: u64,
}

/// A single robot catalog entry.
///
/// Invariants maintained by the catalog:
/// - `id` is unique and immutable; ids are never reused after deletion.
/// - `slug` is unique across all records at all times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RobotRecord {
    id: u64,
    slug: String,
    name: String,
    #[serde(default)]
    manufacturer: Manufacturer,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    specs: Specification,
    #[serde(default)]
    media: MediaBlock,
    #[serde(default)]
    status: RobotStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    stats: RobotStats,
}

impl RobotRecord {
    /// Materialize a record from a draft with an allocated id and resolved
    /// slug, stamping both timestamps to now.
    pub(crate) fn from_draft(id: u64, slug: String, draft: RobotDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug,
            name: draft.name,
            manufacturer: draft.manufacturer.unwrap_or_default(),
            year: draft.year,
            categories: draft.categories,
            summary: draft.summary,
            description: draft.description,
            specs: draft.specs.unwrap_or_default(),
            media: draft.media.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            stats: RobotStats::default(),
        }
    }

    /// Get the record id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Get the slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the manufacturer block.
    #[must_use]
    pub const fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    /// Get the introduction year, if known.
    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    /// Get the category tags.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get the one-line summary, if set.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Get the long description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the specification block.
    #[must_use]
    pub const fn specs(&self) -> &Specification {
        &self.specs
    }

    /// Get the media block.
    #[must_use]
    pub const fn media(&self) -> &MediaBlock {
        &self.media
    }

    /// Get the publication status.
    #[must_use]
    pub const fn status(&self) -> RobotStatus {
        self.status
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Get the denormalized counters.
    #[must_use]
    pub const fn stats(&self) -> RobotStats {
        self.stats
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// Merge is shallow: a supplied nested block replaces the stored one
    /// wholesale. The slug is intentionally not handled here - the catalog
    /// resolves slug changes against the full record set first and applies
    /// the result via [`set_slug`](Self::set_slug).
    pub(crate) fn apply(&mut self, patch: RobotPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(manufacturer) = patch.manufacturer {
            self.manufacturer = manufacturer;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(specs) = patch.specs {
            self.specs = specs;
        }
        if let Some(media) = patch.media {
            self.media = media;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.touch();
    }

    pub(crate) fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    pub(crate) fn set_status(&mut self, status: RobotStatus) {
        self.status = status;
        self.touch();
    }

    pub(crate) fn record_view(&mut self) {
        self.stats.views += 1;
    }

    pub(crate) fn add_favorite(&mut self) {
        self.stats.favorites += 1;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults() {
        let record = RobotRecord::from_draft(1, "spot".to_string(), RobotDraft::new("Spot"));
        assert_eq!(record.id(), 1);
        assert_eq!(record.slug(), "spot");
        assert_eq!(record.name(), "Spot");
        assert_eq!(record.status(), RobotStatus::Draft);
        assert_eq!(record.stats(), RobotStats::default());
        assert_eq!(record.created_at(), record.updated_at());
    }

    #[test]
    fn test_apply_patch_shallow_merge() {
        let draft = RobotDraft::new("Spot")
            .media(MediaBlock {
                featured: Some(crate::robot::MediaRef::url("https://example.com/a.jpg")),
                images: vec![crate::robot::MediaRef::blob("m1")],
                videos: vec![],
            })
            .summary("Quadruped robot");
        let mut record = RobotRecord::from_draft(1, "spot".to_string(), draft);

        // Patching media replaces the whole block: the old featured image
        // and gallery are discarded, not merged.
        record.apply(RobotPatch::default().media(MediaBlock::default()));
        assert_eq!(record.media(), &MediaBlock::default());

        // Untouched fields survive.
        assert_eq!(record.summary(), Some("Quadruped robot"));
    }

    #[test]
    fn test_apply_empty_patch_touches_only_updated_at() {
        let mut record = RobotRecord::from_draft(1, "spot".to_string(), RobotDraft::new("Spot"));
        let before = record.clone();

        record.apply(RobotPatch::default());

        assert!(record.updated_at() >= before.updated_at());
        assert_eq!(record.name(), before.name());
        assert_eq!(record.slug(), before.slug());
        assert_eq!(record.status(), before.status());
        assert_eq!(record.created_at(), before.created_at());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&RobotStatus::Published).unwrap();
        assert_eq!(json, "\"published\"");
    }
}
