//! Robot Patch - input shape for partial updates
//!
//! The merge contract is shallow on purpose: a field that is present in the
//! patch overwrites the stored field wholesale, including nested blocks.
//! A caller updating one image inside `media` must resend the entire media
//! block; the catalog will not deep-merge it.

use serde::{Deserialize, Serialize};

use super::{Manufacturer, MediaBlock, RobotStatus, Specification};

/// Partial update for a record. Absent fields are left untouched.
///
/// Double-optional fields (`year`, `summary`, `description`) distinguish
/// "leave as is" (outer `None`) from "clear the value" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotPatch {
    pub(crate) name: Option<String>,
    pub(crate) slug: Option<String>,
    pub(crate) manufacturer: Option<Manufacturer>,
    pub(crate) year: Option<Option<i32>>,
    pub(crate) categories: Option<Vec<String>>,
    pub(crate) summary: Option<Option<String>>,
    pub(crate) description: Option<Option<String>>,
    pub(crate) specs: Option<Specification>,
    pub(crate) media: Option<MediaBlock>,
    pub(crate) status: Option<RobotStatus>,
}

impl RobotPatch {
    /// Rename the record. The slug is untouched unless patched explicitly.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the slug. Goes through collision resolution, excluding the
    /// record's own current slug.
    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Replace the manufacturer block.
    #[must_use]
    pub fn manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    /// Set or clear the introduction year.
    #[must_use]
    pub const fn year(mut self, year: Option<i32>) -> Self {
        self.year = Some(year);
        self
    }

    /// Replace the category tags.
    #[must_use]
    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Set or clear the summary.
    #[must_use]
    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Set or clear the description.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Replace the specification block wholesale.
    #[must_use]
    pub fn specs(mut self, specs: Specification) -> Self {
        self.specs = Some(specs);
        self
    }

    /// Replace the media block wholesale.
    #[must_use]
    pub fn media(mut self, media: MediaBlock) -> Self {
        self.media = Some(media);
        self
    }

    /// Change the publication status.
    #[must_use]
    pub const fn status(mut self, status: RobotStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether the patch carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.manufacturer.is_none()
            && self.year.is_none()
            && self.categories.is_none()
            && self.summary.is_none()
            && self.description.is_none()
            && self.specs.is_none()
            && self.media.is_none()
            && self.status.is_none()
    }
}
