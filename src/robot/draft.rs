//! Robot Draft - input shape for record creation

use serde::{Deserialize, Serialize};

use super::{Manufacturer, MediaBlock, RobotStatus, Specification};

/// Input for creating a record.
///
/// Only `name` is required; the catalog fills in everything else (id, slug,
/// timestamps, default blocks). A caller-supplied slug overrides derivation
/// from the name but still goes through collision resolution.
///
/// # Example
///
/// ```rust
/// use robopedia::robot::{Manufacturer, RobotDraft};
///
/// let draft = RobotDraft::new("Spot")
///     .manufacturer(Manufacturer::named("Boston Dynamics"))
///     .year(2019)
///     .category("quadruped")
///     .summary("Agile mobile robot");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotDraft {
    pub(crate) name: String,
    pub(crate) slug: Option<String>,
    pub(crate) manufacturer: Option<Manufacturer>,
    pub(crate) year: Option<i32>,
    pub(crate) categories: Vec<String>,
    pub(crate) summary: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) specs: Option<Specification>,
    pub(crate) media: Option<MediaBlock>,
    pub(crate) status: Option<RobotStatus>,
}

impl Default for RobotDraft {
    fn default() -> Self {
        Self::new("")
    }
}

impl RobotDraft {
    /// Start a draft with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            manufacturer: None,
            year: None,
            categories: Vec::new(),
            summary: None,
            description: None,
            specs: None,
            media: None,
            status: None,
        }
    }

    /// Override the derived slug. Still subject to collision resolution.
    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the manufacturer block.
    #[must_use]
    pub fn manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    /// Set the introduction year.
    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Add a category tag.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Set the one-line summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the long description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the specification block.
    #[must_use]
    pub fn specs(mut self, specs: Specification) -> Self {
        self.specs = Some(specs);
        self
    }

    /// Set the media block.
    #[must_use]
    pub fn media(mut self, media: MediaBlock) -> Self {
        self.media = Some(media);
        self
    }

    /// Set the initial status (defaults to Draft).
    #[must_use]
    pub const fn status(mut self, status: RobotStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_builder_chain() {
        let draft = RobotDraft::new("Spot")
            .slug("spot-mini")
            .year(2019)
            .category("quadruped")
            .category("industrial")
            .status(RobotStatus::Published);

        assert_eq!(draft.name, "Spot");
        assert_eq!(draft.slug.as_deref(), Some("spot-mini"));
        assert_eq!(draft.categories, vec!["quadruped", "industrial"]);
        assert_eq!(draft.status, Some(RobotStatus::Published));
    }

    #[test]
    fn test_draft_deserialize_name_only() {
        let draft: RobotDraft = serde_json::from_str(r#"{"name":"ASIMO"}"#).unwrap();
        assert_eq!(draft.name, "ASIMO");
        assert!(draft.slug.is_none());
        assert!(draft.categories.is_empty());
    }
}
