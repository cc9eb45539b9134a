//! Catalog queries - filtered, paginated views over the record sequence
//!
//! Mirrors the list contract of the companion REST layer: optional
//! category / manufacturer / free-text / status filters with 1-based
//! pagination applied after filtering. `list()` on the catalog stays the
//! raw, unpaginated sequence; this is the layer on top.

use crate::robot::{RobotRecord, RobotStatus};

/// Default page size when paginating without an explicit `per_page`.
pub const DEFAULT_PER_PAGE: usize = 12;

/// Filter and pagination parameters for [`Catalog::find`](crate::Catalog::find).
///
/// # Example
///
/// ```rust
/// use robopedia::catalog::RobotQuery;
/// use robopedia::robot::RobotStatus;
///
/// let query = RobotQuery::default()
///     .category("quadruped")
///     .status(RobotStatus::Published)
///     .page(1)
///     .per_page(20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RobotQuery {
    category: Option<String>,
    manufacturer: Option<String>,
    search: Option<String>,
    status: Option<RobotStatus>,
    page: Option<usize>,
    per_page: Option<usize>,
}

impl RobotQuery {
    /// Keep only records tagged with this category (case-insensitive).
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep only records whose manufacturer name contains this text
    /// (case-insensitive).
    #[must_use]
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Keep only records whose name, summary or description contains this
    /// text (case-insensitive).
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Keep only records with this status.
    #[must_use]
    pub const fn status(mut self, status: RobotStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Select a 1-based page. Page 0 is treated as page 1.
    #[must_use]
    pub const fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Whether a record passes every configured filter.
    #[must_use]
    pub fn matches(&self, record: &RobotRecord) -> bool {
        if let Some(status) = self.status {
            if record.status() != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            let wanted = category.to_lowercase();
            if !record
                .categories()
                .iter()
                .any(|c| c.to_lowercase() == wanted)
            {
                return false;
            }
        }
        if let Some(manufacturer) = &self.manufacturer {
            let wanted = manufacturer.to_lowercase();
            let matched = record
                .manufacturer()
                .name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&wanted));
            if !matched {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystacks = [
                Some(record.name()),
                record.summary(),
                record.description(),
            ];
            let matched = haystacks
                .into_iter()
                .flatten()
                .any(|h| h.to_lowercase().contains(&needle));
            if !matched {
                return false;
            }
        }
        true
    }

    /// Apply filters and pagination to an owned record sequence.
    #[must_use]
    pub(crate) fn run(&self, records: Vec<RobotRecord>) -> Page {
        let filtered: Vec<RobotRecord> =
            records.into_iter().filter(|r| self.matches(r)).collect();
        let total = filtered.len();

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let page = self.page.unwrap_or(1).max(1);
        let items = filtered
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Page {
            items,
            total,
            page,
            per_page,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone)]
pub struct Page {
    /// Records on this page, in insertion order.
    pub items: Vec<RobotRecord>,
    /// Total matching records across all pages.
    pub total: usize,
    /// 1-based page number.
    pub page: usize,
    /// Page size used.
    pub per_page: usize,
}

impl Page {
    /// Number of pages needed for all matches.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{Manufacturer, RobotDraft};

    fn record(id: u64, name: &str, category: &str, maker: &str) -> RobotRecord {
        let draft = RobotDraft::new(name)
            .category(category)
            .manufacturer(Manufacturer::named(maker))
            .status(RobotStatus::Published);
        RobotRecord::from_draft(id, crate::slug::slugify(name), draft)
    }

    fn fixtures() -> Vec<RobotRecord> {
        vec![
            record(1, "Spot", "quadruped", "Boston Dynamics"),
            record(2, "Atlas", "humanoid", "Boston Dynamics"),
            record(3, "ASIMO", "humanoid", "Honda"),
        ]
    }

    #[test]
    fn test_query_category_case_insensitive() {
        let page = RobotQuery::default().category("HUMANOID").run(fixtures());
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].name(), "Atlas");
    }

    #[test]
    fn test_query_manufacturer_substring() {
        let page = RobotQuery::default().manufacturer("boston").run(fixtures());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_query_search_matches_name() {
        let page = RobotQuery::default().search("asi").run(fixtures());
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "ASIMO");
    }

    #[test]
    fn test_query_pagination() {
        let page = RobotQuery::default().per_page(2).page(2).run(fixtures());
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), "ASIMO");
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_query_page_zero_is_page_one() {
        let page = RobotQuery::default().page(0).run(fixtures());
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_query_no_filters_passes_everything() {
        let page = RobotQuery::default().run(fixtures());
        assert_eq!(page.total, 3);
    }
}
