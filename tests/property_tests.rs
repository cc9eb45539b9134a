//! Property-based tests for slug allocation and catalog invariants.
//!
//! Run with `ProptestConfig::with_cases(100)` to stay fast enough for a
//! pre-commit hook.

use std::collections::HashSet;

use proptest::prelude::*;
use robopedia::robot::{RobotDraft, RobotRecord};
use robopedia::slug::{slugify, unique_slug};
use robopedia::Catalog;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: slugify is idempotent.
    #[test]
    fn prop_slugify_idempotent(input in ".{0,64}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    /// Property: slugify output stays inside [a-z0-9_-], with no hyphen
    /// runs and no hyphens at the edges.
    #[test]
    fn prop_slugify_charset(input in ".{0,64}") {
        let slug = slugify(&input);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    /// Property: unique_slug never returns a taken slug, and returns the
    /// plain base when the base is free.
    #[test]
    fn prop_unique_slug_avoids_taken(
        candidate in "[a-zA-Z ]{1,20}",
        suffixes in proptest::collection::vec(0u64..10, 0..8),
    ) {
        let base = {
            let s = slugify(&candidate);
            if s.is_empty() { "robot".to_string() } else { s }
        };
        let taken: HashSet<String> = suffixes
            .iter()
            .map(|n| if *n == 0 { base.clone() } else { format!("{base}-{n}") })
            .collect();

        let resolved = unique_slug(&candidate, |s| taken.contains(s));
        prop_assert!(!taken.contains(&resolved));
        if !taken.contains(&base) {
            prop_assert_eq!(resolved, base);
        }
    }

    /// Property: creating records with arbitrary names keeps every slug
    /// and id unique across the catalog.
    #[test]
    fn prop_create_keeps_slugs_and_ids_unique(
        names in proptest::collection::vec("[a-zA-Z0-9 !?]{1,12}", 1..12),
    ) {
        let catalog = Catalog::builder().seed(false).open().unwrap();
        for name in &names {
            // Whitespace-only names are rejected; skip those inputs.
            if name.trim().is_empty() {
                continue;
            }
            catalog.create(RobotDraft::new(name.clone())).unwrap();
        }

        let records = catalog.list().unwrap();
        let slugs: HashSet<&str> = records.iter().map(RobotRecord::slug).collect();
        let ids: HashSet<u64> = records.iter().map(RobotRecord::id).collect();
        prop_assert_eq!(slugs.len(), records.len());
        prop_assert_eq!(ids.len(), records.len());
    }

    /// Property: a created record's slug equals slugify(name) whenever no
    /// collision exists.
    #[test]
    fn prop_first_create_uses_derived_slug(name in "[a-zA-Z][a-zA-Z0-9 ]{0,20}") {
        let catalog = Catalog::builder().seed(false).open().unwrap();
        let record = catalog.create(RobotDraft::new(name.clone())).unwrap();
        let derived = slugify(&name);
        if !derived.is_empty() {
            prop_assert_eq!(record.slug(), derived);
        }
    }
}
