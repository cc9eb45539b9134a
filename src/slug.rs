//! Slug allocation
//!
//! Slugs are the URL-safe, human-readable identifiers derived from a record's
//! name. `slugify` is a pure, deterministic transform; `unique_slug` layers
//! collision resolution on top of it against whatever set of slugs the caller
//! considers taken.

/// Convert free text into a URL-safe slug.
///
/// Lowercases, replaces whitespace runs with a single hyphen, drops every
/// character outside `[a-z0-9_-]`, collapses repeated hyphens, and trims
/// leading/trailing hyphens.
///
/// Idempotent: `slugify(slugify(x)) == slugify(x)`.
///
/// # Example
///
/// ```rust
/// use robopedia::slug::slugify;
///
/// assert_eq!(slugify("Spot Mini (v2)"), "spot-mini-v2");
/// assert_eq!(slugify("  --ASIMO--  "), "asimo");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        }
        // Anything else is stripped without producing a hyphen.
    }

    out
}

/// Resolve a unique slug starting from `slugify(candidate)`.
///
/// If the base slug is taken, tries `base-1`, `base-2`, … in increasing
/// order and returns the first free one. `is_taken` decides what counts as
/// a collision; when renaming an existing record, the caller must exclude
/// the record's own current slug so a record never collides with itself.
///
/// An empty candidate falls back to `"robot"` before collision resolution.
#[must_use]
pub fn unique_slug(candidate: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut base = slugify(candidate);
    if base.is_empty() {
        base = "robot".to_string();
    }

    if !is_taken(&base) {
        return base;
    }

    let mut n: u64 = 1;
    loop {
        let attempt = format!("{base}-{n}");
        if !is_taken(&attempt) {
            return attempt;
        }
        n += 1;
    }
}
