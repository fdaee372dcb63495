//! Dictionary abstraction layer for gloss.
//!
//! This crate decouples abbreviation resolution from the store that holds
//! explanation pages. One trait forms the core API:
//!
//! - [`DictLookup`]: read-only access to named dictionary pages
//!
//! # Implementations
//!
//! - [`NullDicts`]: no-op implementation (every lookup misses)
//! - [`MemoryDicts`]: in-memory page map, loadable from definition-list
//!   page source via [`parse_definitions`]
//!
//! A dictionary page maps abbreviation keys to explanation strings. Pages
//! are identified by name; the page consulted when a directive carries no
//! explicit override is [`DEFAULT_PAGE`].
//!
//! # Example
//!
//! ```
//! use gloss_dict::{DictLookup, MemoryDicts, DEFAULT_PAGE};
//!
//! let mut dicts = MemoryDicts::new();
//! dicts.insert(DEFAULT_PAGE, "WAI", "Web Accessibility Initiative");
//!
//! assert_eq!(
//!     dicts.lookup(DEFAULT_PAGE, "WAI").as_deref(),
//!     Some("Web Accessibility Initiative")
//! );
//! assert_eq!(dicts.lookup("OtherPage", "WAI"), None);
//! ```

mod definitions;
pub use definitions::parse_definitions;

use std::collections::{BTreeMap, HashMap};

/// Name of the dictionary page consulted when no override is configured.
pub const DEFAULT_PAGE: &str = "AbbrDict";

/// Read-only access to named dictionary pages.
///
/// A lookup is side-effect-free from the caller's perspective. Returning
/// `None` means either the page or the key is absent; callers treat both
/// the same way. Implementations may cache or memoize internally.
pub trait DictLookup: Send + Sync {
    /// Look up the explanation for `key` on the page named `page`.
    ///
    /// Returns `None` when the page does not exist or holds no entry for
    /// the key.
    fn lookup(&self, page: &str, key: &str) -> Option<String>;
}

/// No-op [`DictLookup`] that misses every lookup.
///
/// Use when abbreviation resolution should rely on inline explanations
/// only, or in tests that exercise the fallback path.
pub struct NullDicts;

impl DictLookup for NullDicts {
    fn lookup(&self, _page: &str, _key: &str) -> Option<String> {
        None
    }
}

/// In-memory [`DictLookup`] backed by a page map.
///
/// Entries within a page are kept sorted by key so serialized output and
/// debug dumps are deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryDicts {
    pages: HashMap<String, BTreeMap<String, String>>,
}

impl MemoryDicts {
    /// Create an empty dictionary set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single entry, creating the page if needed.
    ///
    /// Overwrites any existing entry for the same key on the same page.
    pub fn insert(
        &mut self,
        page: impl Into<String>,
        key: impl Into<String>,
        explanation: impl Into<String>,
    ) {
        self.pages
            .entry(page.into())
            .or_default()
            .insert(key.into(), explanation.into());
    }

    /// Load a page from definition-list source (see [`parse_definitions`]).
    ///
    /// Replaces any page previously stored under the same name.
    pub fn insert_page_source(&mut self, page: impl Into<String>, source: &str) {
        self.pages.insert(page.into(), parse_definitions(source));
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with_entry(
        mut self,
        page: impl Into<String>,
        key: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        self.insert(page, key, explanation);
        self
    }

    /// Number of entries on a page, or `None` if the page is absent.
    #[must_use]
    pub fn page_len(&self, page: &str) -> Option<usize> {
        self.pages.get(page).map(BTreeMap::len)
    }
}

impl DictLookup for MemoryDicts {
    fn lookup(&self, page: &str, key: &str) -> Option<String> {
        self.pages.get(page)?.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_dicts_always_miss() {
        let dicts = NullDicts;
        assert_eq!(dicts.lookup(DEFAULT_PAGE, "WAI"), None);
        assert_eq!(dicts.lookup("", ""), None);
    }

    #[test]
    fn test_memory_dicts_hit_and_miss() {
        let mut dicts = MemoryDicts::new();
        dicts.insert(DEFAULT_PAGE, "WAI", "Web Accessibility Initiative");

        assert_eq!(
            dicts.lookup(DEFAULT_PAGE, "WAI").as_deref(),
            Some("Web Accessibility Initiative")
        );
        assert_eq!(dicts.lookup(DEFAULT_PAGE, "W3C"), None);
        assert_eq!(dicts.lookup("MissingPage", "WAI"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut dicts = MemoryDicts::new();
        dicts.insert("P", "K", "first");
        dicts.insert("P", "K", "second");
        assert_eq!(dicts.lookup("P", "K").as_deref(), Some("second"));
    }

    #[test]
    fn test_pages_are_isolated() {
        let dicts = MemoryDicts::new()
            .with_entry("A", "KEY", "from A")
            .with_entry("B", "KEY", "from B");

        assert_eq!(dicts.lookup("A", "KEY").as_deref(), Some("from A"));
        assert_eq!(dicts.lookup("B", "KEY").as_deref(), Some("from B"));
    }

    #[test]
    fn test_insert_page_source_replaces_page() {
        let mut dicts = MemoryDicts::new();
        dicts.insert("P", "OLD", "stale entry");
        dicts.insert_page_source("P", " WAI:: Web Accessibility Initiative\n");

        assert_eq!(dicts.lookup("P", "OLD"), None);
        assert_eq!(
            dicts.lookup("P", "WAI").as_deref(),
            Some("Web Accessibility Initiative")
        );
        assert_eq!(dicts.page_len("P"), Some(1));
    }
}
