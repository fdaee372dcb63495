//! Definition-list page parsing.
//!
//! Dictionary pages are written in the wiki's definition-list format: one
//! entry per line, indented, with a `::` separator between key and
//! explanation:
//!
//! ```text
//!  WAI:: Web Accessibility Initiative
//!  W3C:: World Wide Web Consortium
//! ```
//!
//! The leading whitespace is required by the wiki syntax; everything else
//! on the page (headings, prose, comments) is ignored.

use std::collections::BTreeMap;

/// Parse definition-list page source into a key/explanation map.
///
/// Parsing is lenient: lines that do not match the ` KEY:: Explanation`
/// shape are skipped, a later duplicate key wins, and entries with an
/// empty key or empty explanation are dropped.
///
/// # Example
///
/// ```
/// use gloss_dict::parse_definitions;
///
/// let page = "= Abbreviations =\n WAI:: Web Accessibility Initiative\nprose\n";
/// let defs = parse_definitions(page);
/// assert_eq!(defs.get("WAI").map(String::as_str), Some("Web Accessibility Initiative"));
/// assert_eq!(defs.len(), 1);
/// ```
#[must_use]
pub fn parse_definitions(source: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for line in source.lines() {
        // Definition lines must be indented
        if !line.starts_with(' ') && !line.starts_with('\t') {
            continue;
        }

        let Some((key, explanation)) = line.split_once("::") else {
            continue;
        };

        let key = key.trim();
        let explanation = explanation.trim();
        if key.is_empty() || explanation.is_empty() {
            continue;
        }

        entries.insert(key.to_owned(), explanation.to_owned());
    }

    entries
}
