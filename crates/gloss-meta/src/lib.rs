//! Document header settings for gloss.
//!
//! Wiki documents configure per-page behavior through processing
//! instructions in the page header: leading lines starting with `#`.
//! [`DocumentSettings`] extracts the ones gloss cares about and preserves
//! the rest:
//!
//! ```text
//! #format wiki
//! #language de
//! #pragma abbreviation-definitions TeamGlossary
//! ```
//!
//! The header ends at the first line that does not start with `#`; a `#`
//! line later in the body is ordinary content and is never interpreted.
//! Parsing is lenient and cannot fail — unknown pragmas are kept in a map,
//! malformed lines are skipped.
//!
//! # Example
//!
//! ```
//! use gloss_meta::DocumentSettings;
//!
//! let text = "#pragma abbreviation-definitions TeamGlossary\n\nBody text.\n";
//! let settings = DocumentSettings::from_header(text);
//! assert_eq!(settings.abbreviation_definitions(), Some("TeamGlossary"));
//! assert_eq!(settings.language, None);
//! ```

use std::collections::HashMap;

/// Pragma name configuring the dictionary page for abbreviation lookups.
pub const PRAGMA_ABBREVIATION_DEFINITIONS: &str = "abbreviation-definitions";

/// Settings extracted from a document's header lines.
///
/// All fields are optional. A `None` field means the document did not set
/// the corresponding instruction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentSettings {
    /// Markup format from a `#format` line.
    pub format: Option<String>,
    /// Document language from a `#language` line.
    pub language: Option<String>,
    /// All `#pragma NAME VALUE` instructions, by name.
    pragmas: HashMap<String, String>,
}

impl DocumentSettings {
    /// Extract settings from the header of `text`.
    ///
    /// Scans leading `#` lines only. `##` comment lines are skipped without
    /// ending the header. A `#pragma` line with no value is ignored.
    #[must_use]
    pub fn from_header(text: &str) -> Self {
        let mut settings = Self::default();

        for line in text.lines() {
            let line = line.trim_end();
            if !line.starts_with('#') {
                break;
            }
            // Comment line: skipped, header continues
            if line.starts_with("##") {
                continue;
            }

            let instruction = line[1..].trim_start();
            let (name, rest) = match instruction.split_once(char::is_whitespace) {
                Some((name, rest)) => (name, rest.trim()),
                None => (instruction, ""),
            };

            match name {
                "format" if !rest.is_empty() => settings.format = Some(rest.to_owned()),
                "language" if !rest.is_empty() => settings.language = Some(rest.to_owned()),
                "pragma" => {
                    if let Some((pragma, value)) = rest.split_once(char::is_whitespace) {
                        let value = value.trim();
                        if !pragma.is_empty() && !value.is_empty() {
                            settings.pragmas.insert(pragma.to_owned(), value.to_owned());
                        }
                    }
                }
                _ => {}
            }
        }

        settings
    }

    /// Value of a named pragma, if the header set one.
    #[must_use]
    pub fn pragma(&self, name: &str) -> Option<&str> {
        self.pragmas.get(name).map(String::as_str)
    }

    /// Dictionary page configured via `#pragma abbreviation-definitions`.
    #[must_use]
    pub fn abbreviation_definitions(&self) -> Option<&str> {
        self.pragma(PRAGMA_ABBREVIATION_DEFINITIONS)
    }
}
