//! Directive syntax parsing.
//!
//! Parses the text between two delimiters into a [`Directive`]. Parsing
//! never fails; malformed tokens are dropped and an empty input reduces to
//! an invalid directive that callers emit as plain text.

/// A parsed abbreviation annotation request.
///
/// All syntactic variants funnel into this one structure; optional fields
/// are `None` when the directive did not set them. An inline explanation
/// and a page override may coexist (the explanation wins at resolution,
/// see [`resolve`](super::resolve)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    /// The abbreviation being annotated.
    pub key: String,
    /// Explanation given directly in the directive (`key:explanation`).
    pub explanation: Option<String>,
    /// Dictionary page to consult instead of the default page.
    pub page: Option<String>,
    /// Language tag for the rendered annotation; `None` inherits the
    /// ambient document language.
    pub lang: Option<String>,
}

impl Directive {
    /// Parse raw directive text (delimiters already stripped).
    ///
    /// The first `|`-separated token is the key field and may carry an
    /// inline explanation after the first `:`. Remaining tokens are either
    /// recognized `attr=value` pairs (`lang`, `language`, `page`) or, for
    /// the first token without `=`, a positional page override. Anything
    /// else is dropped. When nothing usable remains the whole trimmed text
    /// becomes the key, so empty input yields an empty key — see
    /// [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut tokens = trimmed.split('|');

        let head = tokens.next().unwrap_or_default();
        let (key, explanation) = match head.split_once(':') {
            Some((key, explanation)) => (key.trim(), Some(explanation.trim())),
            None => (head.trim(), None),
        };

        if key.is_empty() {
            // Nothing usable in the key field: the whole text is the key
            return Self {
                key: trimmed.to_owned(),
                ..Self::default()
            };
        }

        let mut page: Option<&str> = None;
        let mut lang: Option<&str> = None;

        for token in tokens {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Some((name, value)) = token.split_once('=') {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                match name.trim() {
                    "lang" | "language" => {
                        if lang.is_none() {
                            lang = Some(value);
                        }
                    }
                    "page" => {
                        if page.is_none() {
                            page = Some(value);
                        }
                    }
                    // Unrecognized attribute, dropped
                    _ => {}
                }
            } else if page.is_none() {
                page = Some(token);
            }
        }

        Self {
            key: key.to_owned(),
            explanation: explanation.map(str::to_owned),
            page: page.map(str::to_owned),
            lang: lang.map(str::to_owned),
        }
    }

    /// Whether the directive carries a usable key.
    ///
    /// Invalid directives (empty or delimiter-only source text) must be
    /// emitted as escaped raw text, never annotated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_only() {
        let directive = Directive::parse("WAI");
        assert_eq!(
            directive,
            Directive {
                key: "WAI".to_owned(),
                explanation: None,
                page: None,
                lang: None,
            }
        );
        assert!(directive.is_valid());
    }

    #[test]
    fn test_inline_explanation() {
        let directive = Directive::parse("WAI:Web Accessibility Initiative");
        assert_eq!(directive.key, "WAI");
        assert_eq!(
            directive.explanation.as_deref(),
            Some("Web Accessibility Initiative")
        );
        assert_eq!(directive.page, None);
    }

    #[test]
    fn test_explanation_splits_on_first_colon_only() {
        let directive = Directive::parse("URI:Uniform Resource Identifier: a name");
        assert_eq!(directive.key, "URI");
        assert_eq!(
            directive.explanation.as_deref(),
            Some("Uniform Resource Identifier: a name")
        );
    }

    #[test]
    fn test_positional_page_override() {
        let directive = Directive::parse("WAI|OtherPage");
        assert_eq!(directive.key, "WAI");
        assert_eq!(directive.page.as_deref(), Some("OtherPage"));
        assert_eq!(directive.explanation, None);
    }

    #[test]
    fn test_attribute_page_override() {
        let directive = Directive::parse("WAI|page=OtherPage");
        assert_eq!(directive.page.as_deref(), Some("OtherPage"));
    }

    #[test]
    fn test_lang_attribute() {
        let directive = Directive::parse("WAI|lang=en");
        assert_eq!(directive.key, "WAI");
        assert_eq!(directive.lang.as_deref(), Some("en"));
        assert_eq!(directive.page, None);
    }

    #[test]
    fn test_language_attribute_long_form() {
        let directive = Directive::parse("WAI|language=en");
        assert_eq!(directive.lang.as_deref(), Some("en"));
        assert_eq!(directive.page, None);
    }

    #[test]
    fn test_page_and_lang_combined() {
        let directive = Directive::parse("WAI|OtherPage|lang=de");
        assert_eq!(directive.key, "WAI");
        assert_eq!(directive.page.as_deref(), Some("OtherPage"));
        assert_eq!(directive.lang.as_deref(), Some("de"));
    }

    #[test]
    fn test_explanation_and_lang_combined() {
        let directive = Directive::parse("WAI:Web Accessibility Initiative|lang=en");
        assert_eq!(
            directive.explanation.as_deref(),
            Some("Web Accessibility Initiative")
        );
        assert_eq!(directive.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_explanation_and_page_both_kept() {
        // The inline explanation wins at resolution, but the override is
        // preserved on the parsed value
        let directive = Directive::parse("WAI:Web Accessibility Initiative|OtherPage");
        assert_eq!(
            directive.explanation.as_deref(),
            Some("Web Accessibility Initiative")
        );
        assert_eq!(directive.page.as_deref(), Some("OtherPage"));
    }

    #[test]
    fn test_first_positional_page_wins() {
        let directive = Directive::parse("WAI|FirstPage|SecondPage");
        assert_eq!(directive.page.as_deref(), Some("FirstPage"));
    }

    #[test]
    fn test_unrecognized_attribute_dropped() {
        let directive = Directive::parse("WAI|title=ignored|OtherPage");
        assert_eq!(directive.page.as_deref(), Some("OtherPage"));
        assert_eq!(directive.lang, None);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let directive = Directive::parse("  WAI : Web Accessibility Initiative | lang = en  ");
        assert_eq!(directive.key, "WAI");
        assert_eq!(
            directive.explanation.as_deref(),
            Some("Web Accessibility Initiative")
        );
        // "lang = en" splits on '=' into a recognized attribute
        assert_eq!(directive.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let directive = Directive::parse("");
        assert_eq!(directive.key, "");
        assert!(!directive.is_valid());
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        assert!(!Directive::parse("   ").is_valid());
    }

    #[test]
    fn test_empty_key_field_reduces_to_whole_text() {
        // No usable key before the separator: everything becomes the key
        let directive = Directive::parse("|OtherPage");
        assert_eq!(directive.key, "|OtherPage");
        assert_eq!(directive.page, None);
        assert!(directive.is_valid());
    }

    #[test]
    fn test_colon_only_head_reduces_to_whole_text() {
        let directive = Directive::parse(":explanation without key");
        assert_eq!(directive.key, ":explanation without key");
        assert_eq!(directive.explanation, None);
    }

    #[test]
    fn test_empty_inline_explanation_kept_as_empty() {
        // "KEY:" parses; resolution skips the empty explanation
        let directive = Directive::parse("WAI:");
        assert_eq!(directive.key, "WAI");
        assert_eq!(directive.explanation.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_tokens_ignored() {
        let directive = Directive::parse("WAI||lang=en|");
        assert_eq!(directive.key, "WAI");
        assert_eq!(directive.page, None);
        assert_eq!(directive.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_attribute_with_empty_value_ignored() {
        let directive = Directive::parse("WAI|lang=");
        assert_eq!(directive.lang, None);
    }
}
