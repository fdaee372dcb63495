//! Document scanning and directive replacement.
//!
//! [`AbbrProcessor`] walks a document's text line by line, finds
//! delimiter-bounded directive spans (`?...?` by default, `^...^` in older
//! documents), and splices rendered fragments into the output. All other
//! text passes through unchanged; escaping ordinary text belongs to the
//! host pipeline.

use gloss_dict::DictLookup;
use gloss_meta::DocumentSettings;

use crate::escape::escape_html;

use super::{Directive, ResolutionContext, resolve_and_render};

/// Configuration for [`AbbrProcessor`].
pub struct AbbrProcessorConfig {
    /// Delimiter character bounding a directive span.
    ///
    /// Default: `?`
    pub delimiter: char,
    /// Dictionary page used when the document header sets none.
    ///
    /// Default: [`gloss_dict::DEFAULT_PAGE`]
    pub default_page: Option<String>,
}

impl Default for AbbrProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AbbrProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: '?',
            default_page: None,
        }
    }

    /// Set the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the fallback dictionary page.
    #[must_use]
    pub fn with_default_page(mut self, page: impl Into<String>) -> Self {
        self.default_page = Some(page.into());
        self
    }
}

/// Processor replacing abbreviation directives in running text.
///
/// The effective default dictionary page is chosen per document: a
/// `#pragma abbreviation-definitions` header line wins, then the
/// configured fallback, then [`gloss_dict::DEFAULT_PAGE`].
///
/// # Example
///
/// ```
/// use gloss_dict::{DEFAULT_PAGE, MemoryDicts};
/// use gloss_renderer::directive::AbbrProcessor;
///
/// let dicts = MemoryDicts::new().with_entry(DEFAULT_PAGE, "WAI", "Web Accessibility Initiative");
/// let processor = AbbrProcessor::new(&dicts);
///
/// let html = processor.process("?WAI? guidelines");
/// assert!(html.starts_with(r#"<abbr title="Web Accessibility Initiative">WAI</abbr>"#));
/// ```
pub struct AbbrProcessor<'a> {
    config: AbbrProcessorConfig,
    dicts: &'a dyn DictLookup,
}

impl<'a> AbbrProcessor<'a> {
    /// Create a processor with default configuration.
    #[must_use]
    pub fn new(dicts: &'a dyn DictLookup) -> Self {
        Self::with_config(dicts, AbbrProcessorConfig::default())
    }

    /// Create a processor with custom configuration.
    #[must_use]
    pub fn with_config(dicts: &'a dyn DictLookup, config: AbbrProcessorConfig) -> Self {
        Self { config, dicts }
    }

    /// Replace every directive span in `input`, leaving all other text
    /// untouched.
    ///
    /// Header lines (`#...` processing instructions) are passed through
    /// without scanning. An unterminated delimiter is ordinary text; an
    /// empty or unusable span is emitted escaped and otherwise unchanged.
    #[must_use]
    pub fn process(&self, input: &str) -> String {
        let settings = DocumentSettings::from_header(input);
        let default_page = settings
            .abbreviation_definitions()
            .or(self.config.default_page.as_deref())
            .unwrap_or(gloss_dict::DEFAULT_PAGE);
        let ctx = ResolutionContext::new(self.dicts, default_page);

        let mut output = String::with_capacity(input.len());
        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();
        let mut in_header = true;

        for (idx, line) in lines.iter().enumerate() {
            if in_header && line.starts_with('#') {
                output.push_str(line);
            } else {
                in_header = false;
                output.push_str(&self.process_line(line, &ctx));
            }

            // Preserve line endings
            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
        }

        output
    }

    fn process_line(&self, line: &str, ctx: &ResolutionContext<'_>) -> String {
        let delimiter = self.config.delimiter;
        let width = delimiter.len_utf8();

        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some(start) = remaining.find(delimiter) {
            let interior_start = start + width;
            let Some(interior_len) = remaining[interior_start..].find(delimiter) else {
                // Unterminated delimiter: the rest is ordinary text
                break;
            };
            let end = interior_start + interior_len + width;

            result.push_str(&remaining[..start]);
            result.push_str(&self.replace_span(
                &remaining[interior_start..interior_start + interior_len],
                &remaining[start..end],
                ctx,
            ));
            remaining = &remaining[end..];
        }

        result.push_str(remaining);
        result
    }

    fn replace_span(&self, interior: &str, raw_span: &str, ctx: &ResolutionContext<'_>) -> String {
        let directive = Directive::parse(interior);
        if directive.is_valid() {
            resolve_and_render(&directive, ctx)
        } else {
            escape_html(raw_span)
        }
    }
}
