//! Rendered fragment types and output backends.

use std::fmt::{self, Write};

use crate::escape::escape_html;

/// Error raised while building an annotated fragment.
///
/// Callers never see this through [`Fragment::render`]; it exists so the
/// degradation to plain text is an explicit, testable branch rather than a
/// caught panic.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The backend failed to format the annotated markup.
    #[error("fragment formatting failed")]
    Format(#[from] fmt::Error),
}

/// Outcome of resolving a directive.
///
/// Carries unescaped values; escaping happens when the fragment is written
/// by a [`FragmentBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fragment {
    /// Successful resolution: an annotated abbreviation.
    Annotated {
        /// The abbreviation shown as the fragment body.
        key: String,
        /// Explanation shown as the annotation title.
        explanation: String,
        /// Language tag, omitted from output when `None`.
        lang: Option<String>,
    },
    /// Resolution failed: plain text with no annotation.
    Fallback {
        /// Text emitted escaped and otherwise unchanged.
        text: String,
    },
}

impl Fragment {
    /// Create an annotated fragment.
    #[must_use]
    pub fn annotated(
        key: impl Into<String>,
        explanation: impl Into<String>,
        lang: Option<String>,
    ) -> Self {
        Self::Annotated {
            key: key.into(),
            explanation: explanation.into(),
            lang,
        }
    }

    /// Create a fallback fragment.
    #[must_use]
    pub fn fallback(text: impl Into<String>) -> Self {
        Self::Fallback { text: text.into() }
    }

    /// Whether this fragment is the unannotated fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Render with backend `B` without the fallback safety net.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the backend fails to format the
    /// annotated markup.
    pub fn try_render<B: FragmentBackend>(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        match self {
            Self::Annotated {
                key,
                explanation,
                lang,
            } => B::abbr(key, explanation, lang.as_deref(), &mut out)?,
            Self::Fallback { text } => B::plain(text, &mut out),
        }
        Ok(out)
    }

    /// Render with backend `B`, degrading to escaped plain text when the
    /// annotated form fails to format.
    ///
    /// A failure here must never abort the enclosing document render.
    #[must_use]
    pub fn render<B: FragmentBackend>(&self) -> String {
        self.try_render::<B>().unwrap_or_else(|error| {
            let text = match self {
                Self::Annotated { key, .. } => key,
                Self::Fallback { text } => text,
            };
            tracing::debug!(text = %text, error = %error, "fragment degraded to plain text");
            let mut out = String::new();
            B::plain(text, &mut out);
            out
        })
    }

    /// Render as HTML via [`HtmlBackend`].
    #[must_use]
    pub fn to_html(&self) -> String {
        self.render::<HtmlBackend>()
    }
}

/// Format-specific fragment output.
///
/// Backends receive unescaped values and must escape everything they
/// embed. Implement this to plug a host formatter's own escaping and
/// element construction into the resolver.
pub trait FragmentBackend {
    /// Write an annotated abbreviation to `out`.
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` when formatting fails; callers degrade to
    /// [`plain`](Self::plain).
    fn abbr(key: &str, explanation: &str, lang: Option<&str>, out: &mut String) -> fmt::Result;

    /// Write plain fallback text to `out`.
    fn plain(text: &str, out: &mut String);
}

/// HTML fragment backend.
///
/// Produces `<abbr title="..." lang="...">...</abbr>` with all embedded
/// values escaped, and escaped bare text for fallbacks.
pub struct HtmlBackend;

impl FragmentBackend for HtmlBackend {
    fn abbr(key: &str, explanation: &str, lang: Option<&str>, out: &mut String) -> fmt::Result {
        match lang {
            Some(lang) => write!(
                out,
                r#"<abbr title="{}" lang="{}">{}</abbr>"#,
                escape_html(explanation),
                escape_html(lang),
                escape_html(key)
            ),
            None => write!(
                out,
                r#"<abbr title="{}">{}</abbr>"#,
                escape_html(explanation),
                escape_html(key)
            ),
        }
    }

    fn plain(text: &str, out: &mut String) {
        out.push_str(&escape_html(text));
    }
}
