//! Directive resolution against dictionary pages.

use gloss_dict::DictLookup;

use super::{Directive, Fragment};

/// Capabilities the host supplies for one resolution call.
///
/// Dictionary access is injected here rather than read from any ambient
/// state, so the resolver is independently testable and needs no locking.
/// Hosts rendering documents concurrently create one context per call.
///
/// # Example
///
/// ```
/// use gloss_dict::{DEFAULT_PAGE, MemoryDicts};
/// use gloss_renderer::directive::ResolutionContext;
///
/// let dicts = MemoryDicts::new();
/// let ctx = ResolutionContext::new(&dicts, DEFAULT_PAGE);
/// assert_eq!(ctx.default_page, "AbbrDict");
/// ```
pub struct ResolutionContext<'a> {
    /// Dictionary lookup capability.
    pub dicts: &'a dyn DictLookup,
    /// Page consulted when the directive carries no override.
    pub default_page: &'a str,
}

impl<'a> ResolutionContext<'a> {
    /// Create a context over a dictionary and a default page name.
    #[must_use]
    pub fn new(dicts: &'a dyn DictLookup, default_page: &'a str) -> Self {
        Self {
            dicts,
            default_page,
        }
    }
}

/// Resolve a directive's explanation and build the output fragment.
///
/// Precedence, first match wins:
///
/// 1. a non-empty inline explanation is used directly, no lookup;
/// 2. the directive's page override, or else the context's default page,
///    is queried once for the key;
/// 3. a present, non-empty dictionary entry is used;
/// 4. otherwise the key degrades to a plain-text [`Fragment::Fallback`].
///
/// A lookup miss is expected behavior, not an error: it is logged at
/// debug level only and surfaces as missing annotation in the output.
#[must_use]
pub fn resolve(directive: &Directive, ctx: &ResolutionContext<'_>) -> Fragment {
    // An empty key never annotates
    if !directive.is_valid() {
        return Fragment::fallback(directive.key.clone());
    }

    if let Some(explanation) = directive.explanation.as_deref()
        && !explanation.is_empty()
    {
        return Fragment::annotated(directive.key.clone(), explanation, directive.lang.clone());
    }

    let page = directive.page.as_deref().unwrap_or(ctx.default_page);
    match ctx.dicts.lookup(page, &directive.key) {
        Some(explanation) if !explanation.is_empty() => {
            Fragment::annotated(directive.key.clone(), explanation, directive.lang.clone())
        }
        _ => {
            tracing::debug!(page = %page, key = %directive.key, "abbreviation lookup miss");
            Fragment::fallback(directive.key.clone())
        }
    }
}

/// Resolve a directive and render it as HTML in one pass.
#[must_use]
pub fn resolve_and_render(directive: &Directive, ctx: &ResolutionContext<'_>) -> String {
    resolve(directive, ctx).to_html()
}
