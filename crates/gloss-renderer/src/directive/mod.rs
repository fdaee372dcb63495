//! Abbreviation directive parsing and resolution.
//!
//! A directive is the text between two delimiter characters in running
//! text. Several historical syntaxes are accepted by one tolerant grammar:
//!
//! | Form | Meaning |
//! |---|---|
//! | `KEY` | explanation looked up on the effective dictionary page |
//! | `KEY:EXPLANATION` | inline explanation, no lookup |
//! | `KEY\|PAGE` | positional dictionary-page override |
//! | `KEY\|page=PAGE` | attribute-style page override |
//! | `KEY\|lang=LL` | language tag (`language=LL` also accepted) |
//! | `KEY\|PAGE\|lang=LL` | page override and language tag |
//! | `KEY:EXPLANATION\|lang=LL` | inline explanation and language tag |
//!
//! Processing is a single pass per directive: parse, resolve, render.
//! Resolution precedence is inline explanation first, then one dictionary
//! lookup against the override page (or the context's default page), then
//! the plain-text fallback. Every emitted value is escaped.
//!
//! # Example
//!
//! ```
//! use gloss_dict::NullDicts;
//! use gloss_renderer::directive::{Directive, ResolutionContext, resolve_and_render};
//!
//! let directive = Directive::parse("WAI:Web Accessibility Initiative|lang=en");
//! let ctx = ResolutionContext::new(&NullDicts, "AbbrDict");
//!
//! assert_eq!(
//!     resolve_and_render(&directive, &ctx),
//!     r#"<abbr title="Web Accessibility Initiative" lang="en">WAI</abbr>"#
//! );
//! ```

mod fragment;
mod parser;
mod processor;
mod resolver;

pub use fragment::{Fragment, FragmentBackend, HtmlBackend, RenderError};
pub use parser::Directive;
pub use processor::{AbbrProcessor, AbbrProcessorConfig};
pub use resolver::{ResolutionContext, resolve, resolve_and_render};
