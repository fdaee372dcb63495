//! Abbreviation annotation for wiki-style document text.
//!
//! This crate recognizes delimiter-bounded abbreviation directives in
//! running text (`?WAI?`, `?WAI:Web Accessibility Initiative?`, ...),
//! resolves each explanation inline or from a dictionary page, and emits a
//! safely-escaped `<abbr>` fragment. When resolution fails the directive
//! degrades to plain escaped text; nothing in this crate aborts the
//! enclosing document render.
//!
//! # Architecture
//!
//! - [`Directive`]: one parsed annotation request (key, optional inline
//!   explanation, page override, language tag)
//! - [`ResolutionContext`] and [`resolve`]: turn a directive into a
//!   [`Fragment`] using a host-supplied [`DictLookup`](gloss_dict::DictLookup)
//! - [`FragmentBackend`] / [`HtmlBackend`]: format-specific fragment output
//! - [`AbbrProcessor`]: scans whole documents and splices rendered
//!   fragments into the text
//!
//! # Example
//!
//! ```
//! use gloss_dict::{DEFAULT_PAGE, MemoryDicts};
//! use gloss_renderer::AbbrProcessor;
//!
//! let dicts = MemoryDicts::new().with_entry(DEFAULT_PAGE, "WAI", "Web Accessibility Initiative");
//! let processor = AbbrProcessor::new(&dicts);
//!
//! let html = processor.process("The ?WAI? publishes guidelines.");
//! assert_eq!(
//!     html,
//!     r#"The <abbr title="Web Accessibility Initiative">WAI</abbr> publishes guidelines."#
//! );
//! ```

pub mod directive;
mod escape;

pub use directive::{
    AbbrProcessor, AbbrProcessorConfig, Directive, Fragment, FragmentBackend, HtmlBackend,
    RenderError, ResolutionContext, resolve, resolve_and_render,
};
pub use escape::escape_html;
