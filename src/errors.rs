//! Error types with rich diagnostics using miette
//!
//! Extraction is the only fallible stage. Both failure kinds read as
//! "invalid SVG content" to a user; the variant tells them apart.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

/// Message a host shows for any rejected input.
pub const INVALID_CONTENT: &str = "Invalid SVG content";

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

/// Why the extractor rejected a document
#[derive(Error, Diagnostic, Debug)]
pub enum ExtractError {
    #[error("invalid SVG content: no <svg> element found")]
    #[diagnostic(
        code(svgicon::extract::no_svg_root),
        help("the document must contain an <svg ...> element with a closing </svg> tag")
    )]
    NoSvgRoot,

    #[error("invalid SVG content: malformed viewBox ({defect})")]
    #[diagnostic(
        code(svgicon::extract::malformed_view_box),
        help("a viewBox is four numbers separated by whitespace: min-x min-y width height")
    )]
    MalformedViewBox {
        defect: ViewBoxDefect,
        #[source_code]
        src: NamedSource<String>,
        #[label("this viewBox")]
        span: SourceSpan,
    },
}

impl ExtractError {
    /// The text a host surfaces to its user, identical for every variant.
    pub fn user_message(&self) -> &'static str {
        INVALID_CONTENT
    }
}

/// What exactly is wrong with a present `viewBox` value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewBoxDefect {
    #[error("expected 4 numbers, found {0}")]
    TokenCount(usize),

    #[error("`{token}` is not a number")]
    NotANumber { token: String },

    #[error(transparent)]
    NonFinite(#[from] NumericError),
}
