//! Error types for StitchGraph operations.
//!
//! [`StitchGraphError`] wraps everything that can go wrong around the layout
//! engine: reading input, decoding it, building the stitch table from
//! configuration, and exporting the result. Layout itself never fails.

use std::io;

use thiserror::Error;

use stitchgraph_parser::error::ParseError;

/// The main error type for StitchGraph operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the input document next to the structured
/// diagnostics so callers can render source snippets.
#[derive(Debug, Error)]
pub enum StitchGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl StitchGraphError {
    /// Create a new `Parse` error with the associated input document.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
