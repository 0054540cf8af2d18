//! Error and diagnostic system for the StitchGraph input decoder.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the input document
//! - A collector for reporting every offending row at once
//!
//! # Example
//!
//! ```
//! # use stitchgraph_parser::error::{Diagnostic, ErrorCode};
//! # use stitchgraph_parser::Span;
//!
//! let diag = Diagnostic::error("expected `,` or `]`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(12..13), "unexpected character")
//!     .with_help("check the JSON syntax near this position");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
