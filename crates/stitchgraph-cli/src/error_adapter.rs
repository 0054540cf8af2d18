//! Rendering of [`StitchGraphError`] through miette.
//!
//! Decoder errors become one report per diagnostic, each pointing into the
//! input document. Everything else is a single report tagged with a
//! `stitchgraph::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use stitchgraph::StitchGraphError;
use stitchgraph_parser::{Span, error::Diagnostic};

/// One renderable report.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A decoder diagnostic and the document it was raised against.
    Located { diag: &'a Diagnostic, src: &'a str },
    /// An error with no position in the input.
    Plain(&'a StitchGraphError),
}

impl Reportable<'_> {
    fn plain_code(err: &StitchGraphError) -> Option<&'static str> {
        match err {
            StitchGraphError::Io(_) => Some("stitchgraph::io"),
            StitchGraphError::Config(_) => Some("stitchgraph::config"),
            StitchGraphError::Export(_) => Some("stitchgraph::export"),
            StitchGraphError::Parse { .. } => None,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Located { diag, .. } => f.write_str(diag.message()),
            Reportable::Plain(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Located { .. } => None,
            Reportable::Plain(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Located { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display + 'a>),
            Reportable::Plain(err) => {
                Self::plain_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display + 'a>)
            }
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Located { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>),
            Reportable::Plain(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Reportable::Located { src, .. } => Some(src as &dyn SourceCode),
            Reportable::Plain(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Located { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = to_source_span(label.span());
            let text = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, span)
            } else {
                LabeledSpan::new_with_span(text, span)
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split a [`StitchGraphError`] into reports: one per decoder diagnostic, or
/// exactly one for any other error.
pub fn to_reportables(err: &StitchGraphError) -> Vec<Reportable<'_>> {
    match err {
        StitchGraphError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Located { diag, src })
            .collect(),
        _ => vec![Reportable::Plain(err)],
    }
}
