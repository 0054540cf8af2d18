//! # StitchGraph Parser
//!
//! Decoder for the normalized row list consumed by the StitchGraph layout
//! engine. Free-form pattern text is turned into this JSON document by an
//! external normalization service; this crate only checks its shape and
//! produces a typed [`Pattern`].
//!
//! ## Usage
//!
//! ```
//! # use stitchgraph_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{ "rows": [
//!         { "rowNumber": 1, "stitches": ["ch", "ch", "ch"] },
//!         { "stitches": ["sc", "sc2tog"], "isRound": false }
//!     ] }"#;
//!
//!     let pattern = parse(source)?;
//!     assert_eq!(pattern.rows().len(), 2);
//!     assert_eq!(pattern.rows()[1].number(), 2);
//!     Ok(())
//! }
//! ```

mod document;
pub mod error;
mod span;

pub use document::RowDescriptor;
pub use span::Span;

use log::{debug, trace};
use serde_json::{error::Category, value::RawValue};

use stitchgraph_core::pattern::Pattern;

use document::Envelope;
use error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};

/// Decode a row-list document into a [`Pattern`].
///
/// Accepts either `{"rows": [...]}` or a bare `[...]` of row descriptors.
/// Unknown stitch tokens are kept and never rejected; the layout engine
/// gives them default metrics.
///
/// # Errors
///
/// Returns a [`ParseError`] when the document is not valid JSON, does not
/// have the expected shape, or carries `rowNumber` values that are not
/// positive integers. Every invalid row number is reported.
pub fn parse(source: &str) -> Result<Pattern, ParseError> {
    let rows = decode_rows(source)?;
    debug!(rows_count = rows.len(); "Decoded row list");

    validate_rows(source, &rows)?;

    let pattern = Pattern::new(
        rows.iter()
            .enumerate()
            .map(|(index, row)| row.descriptor.resolve(index))
            .collect(),
    );
    trace!(pattern:?; "Resolved pattern");

    Ok(pattern)
}

/// A decoded row together with its text in the document.
struct SourceRow<'a> {
    text: &'a str,
    descriptor: RowDescriptor,
}

fn decode_rows(source: &str) -> Result<Vec<SourceRow<'_>>, ParseError> {
    let is_envelope = source.trim_start().starts_with('{');
    let raw_rows = if is_envelope {
        serde_json::from_str::<Envelope<'_>>(source).map(|envelope| envelope.rows)
    } else {
        serde_json::from_str::<Vec<&RawValue>>(source)
    }
    .map_err(|err| json_diagnostic(source, source, &err))?;

    raw_rows
        .into_iter()
        .map(|raw| {
            let text = raw.get();
            serde_json::from_str::<RowDescriptor>(text)
                .map(|descriptor| SourceRow { text, descriptor })
                .map_err(|err| ParseError::from(json_diagnostic(source, text, &err)))
        })
        .collect()
}

fn validate_rows(source: &str, rows: &[SourceRow<'_>]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for (index, row) in rows.iter().enumerate() {
        let Err(value) = row.descriptor.checked_row_number() else {
            continue;
        };

        let mut diagnostic = Diagnostic::error(format!(
            "row {} has an invalid rowNumber `{value}`",
            index + 1
        ))
        .with_code(ErrorCode::E201);

        if let Some(value_text) = document::row_number_text(row.text) {
            let start = span::offset_in(source, value_text);
            diagnostic = diagnostic.with_label(
                Span::new(start..start + value_text.len()),
                "expected a positive integer",
            );
        }

        collector.emit(
            diagnostic
                .with_secondary_label(
                    Span::at(source, span::offset_in(source, row.text)),
                    format!("row {} starts here", index + 1),
                )
                .with_help(
                    "row numbers are positive integers; omit `rowNumber` to number rows by position",
                ),
        );
    }

    collector.finish()
}

/// Translate a JSON decoding failure in `fragment` into a labeled diagnostic
/// against the whole `source`.
fn json_diagnostic(source: &str, fragment: &str, err: &serde_json::Error) -> Diagnostic {
    let offset =
        span::offset_in(source, fragment) + span::offset_of(fragment, err.line(), err.column());
    let span = Span::at(source, offset);

    // serde_json appends " at line L column C"; the label carries the location.
    let full = err.to_string();
    let message = full
        .rsplit_once(" at line ")
        .map_or(full.as_str(), |(message, _)| message)
        .to_string();

    let (code, label, help) = match err.classify() {
        Category::Eof => (
            ErrorCode::E101,
            "document ends here",
            "check for an unclosed `[`, `{` or string",
        ),
        Category::Data => (
            ErrorCode::E200,
            "unexpected value",
            "expected `{\"rows\": [...]}` or `[...]`, where every row has a `stitches` array of strings",
        ),
        Category::Syntax | Category::Io => (
            ErrorCode::E100,
            "invalid JSON",
            "the row list must be a valid JSON document",
        ),
    };

    Diagnostic::error(message)
        .with_code(code)
        .with_label(span, label)
        .with_help(help)
}

#[cfg(test)]
mod tests {
    use stitchgraph_core::{
        pattern::Topology,
        stitch::{StitchKind, StitchType},
    };

    use proptest::prelude::*;

    use super::*;

    fn first_code(err: &ParseError) -> Option<ErrorCode> {
        err.diagnostics()[0].code()
    }

    #[test]
    fn test_parse_envelope() {
        let pattern = parse(r#"{"rows": [{"rowNumber": 1, "stitches": ["ch", "ch", "ch"]}]}"#)
            .expect("valid document");

        assert_eq!(pattern.rows().len(), 1);
        let row = &pattern.rows()[0];
        assert_eq!(row.number(), 1);
        assert_eq!(row.topology(), Topology::Linear);
        assert_eq!(
            row.stitches(),
            vec![StitchType::Known(StitchKind::Chain); 3].as_slice()
        );
    }

    #[test]
    fn test_parse_bare_array() {
        let pattern = parse(r#"[{"stitches": ["sc"]}, {"stitches": ["sc"], "isRound": true}]"#)
            .expect("valid document");

        assert_eq!(pattern.rows()[0].number(), 1);
        assert_eq!(pattern.rows()[1].number(), 2);
        assert_eq!(pattern.rows()[1].topology(), Topology::Radial);
    }

    #[test]
    fn test_parse_accepts_integral_float_row_number() {
        let pattern = parse(r#"[{"rowNumber": 7.0, "stitches": []}]"#).expect("valid document");

        assert_eq!(pattern.rows()[0].number(), 7);
        assert!(pattern.rows()[0].is_empty());
    }

    #[test]
    fn test_parse_null_fields_use_defaults() {
        let pattern = parse(r#"[{"rowNumber": null, "stitches": ["dc"], "isRound": null}]"#)
            .expect("valid document");

        assert_eq!(pattern.rows()[0].number(), 1);
        assert_eq!(pattern.rows()[0].topology(), Topology::Linear);
    }

    #[test]
    fn test_parse_keeps_unknown_tokens() {
        let pattern = parse(r#"[{"stitches": ["sc", "xyz"]}]"#).expect("valid document");

        assert!(pattern.rows()[0].stitches()[1].is_unknown());
        assert_eq!(pattern.rows()[0].stitches()[1].tag(), "xyz");
    }

    #[test]
    fn test_parse_empty_row_list() {
        let pattern = parse(r#"{"rows": []}"#).expect("valid document");

        assert!(pattern.is_empty());
    }

    #[test]
    fn test_syntax_error_is_labeled() {
        let source = r#"[{"stitches": ["sc",, "sc"]}]"#;
        let err = parse(source).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E100));
        let label = &err.diagnostics()[0].labels()[0];
        assert!(label.is_primary());
        assert_eq!(&source[label.span().start()..label.span().end()], ",");
    }

    #[test]
    fn test_truncated_document() {
        let err = parse(r#"{"rows": [{"stitches": ["sc""#).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E101));
    }

    #[test]
    fn test_empty_document() {
        let err = parse("   ").unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E101));
    }

    #[test]
    fn test_missing_stitches_field() {
        let err = parse(r#"[{"rowNumber": 1}]"#).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E200));
        assert!(err.diagnostics()[0].message().contains("stitches"));
        assert!(!err.diagnostics()[0].message().contains(" at line "));
    }

    #[test]
    fn test_wrong_token_type() {
        let err = parse(r#"[{"stitches": ["sc", 3]}]"#).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E200));
    }

    #[test]
    fn test_every_invalid_row_number_is_reported() {
        let source = r#"[
            {"rowNumber": 0, "stitches": ["sc"]},
            {"rowNumber": 2, "stitches": ["sc"]},
            {"rowNumber": 2.5, "stitches": ["sc"]}
        ]"#;
        let err = parse(source).unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        assert!(
            err.diagnostics()
                .iter()
                .all(|diag| diag.code() == Some(ErrorCode::E201))
        );
        assert_eq!(
            err.diagnostics()[0].message(),
            "row 1 has an invalid rowNumber `0`"
        );
        assert_eq!(
            err.diagnostics()[1].message(),
            "row 3 has an invalid rowNumber `2.5`"
        );
    }

    #[test]
    fn test_invalid_row_number_points_at_value() {
        let source = r#"[{"stitches": ["sc"]}, {"rowNumber": -1, "stitches": ["sc"]}]"#;
        let err = parse(source).unwrap_err();

        let labels = err.diagnostics()[0].labels();
        assert_eq!(labels.len(), 2);

        let value = labels[0].span();
        assert!(labels[0].is_primary());
        assert_eq!(&source[value.start()..value.end()], "-1");

        let row = labels[1].span();
        assert!(!labels[1].is_primary());
        assert_eq!(row.start(), source.find(r#"{"rowNumber""#).unwrap());
        assert_eq!(labels[1].message(), "row 2 starts here");
    }

    #[test]
    fn test_shape_error_is_located_in_its_row() {
        let source = r#"[{"stitches": []}, {"stitches": 5}]"#;
        let err = parse(source).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E200));
        let span = err.diagnostics()[0].labels()[0].span();
        let second_row = source.rfind('{').unwrap();
        assert!(span.start() >= second_row, "label at {} outside row", span.start());
        assert!(span.end() <= source.len());
    }

    proptest! {
        #[test]
        fn any_token_list_is_accepted(
            tokens in prop::collection::vec("[a-zA-Z0-9]{0,8}", 0..20),
            is_round in any::<bool>(),
        ) {
            let source = format!(
                r#"[{{"stitches": {}, "isRound": {is_round}}}]"#,
                serde_json::to_string(&tokens).unwrap()
            );
            let pattern = parse(&source).unwrap();
            let row = &pattern.rows()[0];

            prop_assert_eq!(row.stitches().len(), tokens.len());
            prop_assert_eq!(row.topology().is_radial(), is_round);
            for (stitch, token) in row.stitches().iter().zip(&tokens) {
                prop_assert_eq!(stitch.tag(), token.as_str());
            }
        }
    }
}
