//! The core diagnostic type for the decoder.
//!
//! A [`Diagnostic`] is a single decoding error with an optional error code,
//! labeled source spans and help text.

use std::fmt;

use crate::{
    error::{ErrorCode, Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E201]: row 3 has an invalid rowNumber `0`
///   = help: row numbers are 1-based; omit the field to number rows by position
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use stitchgraph_parser::error::{Diagnostic, ErrorCode};
    /// # use stitchgraph_parser::Span;
    ///
    /// let diag = Diagnostic::error("missing field `stitches`")
    ///     .with_code(ErrorCode::E200)
    ///     .with_label(Span::new(4..5), "row ends here")
    ///     .with_help("every row needs a `stitches` array");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E100]: message" or "error: message"
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::error("unexpected end of input")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(10..10), "document ends here")
            .with_secondary_label(Span::new(0..1), "array opened here")
            .with_help("close every `[` and `{`");

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.help(), Some("close every `[` and `{`"));
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("bad row").with_code(ErrorCode::E201);
        let without_code = Diagnostic::error("unexpected value");

        assert_eq!(with_code.to_string(), "error[E201]: bad row");
        assert_eq!(without_code.to_string(), "error: unexpected value");
    }
}
