//! Error codes for the StitchGraph decoder.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Document syntax errors
//! - `E2xx` - Row validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The document is not valid JSON (stray character, missing comma,
    /// unterminated string, ...).
    E100,

    /// Incomplete document.
    ///
    /// The input ended before the document was complete.
    E101,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Unexpected document shape.
    ///
    /// The document is valid JSON but does not describe a row list: a field
    /// has the wrong type or the required `stitches` array is missing.
    E200,

    /// Invalid row number.
    ///
    /// `rowNumber` must be a positive integer when present.
    E201,
}

impl ErrorCode {
    /// Short description used when no richer message is available.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed JSON",
            ErrorCode::E101 => "incomplete document",
            ErrorCode::E200 => "unexpected document shape",
            ErrorCode::E201 => "invalid row number",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "incomplete document");
    }
}
