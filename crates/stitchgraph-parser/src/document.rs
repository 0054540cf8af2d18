//! Raw shape of the row-list document produced by the normalization service.
//!
//! Two layouts are accepted: the envelope the service returns,
//!
//! ```json
//! { "rows": [ { "rowNumber": 1, "stitches": ["ch", "ch"], "isRound": false } ] }
//! ```
//!
//! and a bare array of row descriptors. Only `stitches` is required.

use serde::Deserialize;
use serde_json::value::RawValue;

use stitchgraph_core::{
    pattern::{RowSpec, Topology},
    stitch::StitchType,
};

/// The service envelope. Rows stay undecoded so each one keeps its place in
/// the source text.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<'a> {
    #[serde(borrow)]
    pub rows: Vec<&'a RawValue>,
}

#[derive(Debug, Deserialize)]
struct RowNumberField<'a> {
    #[serde(rename = "rowNumber", borrow, default)]
    row_number: Option<&'a RawValue>,
}

/// The source text of a row's `rowNumber` value, if the row has one.
pub(crate) fn row_number_text(row_text: &str) -> Option<&str> {
    serde_json::from_str::<RowNumberField<'_>>(row_text)
        .ok()
        .and_then(|field| field.row_number)
        .map(RawValue::get)
}

/// A row as written in the input document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDescriptor {
    /// Display number. The service emits JSON numbers, so integral floats
    /// such as `2.0` are accepted here and checked during validation.
    #[serde(default)]
    row_number: Option<f64>,

    stitches: Vec<String>,

    #[serde(default)]
    is_round: Option<bool>,
}

impl RowDescriptor {
    pub fn new(row_number: Option<f64>, stitches: Vec<String>, is_round: Option<bool>) -> Self {
        Self {
            row_number,
            stitches,
            is_round,
        }
    }

    pub fn row_number(&self) -> Option<f64> {
        self.row_number
    }

    pub fn stitches(&self) -> &[String] {
        &self.stitches
    }

    /// Topology implied by `isRound`; absent means linear.
    pub fn topology(&self) -> Topology {
        Topology::from_round_flag(self.is_round.unwrap_or(false))
    }

    /// Validated display number, if one was given.
    ///
    /// # Errors
    ///
    /// Returns the offending value if it is not a positive integer that fits
    /// in a `u32`.
    pub fn checked_row_number(&self) -> Result<Option<u32>, f64> {
        match self.row_number {
            None => Ok(None),
            Some(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= 1.0
                    && value <= f64::from(u32::MAX) =>
            {
                Ok(Some(value as u32))
            }
            Some(value) => Err(value),
        }
    }

    /// Resolve into the engine-facing row.
    ///
    /// `index` is the 0-based position of the row in the document; it provides
    /// the display number when `rowNumber` is absent. Invalid row numbers also
    /// fall back to the positional default; [`crate::parse`] rejects them
    /// before this point.
    pub fn resolve(&self, index: usize) -> RowSpec {
        let positional = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let number = self
            .checked_row_number()
            .ok()
            .flatten()
            .unwrap_or(positional);
        let stitches = self
            .stitches
            .iter()
            .map(|token| StitchType::from(token.as_str()))
            .collect();

        RowSpec::new(number, stitches, self.topology())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(row_number: Option<f64>) -> RowDescriptor {
        RowDescriptor::new(row_number, vec!["sc".to_string()], None)
    }

    #[test]
    fn test_row_number_defaults_to_position() {
        let spec = row(None).resolve(4);

        assert_eq!(spec.number(), 5);
    }

    #[test]
    fn test_explicit_row_number_wins() {
        let spec = row(Some(12.0)).resolve(0);

        assert_eq!(spec.number(), 12);
    }

    #[test]
    fn test_checked_row_number_rejects_bad_values() {
        assert_eq!(row(Some(0.0)).checked_row_number(), Err(0.0));
        assert_eq!(row(Some(-2.0)).checked_row_number(), Err(-2.0));
        assert_eq!(row(Some(1.5)).checked_row_number(), Err(1.5));
        assert!(row(Some(f64::NAN)).checked_row_number().is_err());
        assert!(row(Some(1e12)).checked_row_number().is_err());
        assert_eq!(row(Some(3.0)).checked_row_number(), Ok(Some(3)));
    }

    #[test]
    fn test_topology_defaults_to_linear() {
        assert_eq!(row(None).topology(), Topology::Linear);
        assert_eq!(
            RowDescriptor::new(None, Vec::new(), Some(true)).topology(),
            Topology::Radial
        );
    }

    #[test]
    fn test_row_number_text_is_a_slice_of_the_row() {
        let row = r#"{ "stitches": ["sc"], "rowNumber": 2.5 }"#;

        let text = row_number_text(row).unwrap();
        assert_eq!(text, "2.5");
        assert_eq!(row.find("2.5"), Some(text.as_ptr() as usize - row.as_ptr() as usize));
        assert_eq!(row_number_text(r#"{"stitches": []}"#), None);
        assert_eq!(row_number_text(r#"{"rowNumber": null}"#), None);
    }

    #[test]
    fn test_resolve_keeps_unknown_tokens() {
        let descriptor = RowDescriptor::new(None, vec!["sc".into(), "xyz".into()], None);
        let spec = descriptor.resolve(0);

        assert_eq!(spec.stitches().len(), 2);
        assert!(spec.stitches()[1].is_unknown());
    }
}
