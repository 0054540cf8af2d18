//! Typed pattern model handed to the layout engine.
//!
//! A [`Pattern`] is an ordered list of [`RowSpec`]s. Row numbers and
//! topologies are already resolved, so the engine never needs to look at
//! the raw input document.

use std::fmt;

use serde::Serialize;

use crate::stitch::StitchType;

/// How the stitches of a row are arranged.
///
/// # Variants
///
/// - `Linear` - Stitches sit on a straight axis, alternating direction per row (default)
/// - `Radial` - Stitches sit on a circle around the origin (worked in rounds)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    #[default]
    Linear,
    Radial,
}

impl Topology {
    /// Maps the `isRound` flag of the input contract onto a topology.
    pub fn from_round_flag(is_round: bool) -> Self {
        if is_round {
            Topology::Radial
        } else {
            Topology::Linear
        }
    }

    /// Returns `true` for rows worked in rounds.
    pub fn is_radial(self) -> bool {
        matches!(self, Topology::Radial)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Linear => write!(f, "linear"),
            Topology::Radial => write!(f, "radial"),
        }
    }
}

/// One row (or round) of stitches.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpec {
    number: u32,
    stitches: Vec<StitchType>,
    topology: Topology,
}

impl RowSpec {
    /// Creates a row. `number` is the 1-based display number.
    pub fn new(number: u32, stitches: Vec<StitchType>, topology: Topology) -> Self {
        Self {
            number,
            stitches,
            topology,
        }
    }

    /// Creates a linear row from stitch tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stitchgraph_core::pattern::{RowSpec, Topology};
    /// let row = RowSpec::linear(1, ["ch", "ch", "ch"]);
    /// assert_eq!(row.stitches().len(), 3);
    /// assert_eq!(row.topology(), Topology::Linear);
    /// ```
    pub fn linear<'a>(number: u32, tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            number,
            tokens.into_iter().map(StitchType::from).collect(),
            Topology::Linear,
        )
    }

    /// Creates a radial row (round) from stitch tokens.
    pub fn radial<'a>(number: u32, tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            number,
            tokens.into_iter().map(StitchType::from).collect(),
            Topology::Radial,
        )
    }

    /// Display number of the row. It has no influence on placement order.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Stitches in working order.
    pub fn stitches(&self) -> &[StitchType] {
        &self.stitches
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_empty(&self) -> bool {
        self.stitches.is_empty()
    }
}

/// An ordered sequence of rows, ready for layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    rows: Vec<RowSpec>,
}

impl Pattern {
    pub fn new(rows: Vec<RowSpec>) -> Self {
        Self { rows }
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[RowSpec] {
        &self.rows
    }

    /// Total number of stitch tokens across all rows.
    pub fn stitch_count(&self) -> usize {
        self.rows.iter().map(|row| row.stitches().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<RowSpec>> for Pattern {
    fn from(rows: Vec<RowSpec>) -> Self {
        Self::new(rows)
    }
}
