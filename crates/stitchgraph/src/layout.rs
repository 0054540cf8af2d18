//! The topology and layout engine.
//!
//! [`LayoutEngine`] maps a [`Pattern`]'s rows onto 2D coordinates. It is a
//! single fold over the rows carrying one piece of state, the cumulative
//! growth-axis offset:
//!
//! 1. Resolve the row height (tallest stitch, or the default for empty rows).
//! 2. Advance the growth axis so the row touches the previous one.
//! 3. Place the stitches, flat ([`linear`]) or in a circle ([`radial`]),
//!    with a logical cursor that advances by each stitch's span.
//!
//! The engine never fails. Unknown stitches get default metrics and empty
//! rows produce no stitches.

mod linear;
mod radial;
mod stacking;

use log::{debug, info, trace, warn};
use serde::Serialize;

use stitchgraph_core::{
    geometry::Point,
    metrics::StitchTable,
    pattern::{Pattern, RowSpec, Topology},
    stitch::StitchType,
};

/// Running logical position within one row.
///
/// A stitch is placed at the current position, then the cursor moves past
/// its whole span.
#[derive(Debug, Default)]
struct LogicalCursor {
    position: u32,
}

impl LogicalCursor {
    fn new() -> Self {
        Self::default()
    }

    /// Returns the start position for a stitch of `span` and moves past it.
    fn place(&mut self, span: u32) -> u32 {
        let start = self.position;
        self.position = self.position.saturating_add(span);
        start
    }

    fn position(&self) -> u32 {
        self.position
    }
}

/// Geometry computed for one stitch before it is labeled.
#[derive(Debug, Clone, Copy)]
struct Placement {
    slot: i64,
    span: u32,
    position: Point,
    angle_degrees: f32,
}

/// Placements for one row plus the final cursor position.
#[derive(Debug, Default)]
struct PlacedRow {
    placements: Vec<Placement>,
    logical_width: u32,
}

/// A stitch with its final position and orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedStitch {
    id: String,
    #[serde(rename = "type")]
    stitch_type: StitchType,
    row_number: u32,
    index_in_row: usize,
    #[serde(flatten)]
    position: Point,
    angle_degrees: f32,
    span: u32,
    slot: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
}

impl PlacedStitch {
    /// Identifier of the form `row{r}-unit{u}`, built from 0-based indices.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stitch_type(&self) -> &StitchType {
        &self.stitch_type
    }

    /// Display number of the row this stitch belongs to.
    pub fn row_number(&self) -> u32 {
        self.row_number
    }

    pub fn index_in_row(&self) -> usize {
        self.index_in_row
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    /// Rotation in degrees. Always `0` in flat rows; in rounds the symbol
    /// faces radially outward.
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    /// Logical positions occupied by this stitch.
    pub fn span(&self) -> u32 {
        self.span
    }

    /// Logical offset the position was derived from. Negative values occur
    /// in mirrored rows that contain multi-span stitches.
    pub fn slot(&self) -> i64 {
        self.slot
    }

    /// The stitch this one was worked into. Not computed yet.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

/// One laid-out row or round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRow {
    number: u32,
    topology: Topology,
    height: f32,
    growth_offset: f32,
    logical_width: u32,
    stitches: Vec<PlacedStitch>,
}

impl LayoutRow {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Effective row height (tallest stitch).
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Offset of the row along the growth axis; `0` for the first row.
    pub fn growth_offset(&self) -> f32 {
        self.growth_offset
    }

    /// Final cursor position, i.e. the sum of all stitch spans.
    pub fn logical_width(&self) -> u32 {
        self.logical_width
    }

    pub fn stitches(&self) -> &[PlacedStitch] {
        &self.stitches
    }
}

/// The engine output: rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    rows: Vec<LayoutRow>,
}

impl Layout {
    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    /// Iterate over every placed stitch, row by row.
    pub fn stitches(&self) -> impl Iterator<Item = &PlacedStitch> {
        self.rows.iter().flat_map(|row| row.stitches.iter())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes layouts against a read-only [`StitchTable`].
///
/// The engine holds no state between calls; the same input and table always
/// yield the same [`Layout`].
///
/// # Examples
///
/// ```
/// # use stitchgraph::layout::LayoutEngine;
/// # use stitchgraph::{metrics::StitchTable, pattern::{Pattern, RowSpec}};
/// let table = StitchTable::default();
/// let engine = LayoutEngine::new(&table);
///
/// let pattern = Pattern::from(vec![RowSpec::linear(1, ["ch", "ch", "ch"])]);
/// let layout = engine.calculate(&pattern);
///
/// let xs: Vec<f32> = layout.stitches().map(|s| s.x()).collect();
/// assert_eq!(xs, vec![0.0, 30.0, 60.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'t> {
    table: &'t StitchTable,
}

impl<'t> LayoutEngine<'t> {
    pub fn new(table: &'t StitchTable) -> Self {
        Self { table }
    }

    /// Lay out every row of `pattern`.
    pub fn calculate(&self, pattern: &Pattern) -> Layout {
        self.calculate_rows(pattern.rows())
    }

    /// Lay out a slice of rows in order.
    pub fn calculate_rows(&self, rows: &[RowSpec]) -> Layout {
        info!(rows_count = rows.len(); "Calculating layout");

        let mut axis = stacking::GrowthAxis::new();
        let rows: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| self.layout_row(&mut axis, row_index, row))
            .collect();

        let layout = Layout { rows };
        trace!(layout:?; "Calculated layout");
        layout
    }

    fn layout_row(
        &self,
        axis: &mut stacking::GrowthAxis,
        row_index: usize,
        row: &RowSpec,
    ) -> LayoutRow {
        let stitches = row.stitches();
        for stitch in stitches.iter().filter(|stitch| stitch.is_unknown()) {
            warn!(
                row_index,
                token = stitch.tag();
                "Unknown stitch type, using default metrics"
            );
        }

        let height = stacking::row_height(self.table, stitches);
        let growth_offset = axis.advance(height);

        let placed = match row.topology() {
            Topology::Linear => linear::place(self.table, stitches, row_index, growth_offset),
            Topology::Radial => radial::place(self.table, stitches, growth_offset),
        };

        debug!(
            row_index,
            number = row.number(),
            topology = row.topology().to_string(),
            stitches_count = stitches.len(),
            height,
            growth_offset;
            "Row placed"
        );

        let stitches = stitches
            .iter()
            .zip(placed.placements)
            .enumerate()
            .map(|(index, (stitch, placement))| PlacedStitch {
                id: format!("row{row_index}-unit{index}"),
                stitch_type: stitch.clone(),
                row_number: row.number(),
                index_in_row: index,
                position: placement.position,
                angle_degrees: placement.angle_degrees,
                span: placement.span,
                slot: placement.slot,
                parent_id: None,
            })
            .collect();

        LayoutRow {
            number: row.number(),
            topology: row.topology(),
            height,
            growth_offset,
            logical_width: placed.logical_width,
            stitches,
        }
    }
}
