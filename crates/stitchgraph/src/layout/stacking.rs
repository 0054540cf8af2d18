//! Row heights and growth-axis stacking.
//!
//! Rows are stacked so that adjacent rows touch: row `i` sits
//! `height(i - 1) / 2 + height(i) / 2` further along the negative growth axis
//! than row `i - 1`. The first row is centered on the origin.

use stitchgraph_core::{metrics::StitchTable, stitch::StitchType};

/// Effective height of a row: the tallest stitch in it.
///
/// Stitches in a row sit side by side, so heights are not summed. An empty
/// row has the table's default height.
pub fn row_height(table: &StitchTable, stitches: &[StitchType]) -> f32 {
    stitches
        .iter()
        .map(|stitch| table.metrics(stitch).height())
        .reduce(f32::max)
        .unwrap_or_else(|| table.default_height())
}

/// Cumulative offset along the growth axis.
#[derive(Debug, Default)]
pub struct GrowthAxis {
    offset: f32,
    previous_height: Option<f32>,
}

impl GrowthAxis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves past a row of the given height and returns that row's offset.
    ///
    /// The first call always returns `0.0`.
    pub fn advance(&mut self, height: f32) -> f32 {
        if let Some(previous) = self.previous_height {
            self.offset -= previous / 2.0 + height / 2.0;
        }
        self.previous_height = Some(height);
        self.offset
    }
}
