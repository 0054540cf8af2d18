//! Stitch metadata consumed by the layout engine.
//!
//! Every [`StitchKind`] carries a physical `height` along the growth axis and
//! a logical `span`: the number of row positions the stitch occupies. Ordinary
//! stitches span one position; increases and decreases span as many positions
//! as stitches they produce or bases they consume.
//!
//! A [`StitchTable`] bundles these per-stitch [`StitchMetrics`] with the scalar
//! constants of the layout (spacing, default height, round inner offset). It is
//! built once and only read afterwards.
//!
//! # Example
//!
//! ```
//! # use stitchgraph_core::{metrics::StitchTable, stitch::StitchType};
//! let table = StitchTable::default();
//!
//! assert_eq!(table.metrics(&StitchType::from("dc")).height(), 30.0);
//! assert_eq!(table.metrics(&StitchType::from("sc3tog")).span(), 3);
//!
//! // Unknown stitches fall back to the default height and a span of one
//! let unknown = table.metrics(&StitchType::from("xyz"));
//! assert_eq!(unknown.height(), table.default_height());
//! assert_eq!(unknown.span(), 1);
//! ```

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::stitch::{StitchKind, StitchType};

/// Horizontal distance between two adjacent logical positions.
pub const DEFAULT_STITCH_SPACING: f32 = 30.0;

/// Height used for unknown stitches and for empty rows.
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Margin added to every round radius so the first round does not collapse
/// onto the origin.
pub const DEFAULT_ROUND_INNER_OFFSET: f32 = 40.0;

/// Errors raised while building a [`StitchTable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("Invalid {name}: {value} (must be a positive finite number)")]
    NonPositive { name: &'static str, value: f32 },

    #[error("Invalid span {0} (must be at least 1)")]
    ZeroSpan(u32),
}

/// Height and span of a single stitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchMetrics {
    height: f32,
    span: u32,
}

impl StitchMetrics {
    /// Creates validated metrics.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] if `height` is not a positive finite number
    /// or `span` is zero.
    pub fn new(height: f32, span: u32) -> Result<Self, MetricsError> {
        let height = positive("stitch height", height)?;
        if span == 0 {
            return Err(MetricsError::ZeroSpan(span));
        }
        Ok(Self { height, span })
    }

    /// Infallible constructor for the built-in table.
    const fn builtin(height: f32, span: u32) -> Self {
        Self { height, span }
    }

    /// Physical extent along the growth axis.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Number of logical row positions occupied.
    pub fn span(self) -> u32 {
        self.span
    }

    /// Returns a copy with a different height.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::NonPositive`] for a non-positive or non-finite height.
    pub fn with_height(self, height: f32) -> Result<Self, MetricsError> {
        Self::new(height, self.span)
    }

    /// Returns a copy with a different span.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::ZeroSpan`] if `span` is zero.
    pub fn with_span(self, span: u32) -> Result<Self, MetricsError> {
        Self::new(self.height, span)
    }
}

/// Built-in metrics for a recognized stitch.
pub fn builtin_metrics(kind: StitchKind) -> StitchMetrics {
    match kind {
        StitchKind::Chain => StitchMetrics::builtin(10.0, 1),
        StitchKind::SlipStitch => StitchMetrics::builtin(6.0, 1),
        StitchKind::SingleCrochet => StitchMetrics::builtin(18.0, 1),
        StitchKind::HalfDoubleCrochet => StitchMetrics::builtin(22.0, 1),
        StitchKind::DoubleCrochet => StitchMetrics::builtin(30.0, 1),
        StitchKind::Treble => StitchMetrics::builtin(40.0, 1),
        StitchKind::Increase | StitchKind::Decrease => StitchMetrics::builtin(20.0, 2),
        // No drawn height of their own; these sit at the default row height.
        StitchKind::Sc2Inc | StitchKind::Sc2Tog | StitchKind::Dc2Inc | StitchKind::Dc2Tog => {
            StitchMetrics::builtin(DEFAULT_ROW_HEIGHT, 2)
        }
        StitchKind::Sc3Inc | StitchKind::Sc3Tog | StitchKind::Dc3Inc | StitchKind::Dc3Tog => {
            StitchMetrics::builtin(DEFAULT_ROW_HEIGHT, 3)
        }
        StitchKind::MagicRing => StitchMetrics::builtin(DEFAULT_ROW_HEIGHT, 1),
    }
}

/// Immutable lookup table of stitch metrics and layout constants.
///
/// Built once (usually from configuration) and shared read-only with every
/// layout computation.
#[derive(Debug, Clone)]
pub struct StitchTable {
    metrics: HashMap<StitchKind, StitchMetrics>,
    stitch_spacing: f32,
    default_height: f32,
    round_inner_offset: f32,
}

impl Default for StitchTable {
    fn default() -> Self {
        Self {
            metrics: StitchKind::ALL
                .into_iter()
                .map(|kind| (kind, builtin_metrics(kind)))
                .collect(),
            stitch_spacing: DEFAULT_STITCH_SPACING,
            default_height: DEFAULT_ROW_HEIGHT,
            round_inner_offset: DEFAULT_ROUND_INNER_OFFSET,
        }
    }
}

impl StitchTable {
    /// Replaces the metrics of one stitch kind (builder style).
    pub fn with_metrics(mut self, kind: StitchKind, metrics: StitchMetrics) -> Self {
        debug!(
            stitch = kind.tag(),
            height = metrics.height(),
            span = metrics.span();
            "Overriding stitch metrics"
        );
        self.metrics.insert(kind, metrics);
        self
    }

    /// Sets the horizontal spacing between logical positions.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::NonPositive`] for a non-positive or non-finite value.
    pub fn with_stitch_spacing(mut self, spacing: f32) -> Result<Self, MetricsError> {
        self.stitch_spacing = positive("stitch spacing", spacing)?;
        Ok(self)
    }

    /// Sets the fallback height for unknown stitches and empty rows.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::NonPositive`] for a non-positive or non-finite value.
    pub fn with_default_height(mut self, height: f32) -> Result<Self, MetricsError> {
        self.default_height = positive("default height", height)?;
        Ok(self)
    }

    /// Sets the margin added to every round radius.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::NonPositive`] for a non-positive or non-finite value.
    pub fn with_round_inner_offset(mut self, offset: f32) -> Result<Self, MetricsError> {
        self.round_inner_offset = positive("round inner offset", offset)?;
        Ok(self)
    }

    /// Looks up the metrics for a stitch token.
    ///
    /// Unknown tokens resolve to `{default height, span 1}`.
    pub fn metrics(&self, stitch: &StitchType) -> StitchMetrics {
        stitch
            .kind()
            .and_then(|kind| self.metrics.get(&kind).copied())
            .unwrap_or(StitchMetrics {
                height: self.default_height,
                span: 1,
            })
    }

    /// Returns the metrics registered for a recognized stitch kind.
    pub fn kind_metrics(&self, kind: StitchKind) -> StitchMetrics {
        self.metrics
            .get(&kind)
            .copied()
            .unwrap_or_else(|| builtin_metrics(kind))
    }

    /// Horizontal distance between adjacent logical positions.
    pub fn stitch_spacing(&self) -> f32 {
        self.stitch_spacing
    }

    /// Fallback height for unknown stitches and empty rows.
    pub fn default_height(&self) -> f32 {
        self.default_height
    }

    /// Margin added to every round radius.
    pub fn round_inner_offset(&self) -> f32 {
        self.round_inner_offset
    }
}

fn positive(name: &'static str, value: f32) -> Result<f32, MetricsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MetricsError::NonPositive { name, value })
    }
}
