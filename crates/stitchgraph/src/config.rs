//! Configuration types for StitchGraph chart layout.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from TOML
//! (or any other serde format). Every field is optional and falls back to the
//! built-in stitch table.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Scalar layout constants (spacing, default height, round offset).
//! - [`StitchOverride`] - Per-stitch replacement of height and/or span.
//! - [`OutputConfig`] - Output formatting options.
//!
//! # Example
//!
//! ```
//! # use stitchgraph::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     stitch_spacing = 24.0
//!
//!     [stitches.dc]
//!     height = 32.0
//! "#).unwrap();
//!
//! let table = config.stitch_table().unwrap();
//! assert_eq!(table.stitch_spacing(), 24.0);
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use stitchgraph_core::{
    metrics::{
        DEFAULT_ROUND_INNER_OFFSET, DEFAULT_ROW_HEIGHT, DEFAULT_STITCH_SPACING, StitchTable,
    },
    stitch::StitchKind,
};

use crate::StitchGraphError;

/// Top-level configuration combining layout, stitch and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout constants section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Per-stitch overrides, keyed by stitch tag (`sc`, `dc2tog`, ...).
    #[serde(default)]
    stitches: BTreeMap<String, StitchOverride>,

    /// Output formatting section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] without stitch overrides.
    pub fn new(layout: LayoutConfig, output: OutputConfig) -> Self {
        Self {
            layout,
            stitches: BTreeMap::new(),
            output,
        }
    }

    /// Adds an override for one stitch tag (builder style).
    pub fn with_stitch_override(mut self, tag: impl Into<String>, value: StitchOverride) -> Self {
        self.stitches.insert(tag.into(), value);
        self
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Builds the immutable stitch table described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StitchGraphError::Config`] if an override names an unknown
    /// stitch tag, or if any height, span or constant is out of range.
    pub fn stitch_table(&self) -> Result<StitchTable, StitchGraphError> {
        let mut table = StitchTable::default()
            .with_stitch_spacing(self.layout.stitch_spacing)
            .and_then(|table| table.with_default_height(self.layout.default_height))
            .and_then(|table| table.with_round_inner_offset(self.layout.round_inner_offset))
            .map_err(|err| StitchGraphError::Config(format!("[layout] {err}")))?;

        for (tag, value) in &self.stitches {
            let kind: StitchKind = tag.parse().map_err(|_| {
                StitchGraphError::Config(format!("[stitches.{tag}] unknown stitch type `{tag}`"))
            })?;

            let mut metrics = table.kind_metrics(kind);
            if let Some(height) = value.height {
                metrics = metrics.with_height(height).map_err(|err| {
                    StitchGraphError::Config(format!("[stitches.{tag}] {err}"))
                })?;
            }
            if let Some(span) = value.span {
                metrics = metrics.with_span(span).map_err(|err| {
                    StitchGraphError::Config(format!("[stitches.{tag}] {err}"))
                })?;
            }
            table = table.with_metrics(kind, metrics);
        }

        Ok(table)
    }
}

/// Scalar layout constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent logical positions.
    stitch_spacing: f32,

    /// Height for unknown stitches and empty rows.
    default_height: f32,

    /// Margin added to every round radius.
    round_inner_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stitch_spacing: DEFAULT_STITCH_SPACING,
            default_height: DEFAULT_ROW_HEIGHT,
            round_inner_offset: DEFAULT_ROUND_INNER_OFFSET,
        }
    }
}

impl LayoutConfig {
    pub fn new(stitch_spacing: f32, default_height: f32, round_inner_offset: f32) -> Self {
        Self {
            stitch_spacing,
            default_height,
            round_inner_offset,
        }
    }

    pub fn stitch_spacing(&self) -> f32 {
        self.stitch_spacing
    }

    pub fn default_height(&self) -> f32 {
        self.default_height
    }

    pub fn round_inner_offset(&self) -> f32 {
        self.round_inner_offset
    }
}

/// Replacement metrics for one stitch. Unset fields keep the built-in value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StitchOverride {
    #[serde(default)]
    height: Option<f32>,

    #[serde(default)]
    span: Option<u32>,
}

impl StitchOverride {
    pub fn new(height: Option<f32>, span: Option<u32>) -> Self {
        Self { height, span }
    }
}

/// Output formatting options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the layout JSON.
    pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
