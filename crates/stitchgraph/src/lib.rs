//! StitchGraph - layout engine for crochet stitch charts.
//!
//! Turns a normalized list of rows (or rounds) of stitches into 2D positions
//! and orientations, ready for a renderer to draw symbols at. Flat rows are
//! stacked and zig-zag back and forth; rounds are laid out on concentric
//! circles. Increases and decreases occupy as many logical positions as their
//! span, so later stitches stay aligned.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use stitchgraph_core::{geometry, metrics, pattern, stitch};

pub use error::StitchGraphError;

use log::{debug, info, trace};

use stitchgraph_core::{metrics::StitchTable, pattern::Pattern};

use config::AppConfig;
use export::{Exporter, json::JsonExporter};
use layout::{Layout, LayoutEngine};

/// Builder for decoding, laying out and exporting stitch charts.
///
/// # Examples
///
/// ```rust
/// use stitchgraph::{ChartBuilder, config::AppConfig};
///
/// let source = r#"{"rows": [{"rowNumber": 1, "stitches": ["ch", "ch", "ch"]}]}"#;
///
/// let builder = ChartBuilder::new(&AppConfig::default())
///     .expect("Default configuration is valid");
///
/// let pattern = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&pattern);
/// let json = builder.render_json(&layout).expect("Failed to export");
///
/// assert!(json.contains("\"row0-unit2\""));
/// ```
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    table: StitchTable,
    pretty: bool,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self {
            table: StitchTable::default(),
            pretty: true,
        }
    }
}

impl ChartBuilder {
    /// Create a chart builder from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StitchGraphError::Config`] if the configuration describes an
    /// invalid stitch table.
    pub fn new(config: &AppConfig) -> Result<Self, StitchGraphError> {
        Ok(Self {
            table: config.stitch_table()?,
            pretty: config.output().pretty(),
        })
    }

    /// Create a chart builder around an existing stitch table.
    pub fn with_table(table: StitchTable) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// Choose pretty or compact JSON output (builder style).
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The stitch table this builder lays out with.
    pub fn table(&self) -> &StitchTable {
        &self.table
    }

    /// Decode a row-list document.
    ///
    /// # Errors
    ///
    /// Returns [`StitchGraphError::Parse`] if the document is malformed.
    pub fn parse(&self, source: &str) -> Result<Pattern, StitchGraphError> {
        info!("Parsing row list");

        let pattern = stitchgraph_parser::parse(source)
            .map_err(|err| StitchGraphError::new_parse_error(err, source))?;

        debug!(
            rows_count = pattern.rows().len(),
            stitches_count = pattern.stitch_count();
            "Row list parsed successfully"
        );
        trace!(pattern:?; "Parsed pattern");

        Ok(pattern)
    }

    /// Compute the layout of a pattern. This never fails.
    pub fn layout(&self, pattern: &Pattern) -> Layout {
        LayoutEngine::new(&self.table).calculate(pattern)
    }

    /// Serialize a layout to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StitchGraphError::Export`] if serialization fails.
    pub fn render_json(&self, layout: &Layout) -> Result<String, StitchGraphError> {
        let mut exporter = JsonExporter::new(Vec::new()).with_pretty(self.pretty);
        exporter.export_layout(layout)?;

        let json = String::from_utf8(exporter.into_inner())
            .map_err(|err| export::Error::Serialize(err.to_string()))?;

        info!(bytes = json.len(); "Layout exported successfully");
        Ok(json)
    }
}
