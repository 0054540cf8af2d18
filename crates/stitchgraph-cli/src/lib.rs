//! CLI logic for the StitchGraph chart layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use stitchgraph::{ChartBuilder, StitchGraphError};

/// Run the StitchGraph CLI application
///
/// Reads the row-list document, lays it out and writes the layout JSON to
/// the output file.
///
/// # Errors
///
/// Returns `StitchGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), StitchGraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing row list"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let mut builder = ChartBuilder::new(&app_config)?;
    if args.compact {
        builder = builder.with_pretty(false);
    }
    let pattern = builder.parse(&source)?;
    let layout = builder.layout(&pattern);
    let json = builder.render_json(&layout)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output, rows_count = layout.len(); "Layout written successfully");

    Ok(())
}
