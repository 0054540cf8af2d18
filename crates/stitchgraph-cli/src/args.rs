//! Command-line argument definitions for the StitchGraph CLI.
//!
//! [`Args`] is parsed from the command line using [`clap`]. Arguments control
//! input/output paths, configuration file selection, output formatting and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the StitchGraph chart layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input row-list JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output layout JSON file
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write compact JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}
