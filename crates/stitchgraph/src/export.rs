//! Export of computed layouts.
//!
//! # Pipeline Position
//!
//! ```text
//! Row-list JSON
//!     ↓ parse
//! Pattern
//!     ↓ layout
//! Layout (positioned stitches)
//!     ↓ export (this module)
//! Output for the rendering side
//! ```
//!
//! # Available Backends
//!
//! - [`json`]: the output contract as JSON via [`json::JsonExporter`]

pub mod json;

use thiserror::Error;

use crate::layout::Layout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Writes `layout` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the layout cannot be encoded, or
    /// [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, layout: &Layout) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
