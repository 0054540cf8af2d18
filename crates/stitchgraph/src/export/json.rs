//! JSON export of the layout output contract.
//!
//! The document has the shape:
//!
//! ```json
//! { "rows": [ { "number": 1, "topology": "linear", "height": 10.0,
//!               "growthOffset": 0.0, "logicalWidth": 1,
//!               "stitches": [ { "id": "row0-unit0", "type": "ch",
//!                               "rowNumber": 1, "indexInRow": 0,
//!                               "x": 0.0, "y": 0.0, "angleDegrees": 0.0,
//!                               "span": 1, "slot": 0 } ] } ] }
//! ```
//!
//! `parentId` is omitted while it is not computed.

use std::io::Write;

use log::debug;

use crate::{
    export::{Error, Exporter},
    layout::Layout,
};

/// Writes layouts as JSON to any [`Write`] sink.
#[derive(Debug)]
pub struct JsonExporter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonExporter<W> {
    /// Create an exporter that pretty-prints by default.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Choose between pretty and compact output (builder style).
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Consume the exporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    fn export_layout(&mut self, layout: &Layout) -> Result<(), Error> {
        debug!(rows_count = layout.len(), pretty = self.pretty; "Exporting layout as JSON");

        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, layout)
        } else {
            serde_json::to_writer(&mut self.writer, layout)
        };
        result.map_err(|err| match err.io_error_kind() {
            Some(kind) => Error::Io(std::io::Error::new(kind, err.to_string())),
            None => Error::Serialize(err.to_string()),
        })?;

        if self.pretty {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
