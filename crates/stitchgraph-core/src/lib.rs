//! StitchGraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the StitchGraph
//! crates. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Stitches**: The closed stitch vocabulary ([`stitch::StitchKind`], [`stitch::StitchType`])
//! - **Metrics**: The stitch metadata table consumed by the layout engine ([`metrics`] module)
//! - **Pattern**: The typed row model handed to the layout engine ([`pattern`] module)

pub mod geometry;
pub mod metrics;
pub mod pattern;
pub mod stitch;
