//! Geometric primitives for chart layout and positioning.
//!
//! # Coordinate System
//!
//! StitchGraph uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, so rows that grow "upward" on screen
//!   carry increasingly negative y values
//!
//! Angles follow the same convention: `0` points along `+X` and positive
//! angles rotate towards `+Y`.

use serde::Serialize;

/// A 2D point representing a position in chart coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point on a circle centered at the origin.
    ///
    /// `angle` is in radians, measured from `+X` towards `+Y`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stitchgraph_core::geometry::Point;
    /// let p = Point::from_polar(10.0, 0.0);
    /// assert_eq!(p.x(), 10.0);
    /// assert_eq!(p.y(), 0.0);
    /// ```
    pub fn from_polar(radius: f32, angle: f32) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}
