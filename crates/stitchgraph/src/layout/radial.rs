//! Placement for rounds (worked in a circle).
//!
//! Stitches sit on a circle of radius `|offset| + inner offset`. The angular
//! position of a stitch is `cursor / n * 2π`, with the same span-advancing
//! cursor as flat rows, so a multi-span stitch takes a proportionally wider
//! slice of the circle.

use std::f32::consts::TAU;

use stitchgraph_core::{geometry::Point, metrics::StitchTable, stitch::StitchType};

use super::{LogicalCursor, Placement, PlacedRow};

pub fn place(table: &StitchTable, stitches: &[StitchType], offset: f32) -> PlacedRow {
    // No stitches means no angle step to compute.
    if stitches.is_empty() {
        return PlacedRow::default();
    }

    let count = stitches.len() as f32;
    let radius = radius(table, offset);
    let mut cursor = LogicalCursor::new();

    let placements = stitches
        .iter()
        .map(|stitch| {
            let span = table.metrics(stitch).span();
            let start = cursor.place(span);
            let angle = start as f32 / count * TAU;

            Placement {
                slot: i64::from(start),
                span,
                position: Point::from_polar(radius, angle),
                angle_degrees: angle.to_degrees(),
            }
        })
        .collect();

    PlacedRow {
        placements,
        logical_width: cursor.position(),
    }
}

/// Radius of the round whose growth-axis offset is `offset`.
pub fn radius(table: &StitchTable, offset: f32) -> f32 {
    offset.abs() + table.round_inner_offset()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn stitches(tokens: &[&str]) -> Vec<StitchType> {
        tokens.iter().copied().map(StitchType::from).collect()
    }

    #[test]
    fn test_four_stitches_at_quarter_turns() {
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["sc", "sc", "sc", "sc"]), 0.0);

        let angles: Vec<f32> = row.placements.iter().map(|p| p.angle_degrees).collect();
        for (angle, expected) in angles.iter().zip([0.0, 90.0, 180.0, 270.0]) {
            assert_approx_eq!(f32, *angle, expected, epsilon = 0.001);
        }
        for placement in &row.placements {
            assert_approx_eq!(f32, placement.position.hypot(), 40.0, epsilon = 0.001);
        }
    }

    #[test]
    fn test_first_stitch_on_positive_x_axis() {
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["dc", "dc", "dc"]), -24.0);

        let first = row.placements[0].position;
        assert_approx_eq!(f32, first.x(), 64.0);
        assert_approx_eq!(f32, first.y(), 0.0);
    }

    #[test]
    fn test_radius_grows_with_offset() {
        let table = StitchTable::default();

        assert_approx_eq!(f32, radius(&table, 0.0), 40.0);
        assert_approx_eq!(f32, radius(&table, -14.0), 54.0);
        assert!(radius(&table, -30.0) > radius(&table, -14.0));
    }

    #[test]
    fn test_multi_span_stitch_takes_wider_slice() {
        // Cursor starts are 0, 1, 3 over a stitch count of 3.
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["sc", "sc2inc", "sc"]), 0.0);

        assert_approx_eq!(f32, row.placements[1].angle_degrees, 120.0, epsilon = 0.001);
        assert_approx_eq!(f32, row.placements[2].angle_degrees, 360.0, epsilon = 0.001);
        assert_eq!(row.placements[2].slot, 3);
        assert_eq!(row.logical_width, 4);
    }

    #[test]
    fn test_empty_round_places_nothing() {
        let table = StitchTable::default();
        let row = place(&table, &[], -40.0);

        assert!(row.placements.is_empty());
        assert_eq!(row.logical_width, 0);
    }
}
