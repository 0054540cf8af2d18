//! Placement for rows worked flat (back and forth).
//!
//! Even rows (0-based) read left to right. Odd rows are mirrored to model
//! turning the work: a stitch whose cursor start is `c` and span is `s` lands
//! on slot `n - c - s`, where `n` is the number of stitches in the row. Note
//! that `n` is the stitch count, not the span total, so rows containing
//! multi-span stitches are mirrored about `n / 2` rather than their
//! geometric midpoint.

use stitchgraph_core::{geometry::Point, metrics::StitchTable, stitch::StitchType};

use super::{LogicalCursor, Placement, PlacedRow};

pub fn place(
    table: &StitchTable,
    stitches: &[StitchType],
    row_index: usize,
    offset: f32,
) -> PlacedRow {
    let forward = row_index % 2 == 0;
    let count = stitches.len() as i64;
    let mut cursor = LogicalCursor::new();

    let placements = stitches
        .iter()
        .map(|stitch| {
            let span = table.metrics(stitch).span();
            let start = cursor.place(span);
            let slot = if forward {
                i64::from(start)
            } else {
                count - i64::from(start) - i64::from(span)
            };

            Placement {
                slot,
                span,
                position: Point::new(slot as f32 * table.stitch_spacing(), offset),
                angle_degrees: 0.0,
            }
        })
        .collect();

    PlacedRow {
        placements,
        logical_width: cursor.position(),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn stitches(tokens: &[&str]) -> Vec<StitchType> {
        tokens.iter().copied().map(StitchType::from).collect()
    }

    fn xs(row: &PlacedRow) -> Vec<f32> {
        row.placements.iter().map(|p| p.position.x()).collect()
    }

    #[test]
    fn test_forward_row_uses_cursor_directly() {
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["ch", "ch", "ch"]), 0, 0.0);

        assert_eq!(xs(&row), vec![0.0, 30.0, 60.0]);
        assert!(row.placements.iter().all(|p| p.angle_degrees == 0.0));
        assert_eq!(row.logical_width, 3);
    }

    #[test]
    fn test_odd_row_is_mirrored() {
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["sc", "sc", "sc"]), 1, -14.0);

        assert_eq!(xs(&row), vec![60.0, 30.0, 0.0]);
        assert!(row.placements.iter().all(|p| p.position.y() == -14.0));
    }

    #[test]
    fn test_merge_stitch_pushes_following_slot() {
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["sc2tog", "sc"]), 0, 0.0);

        assert_eq!(row.placements[0].slot, 0);
        assert_eq!(row.placements[1].slot, 2);
        assert_approx_eq!(f32, row.placements[1].position.x(), 60.0);
        assert_eq!(row.logical_width, 3);
    }

    #[test]
    fn test_mirror_width_is_stitch_count_not_span_total() {
        // ["sc2tog", "sc"] has two stitches but three logical positions.
        // Mirroring uses 2, so the ordinary stitch lands on slot -1.
        let table = StitchTable::default();
        let row = place(&table, &stitches(&["sc2tog", "sc"]), 1, 0.0);

        assert_eq!(row.placements[0].slot, 0);
        assert_eq!(row.placements[1].slot, -1);
        assert_eq!(xs(&row), vec![0.0, -30.0]);
        assert_eq!(row.logical_width, 3);
    }

    #[test]
    fn test_empty_row_places_nothing() {
        let table = StitchTable::default();
        let row = place(&table, &[], 3, -50.0);

        assert!(row.placements.is_empty());
        assert_eq!(row.logical_width, 0);
    }

    #[test]
    fn test_spacing_comes_from_table() {
        let table = StitchTable::default().with_stitch_spacing(12.5).unwrap();
        let row = place(&table, &stitches(&["dc", "dc"]), 0, 0.0);

        assert_eq!(xs(&row), vec![0.0, 12.5]);
    }
}
