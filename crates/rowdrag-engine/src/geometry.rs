//! Pure geometry for hit-testing rows and choosing an insertion slot.
//!
//! Row tops are measured relative to the table, so the header height is
//! subtracted to get positions relative to the body. Pointer positions
//! passed in here are already relative to the body top.

use rowdrag_common::{Area, Point};

/// Vertical extent of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBox {
    /// Top edge relative to the table.
    pub top: f64,
    pub outer_height: f64,
}

impl RowBox {
    pub fn new(top: f64, outer_height: f64) -> Self {
        Self { top, outer_height }
    }

    fn body_span(&self, header_height: f64) -> (f64, f64) {
        let top = self.top - header_height;
        (top, top + self.outer_height)
    }
}

/// Midpoint of every row in display order, relative to the body top.
pub fn slot_midpoints(rows: &[RowBox], header_height: f64) -> Vec<f64> {
    rows.iter()
        .map(|row| {
            let (top, bottom) = row.body_span(header_height);
            (top + bottom) / 2.0
        })
        .collect()
}

/// Index of the row under `body_y`. Edges are inclusive, and when two rows
/// share an edge the later one wins.
pub fn row_index_at(rows: &[RowBox], header_height: f64, body_y: f64) -> Option<usize> {
    rows.iter().rposition(|row| {
        let (top, bottom) = row.body_span(header_height);
        body_y >= top && body_y <= bottom
    })
}

/// First slot whose midpoint lies below `body_y`, or the slot count when
/// the pointer is past the last midpoint.
pub fn insertion_point(midpoints: &[f64], body_y: f64) -> usize {
    midpoints
        .iter()
        .position(|&mid| body_y < mid)
        .unwrap_or(midpoints.len())
}

/// Page area covered by the table body.
pub fn body_area(offset: Point, width: f64, height: f64) -> Area {
    Area::from_origin(offset, width, height)
}

/// Open-interval overlap on both axes.
pub fn rectangles_intersect(a: &Area, b: &Area) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(header: f64, heights: &[f64]) -> Vec<RowBox> {
        let mut top = header;
        heights
            .iter()
            .map(|&h| {
                let row = RowBox::new(top, h);
                top += h;
                row
            })
            .collect()
    }

    #[test]
    fn midpoints_are_relative_to_body() {
        let rows = stacked(40.0, &[30.0, 30.0, 60.0]);
        let mids = slot_midpoints(&rows, 40.0);
        assert_eq!(mids, vec![15.0, 45.0, 90.0]);
    }

    #[test]
    fn insertion_point_picks_first_lower_midpoint() {
        let mids = [15.0, 45.0, 75.0];
        assert_eq!(insertion_point(&mids, 0.0), 0);
        assert_eq!(insertion_point(&mids, 14.9), 0);
        assert_eq!(insertion_point(&mids, 15.0), 1);
        assert_eq!(insertion_point(&mids, 50.0), 2);
        assert_eq!(insertion_point(&mids, 80.0), 3);
        assert_eq!(insertion_point(&[], 10.0), 0);
    }

    #[test]
    fn insertion_point_is_monotonic() {
        let rows = stacked(25.0, &[20.0, 35.0, 18.0, 42.0, 30.0]);
        let mids = slot_midpoints(&rows, 25.0);
        let mut previous = 0;
        let mut y = -20.0;
        while y < 200.0 {
            let point = insertion_point(&mids, y);
            assert!(point >= previous, "point went backwards at y={y}");
            assert!(point <= mids.len());
            previous = point;
            y += 0.5;
        }
        assert_eq!(previous, mids.len());
    }

    #[test]
    fn row_index_inside_and_on_edges() {
        let rows = stacked(40.0, &[30.0, 30.0, 30.0]);
        assert_eq!(row_index_at(&rows, 40.0, 10.0), Some(0));
        assert_eq!(row_index_at(&rows, 40.0, 45.0), Some(1));
        // Shared edge belongs to the later row.
        assert_eq!(row_index_at(&rows, 40.0, 30.0), Some(1));
        assert_eq!(row_index_at(&rows, 40.0, 90.0), Some(2));
    }

    #[test]
    fn row_index_outside_body() {
        let rows = stacked(40.0, &[30.0, 30.0]);
        assert_eq!(row_index_at(&rows, 40.0, -1.0), None);
        assert_eq!(row_index_at(&rows, 40.0, 60.5), None);
        assert_eq!(row_index_at(&[], 0.0, 5.0), None);
    }

    #[test]
    fn rectangles_intersect_is_symmetric() {
        let areas = [
            Area::from_origin(Point::new(0.0, 0.0), 100.0, 100.0),
            Area::from_origin(Point::new(50.0, 50.0), 100.0, 100.0),
            Area::from_origin(Point::new(100.0, 0.0), 10.0, 10.0),
            Area::from_origin(Point::new(200.0, 200.0), 5.0, 5.0),
            Area::from_origin(Point::new(10.0, 10.0), 1.0, 1.0),
        ];
        for a in &areas {
            for b in &areas {
                assert_eq!(rectangles_intersect(a, b), rectangles_intersect(b, a));
            }
        }
        assert!(rectangles_intersect(&areas[0], &areas[1]));
        assert!(!rectangles_intersect(&areas[0], &areas[2]));
        assert!(!rectangles_intersect(&areas[0], &areas[3]));
    }

    #[test]
    fn body_area_spans_width_and_height() {
        let area = body_area(Point::new(8.0, 140.0), 300.0, 90.0);
        assert_eq!(area.bottom, 230.0);
        assert_eq!(area.right, 308.0);
    }
}
