//! The floating copy of the dragged row that follows the pointer.

use rowdrag_common::{Area, Point, RowId};
use rowdrag_config::SnapX;

use crate::surface::{RowMetrics, ScrollRegion};

/// Where the drag started: the pointer and the row's top-left corner, both
/// in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer: Point,
    pub offset: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingClone {
    pub row: RowId,
    pub width: f64,
    pub height: f64,
    /// Cell widths copied from the source row so columns line up.
    pub cell_widths: Vec<f64>,
    /// Width of the clone's container, matching the scroll region.
    pub container_width: f64,
    pub scroll_left: f64,
    /// Top-left corner of the container in page coordinates.
    pub position: Point,
    pub drop_not_allowed: bool,
}

impl FloatingClone {
    /// Build a clone from measurements taken before anything is mounted,
    /// so the source row's layout is not disturbed.
    pub fn create(row: RowId, metrics: &RowMetrics, region: ScrollRegion) -> Self {
        Self {
            row,
            width: metrics.outer_width,
            height: metrics.outer_height,
            cell_widths: metrics.cell_widths.clone(),
            container_width: region.width,
            scroll_left: region.scroll_left,
            position: metrics.offset,
            drop_not_allowed: false,
        }
    }

    /// Follow the pointer vertically, clamped to the document, and
    /// horizontally unless `snap` fixes the left edge.
    pub fn reposition(&mut self, pointer: Point, anchor: &DragAnchor, snap: SnapX, document_height: f64) {
        let mut top = pointer.y - anchor.pointer.y + anchor.offset.y;
        let left = snap
            .fixed_left(anchor.offset.x)
            .unwrap_or(pointer.x - anchor.pointer.x + anchor.offset.x + self.scroll_left);

        if top < 0.0 {
            top = 0.0;
        }
        if top + self.height > document_height {
            top = (document_height - self.height).max(0.0);
        }

        self.position = Point::new(left, top);
    }

    /// Shift vertically after the window scrolled underneath the clone.
    pub fn shift(&mut self, dy: f64) {
        self.position.y += dy;
    }

    pub fn area(&self) -> Area {
        Area::from_origin(self.position, self.container_width, self.height)
    }
}
