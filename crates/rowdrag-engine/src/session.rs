//! State owned by one drag, from pointer-down to release or cancel.

use rowdrag_common::{Area, Placement, RowId};

use crate::autoscroll::{Autoscroller, ScrollBounds};
use crate::clone::{DragAnchor, FloatingClone};
use crate::geometry;
use crate::order::RowOrder;
use crate::surface::{row_boxes, Surface};

/// Layout measurements reused across pointer moves. Refreshed whenever the
/// rendered order changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CachedGeometry {
    pub midpoints: Vec<f64>,
    /// Page y of the body's top edge.
    pub body_top: f64,
    pub body_area: Area,
    pub document_height: f64,
}

impl CachedGeometry {
    pub fn capture<S: Surface + ?Sized>(surface: &S, order: &RowOrder) -> Self {
        let body_area = surface.body_area();
        let boxes = row_boxes(surface, order.as_slice());
        Self {
            midpoints: geometry::slot_midpoints(&boxes, surface.header_height()),
            body_top: body_area.top,
            body_area,
            document_height: surface.document_height(),
        }
    }
}

#[derive(Debug)]
pub struct DragSession {
    /// Correlates the log lines of this drag.
    pub id: String,
    pub row: RowId,
    pub anchor: DragAnchor,
    pub start_order: Vec<RowId>,
    /// Index of the row under the pointer at pointer-down.
    pub start_row_index: usize,
    /// Last insertion point acted on. `None` until the first move.
    pub last_insert: Option<usize>,
    pub drop_allowed: bool,
    pub order: RowOrder,
    pub geometry: CachedGeometry,
    pub scroll: ScrollBounds,
    pub clone: Option<FloatingClone>,
    pub autoscroll: Autoscroller,
}

impl DragSession {
    /// Display index the dragged row had at pointer-down.
    pub fn start_position(&self) -> usize {
        self.start_order
            .iter()
            .position(|&r| r == self.row)
            .unwrap_or(self.start_row_index)
    }

    /// Put the dragged row back at its pointer-down index. Returns the
    /// placement when the order changed, `None` when it was already there.
    pub fn restore_start(&mut self) -> Option<Placement> {
        let index = self.start_position();
        self.last_insert = Some(index);
        if self.order.position(self.row) == Some(index) {
            return None;
        }
        self.order.place_at(self.row, index)
    }
}
