//! Pointer-down: resolve the handle and set up a drag session.

use rowdrag_common::{new_correlation_id, Notification, PointerSample, PressTarget};
use tracing::{debug, info, warn};

use crate::autoscroll::{Autoscroller, ScrollBounds};
use crate::clone::{DragAnchor, FloatingClone};
use crate::geometry;
use crate::handle::HandleHit;
use crate::host::HostTable;
use crate::order::RowOrder;
use crate::session::{CachedGeometry, DragSession};
use crate::surface::{classes, row_boxes, StyleTarget, Surface};

use super::{DragState, Outcome, RowReorder};

impl RowReorder {
    pub(super) fn pointer_down<H, S>(
        &mut self,
        sample: PointerSample,
        target: &PressTarget,
        table: &mut H,
        surface: &mut S,
    ) -> Outcome
    where
        H: HostTable + ?Sized,
        S: Surface + ?Sized,
    {
        if !self.config.enable {
            return Outcome::Ignored;
        }
        if !matches!(self.state, DragState::Idle) {
            debug!(table = %self.table, "press ignored: drag or submission in progress");
            return Outcome::Ignored;
        }

        let row = match self.resolver.resolve(target) {
            HandleHit::Row(row) => row,
            HandleHit::Excluded => {
                debug!(table = %self.table, "press on excluded child");
                return Outcome::Ignored;
            }
            HandleHit::Miss => return Outcome::Ignored,
        };
        let (Some(index), Some(metrics)) = (table.index_of(row), surface.row_metrics(row)) else {
            warn!(table = %self.table, %row, "press on a row the table does not know");
            return Outcome::Ignored;
        };

        table.trigger(&Notification::PreRowReorder { row, index });

        let start_order = table.rows();
        let order = RowOrder::new(start_order.clone());
        let geometry = CachedGeometry::capture(surface, &order);
        let anchor = DragAnchor {
            pointer: sample.page,
            offset: metrics.offset,
        };

        let mut clone = FloatingClone::create(row, &metrics, surface.scroll_region());
        surface.mount_clone(&clone);
        clone.reposition(sample.page, &anchor, self.config.snap_x, geometry.document_height);
        surface.place_clone(&clone);

        let boxes = row_boxes(surface, order.as_slice());
        let start_row_index =
            geometry::row_index_at(&boxes, surface.header_height(), sample.page.y - geometry.body_top)
                .or_else(|| order.position(row))
                .unwrap_or(0);

        surface.set_class(StyleTarget::Row(row), classes::MOVING, true);
        let window = surface.window();
        if !window.has_horizontal_overflow() {
            surface.set_class(StyleTarget::Body, classes::NO_OVERFLOW, true);
        }

        let session = DragSession {
            id: new_correlation_id(),
            row,
            anchor,
            start_order,
            start_row_index,
            last_insert: None,
            drop_allowed: true,
            order,
            geometry,
            scroll: ScrollBounds {
                window_height: window.height,
                window_width: window.width,
                container: surface.scroll_container(),
            },
            clone: Some(clone),
            autoscroll: Autoscroller::new(),
        };

        info!(
            table = %self.table,
            session = %session.id,
            %row,
            start_index = start_row_index,
            "row drag started"
        );
        self.state = DragState::Dragging(Box::new(session));
        Outcome::Started {
            row,
            start_index: start_row_index,
        }
    }
}
