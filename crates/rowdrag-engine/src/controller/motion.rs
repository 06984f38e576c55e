//! Pointer-move and autoscroll ticks while dragging.

use rowdrag_common::{Notification, Placement, PointerSample, TableId};
use tracing::{debug, warn};

use crate::autoscroll::{self, TimerChange, SCROLL_PERIOD};
use crate::clone::FloatingClone;
use crate::geometry;
use crate::host::HostTable;
use crate::session::{CachedGeometry, DragSession};
use crate::surface::{classes, StyleTarget, Surface};

use super::{DragState, Outcome, RowReorder};

impl RowReorder {
    pub(super) fn pointer_move<H, S>(
        &mut self,
        sample: PointerSample,
        table: &mut H,
        surface: &mut S,
    ) -> Outcome
    where
        H: HostTable + ?Sized,
        S: Surface + ?Sized,
    {
        let cancelable = self.config.cancelable;
        let snap = self.config.snap_x;
        let DragState::Dragging(session) = &mut self.state else {
            return Outcome::Ignored;
        };
        let session: &mut DragSession = session;

        if let Some(clone) = session.clone.as_mut() {
            clone.reposition(sample.page, &session.anchor, snap, session.geometry.document_height);
        }

        if cancelable {
            let clone_area = session
                .clone
                .as_ref()
                .map(FloatingClone::area)
                .unwrap_or_default();
            session.drop_allowed =
                geometry::rectangles_intersect(&session.geometry.body_area, &clone_area);
            if let Some(clone) = session.clone.as_mut() {
                clone.drop_not_allowed = !session.drop_allowed;
            }
            surface.set_class(StyleTarget::Clone, classes::DROP_NOT_ALLOWED, !session.drop_allowed);
            surface.set_class(StyleTarget::Row(session.row), classes::MOVING, session.drop_allowed);
        }
        if let Some(clone) = session.clone.as_ref() {
            surface.place_clone(clone);
        }

        let (point, moved) = if cancelable && !session.drop_allowed {
            let moved = restore_start_position(&self.table, session, table, surface);
            (session.start_position(), moved)
        } else {
            let body_y = sample.page.y - session.geometry.body_top;
            let point = geometry::insertion_point(&session.geometry.midpoints, body_y);
            (point, move_into_position(&self.table, session, point, table, surface))
        };

        let deltas = autoscroll::evaluate(sample.page.y, surface.window().scroll_top, &session.scroll);
        match session.autoscroll.ensure_running(deltas) {
            TimerChange::Start => surface.start_autoscroll(SCROLL_PERIOD),
            TimerChange::Stop => surface.stop_autoscroll(),
            TimerChange::Keep => {}
        }

        Outcome::Moved {
            insert_point: moved.then_some(point),
            drop_allowed: session.drop_allowed,
        }
    }

    pub(super) fn autoscroll_tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Outcome {
        let DragState::Dragging(session) = &mut self.state else {
            return Outcome::Ignored;
        };
        let session: &mut DragSession = session;
        if !session.autoscroll.is_running() {
            return Outcome::Ignored;
        }
        session.autoscroll.tick(surface, session.clone.as_mut());
        Outcome::Scrolled
    }
}

/// Re-render the dragged row at insertion point `point` unless it is
/// already there. Returns `true` if the order changed.
fn move_into_position<H, S>(
    table_id: &TableId,
    session: &mut DragSession,
    point: usize,
    table: &mut H,
    surface: &mut S,
) -> bool
where
    H: HostTable + ?Sized,
    S: Surface + ?Sized,
{
    if session.last_insert == Some(point) {
        return false;
    }

    let Some(placement) = session.order.move_to(session.row, point, session.last_insert) else {
        warn!(table = %table_id, session = %session.id, "dragged row missing from order");
        return false;
    };
    session.last_insert = Some(point);
    render_move(table_id, session, placement, point, table, surface);
    true
}

/// Put the dragged row back at its pointer-down index, whatever path the
/// drag took. Returns `true` if the order changed.
pub(super) fn restore_start_position<H, S>(
    table_id: &TableId,
    session: &mut DragSession,
    table: &mut H,
    surface: &mut S,
) -> bool
where
    H: HostTable + ?Sized,
    S: Surface + ?Sized,
{
    let Some(placement) = session.restore_start() else {
        return false;
    };
    let point = session.start_position();
    render_move(table_id, session, placement, point, table, surface);
    true
}

fn render_move<H, S>(
    table_id: &TableId,
    session: &mut DragSession,
    placement: Placement,
    point: usize,
    table: &mut H,
    surface: &mut S,
) where
    H: HostTable + ?Sized,
    S: Surface + ?Sized,
{
    surface.show_order(session.order.as_slice());
    session.geometry = CachedGeometry::capture(surface, &session.order);
    debug!(
        table = %table_id,
        session = %session.id,
        insert_point = point,
        %placement,
        "row moved"
    );

    table.trigger(&Notification::RowReorderChanged {
        placement,
        insert_point: point,
        row: session.row,
    });
}
