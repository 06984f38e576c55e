//! Visual cleanup shared by release and cancel.

use crate::session::DragSession;
use crate::surface::{classes, StyleTarget, Surface};

use super::RowReorder;

/// Undo every visual side effect of a drag. Safe to call more than once.
pub(super) fn finish<S: Surface + ?Sized>(session: &mut DragSession, surface: &mut S) {
    if session.autoscroll.stop() {
        surface.stop_autoscroll();
    }
    if session.clone.take().is_some() {
        surface.unmount_clone();
    }
    surface.set_class(StyleTarget::Row(session.row), classes::MOVING, false);
    surface.set_class(StyleTarget::Body, classes::NO_OVERFLOW, false);
}

impl RowReorder {
    /// Detach from the table: drop any drag without notifying and forget a
    /// pending submission.
    pub fn destroy<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(mut session) = self.take_session() {
            finish(&mut session, surface);
        }
        self.take_pending();
    }
}
