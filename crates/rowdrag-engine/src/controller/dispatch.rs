//! Input dispatch: route each input to its handler.

use crate::host::HostTable;
use crate::surface::Surface;

use super::{DragInput, Key, Outcome, RowReorder};

impl RowReorder {
    pub fn handle<H, S>(&mut self, input: DragInput, table: &mut H, surface: &mut S) -> Outcome
    where
        H: HostTable + ?Sized,
        S: Surface + ?Sized,
    {
        match input {
            DragInput::PointerDown { sample, target } => {
                self.pointer_down(sample, &target, table, surface)
            }
            DragInput::PointerMove(sample) => self.pointer_move(sample, table, surface),
            DragInput::PointerUp(sample) => self.pointer_up(sample, table, surface),
            DragInput::KeyUp(key) => self.key_up(&key, table, surface),
            DragInput::AutoscrollTick => self.autoscroll_tick(surface),
        }
    }

    fn key_up<H, S>(&mut self, key: &Key, table: &mut H, surface: &mut S) -> Outcome
    where
        H: HostTable + ?Sized,
        S: Surface + ?Sized,
    {
        if !self.config.cancelable || *key != Key::Escape {
            return Outcome::Ignored;
        }
        match self.take_session() {
            Some(session) => self.cancel(session, table, surface),
            None => Outcome::Ignored,
        }
    }
}
