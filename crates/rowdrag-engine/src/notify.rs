//! Named notification listeners with veto support.

use rowdrag_common::{EventBus, Notification};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Proceed,
    /// Only meaningful for `row-reorder`: cancels the drop.
    Veto,
}

pub fn vetoed(verdicts: &[Verdict]) -> bool {
    verdicts.contains(&Verdict::Veto)
}

type Handler = Box<dyn FnMut(&Notification) -> Verdict>;

/// Handlers keyed by notification name, optionally mirrored onto an
/// [`EventBus`] for observers that only watch.
#[derive(Default)]
pub struct Listeners {
    handlers: Vec<(String, Handler)>,
    bus: Option<EventBus>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bus(bus: EventBus) -> Self {
        Self {
            handlers: Vec::new(),
            bus: Some(bus),
        }
    }

    pub fn on(&mut self, name: &str, handler: impl FnMut(&Notification) -> Verdict + 'static) {
        self.handlers.push((name.to_string(), Box::new(handler)));
    }

    /// Remove every handler for `name`. Returns how many were removed.
    pub fn off(&mut self, name: &str) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|(n, _)| n != name);
        before - self.handlers.len()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn emit(&mut self, notification: &Notification) -> Vec<Verdict> {
        let name = notification.name();
        let verdicts: Vec<Verdict> = self
            .handlers
            .iter_mut()
            .filter(|(n, _)| n == name)
            .map(|(_, handler)| handler(notification))
            .collect();

        if let Some(bus) = &self.bus {
            let delivered = bus.publish(notification.clone());
            debug!(event = name, delivered, "notification published");
        }
        verdicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowdrag_common::RowId;
    use std::cell::Cell;
    use std::rc::Rc;

    fn canceled() -> Notification {
        Notification::RowReorderCanceled { start_index: 1 }
    }

    #[test]
    fn only_matching_handlers_run() {
        let hits = Rc::new(Cell::new(0));
        let mut listeners = Listeners::new();

        let h = hits.clone();
        listeners.on(Notification::ROW_REORDER_CANCELED, move |_| {
            h.set(h.get() + 1);
            Verdict::Proceed
        });
        let h = hits.clone();
        listeners.on(Notification::PRE_ROW_REORDER, move |_| {
            h.set(h.get() + 100);
            Verdict::Proceed
        });

        let verdicts = listeners.emit(&canceled());
        assert_eq!(verdicts, vec![Verdict::Proceed]);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn any_veto_wins() {
        let mut listeners = Listeners::new();
        listeners.on(Notification::ROW_REORDER_CANCELED, |_| Verdict::Proceed);
        listeners.on(Notification::ROW_REORDER_CANCELED, |_| Verdict::Veto);
        assert!(vetoed(&listeners.emit(&canceled())));
        assert!(!vetoed(&[]));
    }

    #[test]
    fn off_removes_by_name() {
        let mut listeners = Listeners::new();
        listeners.on(Notification::ROW_REORDER, |_| Verdict::Veto);
        listeners.on(Notification::ROW_REORDER, |_| Verdict::Veto);
        listeners.on(Notification::ROW_REORDERED, |_| Verdict::Proceed);
        assert_eq!(listeners.off(Notification::ROW_REORDER), 2);
        assert_eq!(listeners.len(), 1);
    }

    #[tokio::test]
    async fn emit_mirrors_onto_bus() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut listeners = Listeners::with_bus(bus);
        assert!(listeners.is_empty());

        let event = Notification::PreRowReorder {
            row: RowId(4),
            index: 3,
        };
        assert!(listeners.emit(&event).is_empty());
        assert_eq!(rx.recv().await.unwrap(), event);
    }
}
