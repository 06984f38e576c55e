//! Edge autoscroll for the window and the nearest scrolling container.

use std::time::Duration;

use rowdrag_common::Area;

use crate::clone::FloatingClone;
use crate::surface::Surface;

/// Distance from an edge within which scrolling kicks in.
pub const SCROLL_BUFFER: f64 = 65.0;
/// Pixels scrolled per tick.
pub const SCROLL_STEP: f64 = 5.0;
pub const SCROLL_PERIOD: Duration = Duration::from_millis(20);

/// Bounds captured when the drag starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollBounds {
    pub window_height: f64,
    pub window_width: f64,
    pub container: Option<Area>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDeltas {
    pub window: f64,
    pub container: f64,
}

impl ScrollDeltas {
    pub fn is_idle(&self) -> bool {
        self.window == 0.0 && self.container == 0.0
    }
}

/// Scroll deltas for a pointer at `page_y`.
pub fn evaluate(page_y: f64, window_scroll_top: f64, bounds: &ScrollBounds) -> ScrollDeltas {
    let window = if page_y < window_scroll_top + SCROLL_BUFFER {
        -SCROLL_STEP
    } else if page_y > bounds.window_height + window_scroll_top - SCROLL_BUFFER {
        SCROLL_STEP
    } else {
        0.0
    };

    let container = match &bounds.container {
        Some(area) if page_y < area.top + SCROLL_BUFFER => -SCROLL_STEP,
        Some(area) if page_y > area.bottom - SCROLL_BUFFER => SCROLL_STEP,
        _ => 0.0,
    };

    ScrollDeltas { window, container }
}

/// What the caller must do with the timer after [`Autoscroller::ensure_running`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerChange {
    Start,
    Stop,
    Keep,
}

#[derive(Debug, Default)]
pub struct Autoscroller {
    deltas: ScrollDeltas,
    running: bool,
}

impl Autoscroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn deltas(&self) -> ScrollDeltas {
        self.deltas
    }

    /// Record the latest deltas and report whether the timer has to be
    /// started or stopped.
    pub fn ensure_running(&mut self, deltas: ScrollDeltas) -> TimerChange {
        if deltas.is_idle() {
            if self.running {
                self.running = false;
                return TimerChange::Stop;
            }
            return TimerChange::Keep;
        }

        self.deltas = deltas;
        if self.running {
            TimerChange::Keep
        } else {
            self.running = true;
            TimerChange::Start
        }
    }

    /// One timer tick. The clone only follows the window scroll when the
    /// window actually moved.
    pub fn tick<S: Surface + ?Sized>(&self, surface: &mut S, clone: Option<&mut FloatingClone>) {
        if !self.running {
            return;
        }

        if self.deltas.window != 0.0 && surface.scroll_window_by(self.deltas.window) {
            if let Some(clone) = clone {
                clone.shift(self.deltas.window);
                surface.place_clone(clone);
            }
        }

        if self.deltas.container != 0.0 {
            surface.scroll_container_by(self.deltas.container);
        }
    }

    /// Returns `true` if the timer was running.
    pub fn stop(&mut self) -> bool {
        std::mem::take(&mut self.running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(container: Option<Area>) -> ScrollBounds {
        ScrollBounds {
            window_height: 800.0,
            window_width: 1200.0,
            container,
        }
    }

    #[test]
    fn window_edges() {
        let b = bounds(None);
        assert_eq!(evaluate(30.0, 0.0, &b).window, -SCROLL_STEP);
        assert_eq!(evaluate(400.0, 0.0, &b).window, 0.0);
        assert_eq!(evaluate(780.0, 0.0, &b).window, SCROLL_STEP);
        // Scrolled down by 500: the top buffer is now 500..565.
        assert_eq!(evaluate(540.0, 500.0, &b).window, -SCROLL_STEP);
        assert_eq!(evaluate(1290.0, 500.0, &b).window, SCROLL_STEP);
    }

    #[test]
    fn container_edges() {
        let area = Area {
            left: 0.0,
            top: 200.0,
            right: 400.0,
            bottom: 500.0,
        };
        let b = bounds(Some(area));
        assert_eq!(evaluate(220.0, 0.0, &b).container, -SCROLL_STEP);
        assert_eq!(evaluate(350.0, 0.0, &b).container, 0.0);
        assert_eq!(evaluate(480.0, 0.0, &b).container, SCROLL_STEP);
        assert_eq!(evaluate(480.0, 0.0, &bounds(None)).container, 0.0);
    }

    #[test]
    fn timer_starts_once_and_stops_when_idle() {
        let mut scroller = Autoscroller::new();
        let down = ScrollDeltas {
            window: SCROLL_STEP,
            container: 0.0,
        };
        assert_eq!(scroller.ensure_running(down), TimerChange::Start);
        assert_eq!(scroller.ensure_running(down), TimerChange::Keep);
        assert!(scroller.is_running());

        assert_eq!(
            scroller.ensure_running(ScrollDeltas::default()),
            TimerChange::Stop
        );
        assert_eq!(
            scroller.ensure_running(ScrollDeltas::default()),
            TimerChange::Keep
        );
        assert!(!scroller.is_running());
    }

    #[test]
    fn direction_change_keeps_timer() {
        let mut scroller = Autoscroller::new();
        scroller.ensure_running(ScrollDeltas {
            window: SCROLL_STEP,
            container: 0.0,
        });
        let up = ScrollDeltas {
            window: -SCROLL_STEP,
            container: 0.0,
        };
        assert_eq!(scroller.ensure_running(up), TimerChange::Keep);
        assert_eq!(scroller.deltas(), up);
    }

    #[test]
    fn stop_reports_previous_state() {
        let mut scroller = Autoscroller::new();
        assert!(!scroller.stop());
        scroller.ensure_running(ScrollDeltas {
            window: 0.0,
            container: -SCROLL_STEP,
        });
        assert!(scroller.stop());
        assert!(!scroller.is_running());
    }
}
