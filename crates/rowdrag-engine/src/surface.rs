//! Rendering surface abstraction.
//!
//! A surface answers layout questions (row boxes, body and window
//! metrics) and applies the visual side effects of a drag: reordering the
//! rendered rows, toggling classes, the floating clone and the autoscroll
//! timer. [`crate::headless::HeadlessSurface`] is an in-memory version.

use std::time::Duration;

use rowdrag_common::{Area, Point, RowId};

use crate::clone::FloatingClone;
use crate::geometry::RowBox;

/// Class names applied during a drag.
pub mod classes {
    /// On the dragged row while it sits in a droppable position.
    pub const MOVING: &str = "rowreorder-moving";
    /// On the document body when there is no horizontal overflow.
    pub const NO_OVERFLOW: &str = "rowreorder-no-overflow";
    /// On the floating clone while it is outside the table body.
    pub const DROP_NOT_ALLOWED: &str = "drop-not-allowed";
}

/// Element a class is toggled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    Row(RowId),
    Body,
    Clone,
}

/// Page-level measurements of the browser window or its equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    pub height: f64,
    pub width: f64,
    pub scroll_top: f64,
    /// Viewport width including any vertical scrollbar.
    pub inner_width: f64,
    /// Width of the document body.
    pub client_width: f64,
}

impl WindowMetrics {
    pub fn has_horizontal_overflow(&self) -> bool {
        (self.inner_width - self.client_width).abs() > 0.5
    }
}

/// Everything needed to build a floating copy of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMetrics {
    /// Top-left corner in page coordinates.
    pub offset: Point,
    pub outer_width: f64,
    pub outer_height: f64,
    pub cell_widths: Vec<f64>,
}

/// The horizontally scrolling region that hosts the table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollRegion {
    pub width: f64,
    pub scroll_left: f64,
}

pub trait Surface {
    fn header_height(&self) -> f64;
    fn row_box(&self, row: RowId) -> Option<RowBox>;
    fn row_metrics(&self, row: RowId) -> Option<RowMetrics>;
    /// Page area of the table body.
    fn body_area(&self) -> Area;
    fn scroll_region(&self) -> ScrollRegion;
    /// Page area of the nearest vertically scrolling ancestor, if any.
    fn scroll_container(&self) -> Option<Area>;
    fn window(&self) -> WindowMetrics;
    fn document_height(&self) -> f64;

    /// Re-render the body rows in `order`.
    fn show_order(&mut self, order: &[RowId]);
    fn set_class(&mut self, target: StyleTarget, class: &str, on: bool);
    fn mount_clone(&mut self, clone: &FloatingClone);
    fn place_clone(&mut self, clone: &FloatingClone);
    fn unmount_clone(&mut self);
    /// Scroll the window; returns whether the scroll position changed.
    fn scroll_window_by(&mut self, dy: f64) -> bool;
    fn scroll_container_by(&mut self, dy: f64);
    fn start_autoscroll(&mut self, period: Duration);
    fn stop_autoscroll(&mut self);
}

/// Boxes of `order`, skipping rows the surface cannot measure.
pub fn row_boxes<S: Surface + ?Sized>(surface: &S, order: &[RowId]) -> Vec<RowBox> {
    order.iter().filter_map(|&row| surface.row_box(row)).collect()
}
