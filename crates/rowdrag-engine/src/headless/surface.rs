use std::collections::{HashMap, HashSet};
use std::time::Duration;

use rowdrag_common::{Area, Point, RowId};

use crate::clone::FloatingClone;
use crate::geometry::{self, RowBox};
use crate::surface::{RowMetrics, ScrollRegion, StyleTarget, Surface, WindowMetrics};

/// Rows stacked top to bottom under a fixed-height header.
pub struct HeadlessSurface {
    /// Table top-left corner in page coordinates.
    origin: Point,
    header_height: f64,
    width: f64,
    heights: HashMap<RowId, f64>,
    order: Vec<RowId>,
    cell_widths: Vec<f64>,
    window: WindowMetrics,
    document_height: f64,
    container: Option<Area>,
    container_scroll: f64,
    scroll_left: f64,
    classes: HashSet<(StyleTarget, String)>,
    clone: Option<FloatingClone>,
    timer: Option<Duration>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            origin: Point::new(0.0, 100.0),
            header_height: 40.0,
            width: 300.0,
            heights: HashMap::new(),
            order: Vec::new(),
            cell_widths: Vec::new(),
            window: WindowMetrics {
                height: 800.0,
                width: 1200.0,
                scroll_top: 0.0,
                inner_width: 1200.0,
                client_width: 1200.0,
            },
            document_height: 2000.0,
            container: None,
            container_scroll: 0.0,
            scroll_left: 0.0,
            classes: HashSet::new(),
            clone: None,
            timer: None,
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_header_height(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_window(mut self, window: WindowMetrics) -> Self {
        self.window = window;
        self
    }

    pub fn with_document_height(mut self, height: f64) -> Self {
        self.document_height = height;
        self
    }

    pub fn with_container(mut self, container: Area) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_cell_widths(mut self, widths: Vec<f64>) -> Self {
        self.cell_widths = widths;
        self
    }

    pub fn add_row(&mut self, row: RowId, height: f64) {
        self.heights.insert(row, height);
        self.order.push(row);
    }

    pub fn order(&self) -> &[RowId] {
        &self.order
    }

    pub fn has_class(&self, target: StyleTarget, class: &str) -> bool {
        self.classes.contains(&(target, class.to_string()))
    }

    pub fn clone_view(&self) -> Option<&FloatingClone> {
        self.clone.as_ref()
    }

    pub fn autoscroll_period(&self) -> Option<Duration> {
        self.timer
    }

    pub fn window_scroll_top(&self) -> f64 {
        self.window.scroll_top
    }

    pub fn container_scroll_top(&self) -> f64 {
        self.container_scroll
    }

    fn body_height(&self) -> f64 {
        self.order
            .iter()
            .map(|row| self.heights.get(row).copied().unwrap_or(0.0))
            .sum()
    }
}

impl Surface for HeadlessSurface {
    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn row_box(&self, row: RowId) -> Option<RowBox> {
        let mut top = self.header_height;
        for r in &self.order {
            let height = self.heights.get(r).copied().unwrap_or(0.0);
            if *r == row {
                return Some(RowBox::new(top, height));
            }
            top += height;
        }
        None
    }

    fn row_metrics(&self, row: RowId) -> Option<RowMetrics> {
        let row_box = self.row_box(row)?;
        Some(RowMetrics {
            offset: Point::new(self.origin.x, self.origin.y + row_box.top),
            outer_width: self.width,
            outer_height: row_box.outer_height,
            cell_widths: self.cell_widths.clone(),
        })
    }

    fn body_area(&self) -> Area {
        geometry::body_area(
            Point::new(self.origin.x, self.origin.y + self.header_height),
            self.width,
            self.body_height(),
        )
    }

    fn scroll_region(&self) -> ScrollRegion {
        ScrollRegion {
            width: self.width,
            scroll_left: self.scroll_left,
        }
    }

    fn scroll_container(&self) -> Option<Area> {
        self.container
    }

    fn window(&self) -> WindowMetrics {
        self.window
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn show_order(&mut self, order: &[RowId]) {
        self.order = order.to_vec();
    }

    fn set_class(&mut self, target: StyleTarget, class: &str, on: bool) {
        if on {
            self.classes.insert((target, class.to_string()));
        } else {
            self.classes.remove(&(target, class.to_string()));
        }
    }

    fn mount_clone(&mut self, clone: &FloatingClone) {
        self.clone = Some(clone.clone());
    }

    fn place_clone(&mut self, clone: &FloatingClone) {
        self.clone = Some(clone.clone());
    }

    fn unmount_clone(&mut self) {
        self.clone = None;
        self.classes
            .retain(|(target, _)| *target != StyleTarget::Clone);
    }

    fn scroll_window_by(&mut self, dy: f64) -> bool {
        let max = (self.document_height - self.window.height).max(0.0);
        let next = (self.window.scroll_top + dy).clamp(0.0, max);
        let moved = next != self.window.scroll_top;
        self.window.scroll_top = next;
        moved
    }

    fn scroll_container_by(&mut self, dy: f64) {
        self.container_scroll = (self.container_scroll + dy).max(0.0);
    }

    fn start_autoscroll(&mut self, period: Duration) {
        self.timer = Some(period);
    }

    fn stop_autoscroll(&mut self) {
        self.timer = None;
    }
}
