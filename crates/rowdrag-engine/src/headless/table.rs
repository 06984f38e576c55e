use std::cmp::Ordering;

use rowdrag_common::{DataSrc, Notification, RowId};
use serde::Serialize;
use serde_json::Value;

use crate::host::HostTable;
use crate::notify::{Listeners, Verdict};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryRow {
    pub handle: RowId,
    pub key: Option<String>,
    pub data: Value,
}

/// A table held entirely in memory. When a sort column is set every draw
/// re-sorts the display order by that field, like a host table whose
/// ordering column is the one being reordered.
pub struct MemoryTable {
    rows: Vec<MemoryRow>,
    display: Vec<RowId>,
    columns: Vec<DataSrc>,
    sort: Option<DataSrc>,
    listeners: Listeners,
    draws: usize,
    invalidated: Vec<(RowId, usize)>,
    next_id: u32,
}

impl MemoryTable {
    pub fn new(columns: Vec<DataSrc>) -> Self {
        Self {
            rows: Vec::new(),
            display: Vec::new(),
            columns,
            sort: None,
            listeners: Listeners::new(),
            draws: 0,
            invalidated: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_listeners(mut self, listeners: Listeners) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn push_row(&mut self, key: Option<String>, data: Value) -> RowId {
        let handle = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(MemoryRow { handle, key, data });
        self.display.push(handle);
        handle
    }

    pub fn set_sort(&mut self, sort: Option<DataSrc>) {
        self.sort = sort;
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn invalidated(&self) -> &[(RowId, usize)] {
        &self.invalidated
    }

    pub fn value(&self, row: RowId, src: &DataSrc) -> Option<&Value> {
        self.data(row).and_then(|data| src.read(data))
    }

    /// Rows in display order.
    pub fn snapshot(&self) -> Vec<MemoryRow> {
        self.display
            .iter()
            .filter_map(|&handle| self.row(handle).cloned())
            .collect()
    }

    fn row(&self, handle: RowId) -> Option<&MemoryRow> {
        self.rows.iter().find(|r| r.handle == handle)
    }
}

impl HostTable for MemoryTable {
    fn rows(&self) -> Vec<RowId> {
        self.display.clone()
    }

    fn index_of(&self, row: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.handle == row)
    }

    fn data(&self, row: RowId) -> Option<&Value> {
        self.row(row).map(|r| &r.data)
    }

    fn data_mut(&mut self, row: RowId) -> Option<&mut Value> {
        self.rows
            .iter_mut()
            .find(|r| r.handle == row)
            .map(|r| &mut r.data)
    }

    fn row_key(&self, row: RowId) -> Option<String> {
        self.row(row)
            .map(|r| r.key.clone().unwrap_or_else(|| r.handle.to_string()))
    }

    fn column_sources(&self) -> Vec<DataSrc> {
        self.columns.clone()
    }

    fn invalidate(&mut self, row: RowId, column: usize) {
        self.invalidated.push((row, column));
    }

    fn draw(&mut self, _reset_paging: bool) {
        self.draws += 1;
        let Some(sort) = self.sort.clone() else {
            return;
        };
        let mut display = std::mem::take(&mut self.display);
        display.sort_by(|&a, &b| {
            compare_values(
                self.value(a, &sort).unwrap_or(&Value::Null),
                self.value(b, &sort).unwrap_or(&Value::Null),
            )
        });
        self.display = display;
    }

    fn trigger(&mut self, notification: &Notification) -> Vec<Verdict> {
        self.listeners.emit(notification)
    }
}

/// Numbers before strings, nulls last.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(_), _) => Ordering::Less,
        (_, Value::Number(_)) => Ordering::Greater,
        (Value::String(_), _) => Ordering::Less,
        (_, Value::String(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
