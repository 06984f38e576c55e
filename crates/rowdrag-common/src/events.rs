use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::types::{DataSrc, DiffRecord, Placement, PointerSample, RowId};

/// Context delivered alongside the diff set of a completed drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderContext {
    pub data_src: DataSrc,
    /// Rows whose slot changed, in new slot order.
    pub nodes: Vec<RowId>,
    /// Stable row identifier -> value being written.
    pub values: BTreeMap<String, Value>,
    pub trigger_row: RowId,
    pub original_event: PointerSample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderPayload {
    pub diff: Vec<DiffRecord>,
    pub context: ReorderContext,
}

/// Lifecycle notifications emitted to table listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Notification {
    PreRowReorder {
        row: RowId,
        index: usize,
    },
    RowReorderChanged {
        placement: Placement,
        insert_point: usize,
        row: RowId,
    },
    RowReorder(ReorderPayload),
    RowReordered(ReorderPayload),
    RowReorderCanceled {
        start_index: usize,
    },
}

impl Notification {
    pub const PRE_ROW_REORDER: &'static str = "pre-row-reorder";
    pub const ROW_REORDER_CHANGED: &'static str = "row-reorder-changed";
    pub const ROW_REORDER: &'static str = "row-reorder";
    pub const ROW_REORDERED: &'static str = "row-reordered";
    pub const ROW_REORDER_CANCELED: &'static str = "row-reorder-canceled";

    pub fn name(&self) -> &'static str {
        match self {
            Notification::PreRowReorder { .. } => Self::PRE_ROW_REORDER,
            Notification::RowReorderChanged { .. } => Self::ROW_REORDER_CHANGED,
            Notification::RowReorder(_) => Self::ROW_REORDER,
            Notification::RowReordered(_) => Self::ROW_REORDERED,
            Notification::RowReorderCanceled { .. } => Self::ROW_REORDER_CANCELED,
        }
    }
}

/// Fan-out of notifications to observers that only watch (they cannot veto).
pub struct EventBus {
    sender: broadcast::Sender<Notification>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn publish(&self, notification: Notification) -> usize {
        self.sender.send(notification).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
