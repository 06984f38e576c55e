//! The table the controller is attached to, and the optional editor used to
//! commit a drop through a submission round-trip.

use std::collections::BTreeMap;

use rowdrag_common::{DataSrc, Notification, RowId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::notify::Verdict;

pub trait HostTable {
    /// Row handles in current display order.
    fn rows(&self) -> Vec<RowId>;
    /// Stable data index of a row.
    fn index_of(&self, row: RowId) -> Option<usize>;
    fn data(&self, row: RowId) -> Option<&Value>;
    fn data_mut(&mut self, row: RowId) -> Option<&mut Value>;
    /// Stable identifier used as the key of the context value map.
    fn row_key(&self, row: RowId) -> Option<String>;
    /// Data source of every column, by column index.
    fn column_sources(&self) -> Vec<DataSrc>;
    /// Mark a cell's cached rendering as stale.
    fn invalidate(&mut self, row: RowId, column: usize);
    fn draw(&mut self, reset_paging: bool);
    /// Deliver a notification to table listeners and collect their verdicts.
    fn trigger(&mut self, notification: &Notification) -> Vec<Verdict>;
}

/// Asynchronous editor collaborator. Completion is reported back through
/// [`crate::RowReorder::finish_submission`].
pub trait Submitter {
    fn edit(&mut self, rows: &[RowId], form_options: &Value);
    fn multi_set(&mut self, field: &DataSrc, values: &BTreeMap<String, Value>);
    fn submit(&mut self);
}

/// How a drop is written back.
pub enum CommitPath {
    /// Apply the diff to the row data right away.
    Direct,
    Delegated(Box<dyn Submitter>),
}

impl CommitPath {
    pub fn is_delegated(&self) -> bool {
        matches!(self, CommitPath::Delegated(_))
    }
}

impl std::fmt::Debug for CommitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitPath::Direct => f.write_str("Direct"),
            CommitPath::Delegated(_) => f.write_str("Delegated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    Success,
    Failure,
    Cancelled,
}
