use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RowId;

/// One row whose slot changed during a reorder. `new_value` is the field
/// value of the row that used to occupy the slot; `old_value` is the
/// value the row holds before the commit writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub row: RowId,
    pub old_value: Value,
    pub new_value: Value,
    pub new_position: usize,
    pub old_position: usize,
}
