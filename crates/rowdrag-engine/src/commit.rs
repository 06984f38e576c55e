//! Diffing the start and end orders, and writing the result back.

use std::collections::BTreeMap;

use rowdrag_common::{DataSrc, DiffRecord, RowId};
use serde_json::Value;
use tracing::warn;

use crate::host::HostTable;

/// Diff records plus the derived context pieces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderDiff {
    pub records: Vec<DiffRecord>,
    /// Rows whose slot changed, in new slot order.
    pub nodes: Vec<RowId>,
    /// Row key -> value being written.
    pub values: BTreeMap<String, Value>,
}

fn field<H: HostTable + ?Sized>(table: &H, row: RowId, data_src: &DataSrc) -> Value {
    table
        .data(row)
        .and_then(|data| data_src.read(data))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Compare slot by slot. A row that ended up in slot `i` takes over the
/// ordering value of the row that occupied slot `i` at the start.
pub fn compute_diff<H: HostTable + ?Sized>(
    start: &[RowId],
    end: &[RowId],
    table: &H,
    data_src: &DataSrc,
) -> ReorderDiff {
    let mut diff = ReorderDiff::default();

    for (slot, (&before, &after)) in start.iter().zip(end).enumerate() {
        if before == after {
            continue;
        }

        let new_value = field(table, before, data_src);
        let old_value = field(table, after, data_src);
        if let Some(key) = table.row_key(after) {
            diff.values.insert(key, new_value.clone());
        }

        diff.records.push(DiffRecord {
            row: after,
            old_value,
            new_value,
            new_position: slot,
            old_position: start.iter().position(|&r| r == after).unwrap_or(slot),
        });
        diff.nodes.push(after);
    }

    diff
}

/// Write every record's new value into its row and invalidate the columns
/// that display `data_src`. Returns the number of rows written.
pub fn apply_diff<H: HostTable + ?Sized>(
    table: &mut H,
    data_src: &DataSrc,
    records: &[DiffRecord],
) -> usize {
    let columns: Vec<usize> = table
        .column_sources()
        .iter()
        .enumerate()
        .filter(|(_, src)| *src == data_src)
        .map(|(idx, _)| idx)
        .collect();

    let mut written = 0;
    for record in records {
        match table.data_mut(record.row) {
            Some(data) => match data_src.write(data, record.new_value.clone()) {
                Ok(()) => written += 1,
                Err(e) => {
                    warn!(row = %record.row, "failed to write {data_src}: {e}");
                    continue;
                }
            },
            None => {
                warn!(row = %record.row, "row vanished before the update was applied");
                continue;
            }
        }
        for &column in &columns {
            table.invalidate(record.row, column);
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::MemoryTable;
    use serde_json::json;

    fn table() -> (MemoryTable, Vec<RowId>) {
        let mut table = MemoryTable::new(vec![DataSrc::Index(0), DataSrc::Index(1)]);
        let rows = ["a", "b", "c"]
            .iter()
            .zip([1, 2, 3])
            .map(|(key, seq)| table.push_row(Some(key.to_string()), json!([seq, key])))
            .collect();
        (table, rows)
    }

    #[test]
    fn unchanged_order_has_empty_diff() {
        let (table, rows) = table();
        let diff = compute_diff(&rows, &rows, &table, &DataSrc::Index(0));
        assert!(diff.records.is_empty());
        assert!(diff.nodes.is_empty());
        assert!(diff.values.is_empty());
    }

    #[test]
    fn adjacent_swap_exchanges_values() {
        let (table, rows) = table();
        let (a, b, c) = (rows[0], rows[1], rows[2]);
        let diff = compute_diff(&[a, b, c], &[a, c, b], &table, &DataSrc::Index(0));

        assert_eq!(diff.records.len(), 2);
        assert_eq!(diff.records[0].row, c);
        assert_eq!(diff.records[0].new_value, json!(2));
        assert_eq!(diff.records[0].old_value, json!(3));
        assert_eq!(diff.records[0].new_position, 1);
        assert_eq!(diff.records[0].old_position, 2);

        assert_eq!(diff.records[1].row, b);
        assert_eq!(diff.records[1].new_value, json!(3));
        assert_eq!(diff.records[1].old_value, json!(2));

        assert_eq!(diff.nodes, vec![c, b]);
        assert_eq!(diff.values["c"], json!(2));
        assert_eq!(diff.values["b"], json!(3));
    }

    #[test]
    fn apply_writes_and_invalidates_matching_column() {
        let (mut table, rows) = table();
        let (a, b, c) = (rows[0], rows[1], rows[2]);
        let diff = compute_diff(&[a, b, c], &[b, c, a], &table, &DataSrc::Index(0));

        assert_eq!(apply_diff(&mut table, &DataSrc::Index(0), &diff.records), 3);
        assert_eq!(table.data(a), Some(&json!([3, "a"])));
        assert_eq!(table.data(b), Some(&json!([1, "b"])));
        assert_eq!(table.data(c), Some(&json!([2, "c"])));
        assert_eq!(table.invalidated().len(), 3);
        assert!(table.invalidated().iter().all(|&(_, col)| col == 0));
    }

    #[test]
    fn apply_skips_unwritable_rows() {
        let mut table = MemoryTable::new(vec![DataSrc::Index(0)]);
        let a = table.push_row(None, json!("scalar"));
        let record = DiffRecord {
            row: a,
            old_value: Value::Null,
            new_value: json!(1),
            new_position: 0,
            old_position: 1,
        };
        assert_eq!(apply_diff(&mut table, &DataSrc::Index(0), &[record]), 0);
        assert!(table.invalidated().is_empty());
    }
}
