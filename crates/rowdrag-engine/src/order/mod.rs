//! Live display order of the rows while a drag is in progress.

mod operations;

use rowdrag_common::RowId;

/// Row handles in display order. Every handle appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOrder {
    pub(super) rows: Vec<RowId>,
}

impl RowOrder {
    pub fn new(rows: Vec<RowId>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn as_slice(&self) -> &[RowId] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).copied()
    }

    pub fn position(&self, row: RowId) -> Option<usize> {
        self.rows.iter().position(|&r| r == row)
    }

    pub fn contains(&self, row: RowId) -> bool {
        self.rows.contains(&row)
    }
}
