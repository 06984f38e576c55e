//! Mutating operations on RowOrder: insert relative to an anchor and move
//! to an insertion point.

use rowdrag_common::{Placement, RowId};

use super::RowOrder;

impl RowOrder {
    fn take(&mut self, row: RowId) -> bool {
        match self.position(row) {
            Some(idx) => {
                self.rows.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move `row` directly after `anchor`. Returns `false` if either handle
    /// is unknown.
    pub fn insert_after(&mut self, row: RowId, anchor: RowId) -> bool {
        if row == anchor {
            return self.contains(row);
        }
        if !self.contains(anchor) || !self.take(row) {
            return false;
        }
        let idx = self.position(anchor).map_or(self.rows.len(), |i| i + 1);
        self.rows.insert(idx, row);
        true
    }

    /// Move `row` directly before `anchor`. Returns `false` if either handle
    /// is unknown.
    pub fn insert_before(&mut self, row: RowId, anchor: RowId) -> bool {
        if row == anchor {
            return self.contains(row);
        }
        if !self.contains(anchor) || !self.take(row) {
            return false;
        }
        let idx = self.position(anchor).unwrap_or(self.rows.len());
        self.rows.insert(idx, row);
        true
    }

    /// Relocate `row` for insertion point `point`.
    ///
    /// When the point moved past the previous one (`None` counts as 0) the
    /// row goes after the row currently at `point - 1`, otherwise before the
    /// row at `point`, or to the end when there is no such row.
    pub fn move_to(&mut self, row: RowId, point: usize, last: Option<usize>) -> Option<Placement> {
        if !self.contains(row) {
            return None;
        }

        if point > last.unwrap_or(0) {
            let anchor = self.get(point - 1).or_else(|| self.rows.last().copied())?;
            self.insert_after(row, anchor);
            return Some(Placement::After);
        }

        match self.get(point) {
            Some(anchor) => {
                self.insert_before(row, anchor);
            }
            None => {
                self.take(row);
                self.rows.push(row);
            }
        }
        Some(Placement::Before)
    }

    /// Put `row` at display index `index`, clamped to the end. The returned
    /// placement is relative to the row's new neighbour: before the next row
    /// when it lands first, after the previous one otherwise.
    pub fn place_at(&mut self, row: RowId, index: usize) -> Option<Placement> {
        if !self.take(row) {
            return None;
        }
        let index = index.min(self.rows.len());
        self.rows.insert(index, row);
        Some(if index == 0 {
            Placement::Before
        } else {
            Placement::After
        })
    }
}
