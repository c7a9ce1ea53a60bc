//! Positional cell-by-cell comparison of two tables

use crate::table::Table;
use std::collections::BTreeSet;

/// Coordinate of a data cell: (row index, column index), 0-indexed,
/// header row excluded
pub type CellCoord = (usize, usize);

/// A copy of the base table plus the set of coordinates whose values
/// differ from the reference table
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTable {
    pub table: Table,
    pub marks: BTreeSet<CellCoord>,
}

impl AnnotatedTable {
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks.contains(&(row, col))
    }
}

/// Compare `base` against `reference` position by position and return a
/// copy of `base` with differing cells marked.
///
/// The output shape always matches the base table: cells beyond the
/// reference's extent have no comparison partner and are never marked.
/// A cell is marked only when BOTH sides hold a present value and the
/// values compare unequal under native typing. In particular a blank
/// cell in the base is never marked, even when the reference holds a
/// value at that coordinate.
pub fn annotate(base: &Table, reference: &Table) -> AnnotatedTable {
    let mut marks = BTreeSet::new();

    for row in 0..base.row_count() {
        for col in 0..base.column_count() {
            let value_a = match base.value(row, col) {
                Some(v) => v,
                None => continue,
            };
            let value_b = match reference.value(row, col) {
                Some(v) => v,
                None => continue,
            };

            if value_a.is_present() && value_b.is_present() && value_a != value_b {
                marks.insert((row, col));
            }
        }
    }

    log::debug!(
        "Compared {} x {} cells, {} differ",
        base.row_count(),
        base.column_count(),
        marks.len()
    );

    AnnotatedTable {
        table: base.clone(),
        marks,
    }
}
