//! In-memory table model for loaded spreadsheets

use chrono::NaiveDateTime;

/// A single typed cell value.
///
/// `Empty` stands for an absent cell (blank in the source file). Integer
/// and float cells both collapse to `Number` so that `1` and `1.0`
/// compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Whether this cell holds a value at all
    pub fn is_present(&self) -> bool {
        !matches!(self, CellValue::Empty)
    }
}

/// A rectangular table: one header row plus zero or more data rows.
///
/// Invariant: every data row has exactly `header.len()` cells. The
/// constructor normalizes ragged input by padding with `Empty` or
/// truncating, so accessors never have to re-check row widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(header: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = header.len();
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { header, rows }
    }

    /// An empty table (no columns, no rows)
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Bounds-checked access to a data cell. Returns `None` outside the
    /// table's extent; an in-bounds blank cell returns `Some(&Empty)`.
    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_ragged_rows_are_normalized() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                vec![text("x")],
                vec![text("y"), text("z"), text("w"), text("extra")],
            ],
        );

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.value(0, 1), Some(&CellValue::Empty));
        assert_eq!(table.value(0, 2), Some(&CellValue::Empty));
        assert_eq!(table.value(1, 2), Some(&text("w")));
        assert_eq!(table.value(1, 3), None);
    }

    #[test]
    fn test_value_out_of_bounds() {
        let table = Table::new(vec!["a".to_string()], vec![vec![text("x")]]);
        assert_eq!(table.value(0, 0), Some(&text("x")));
        assert_eq!(table.value(1, 0), None);
        assert_eq!(table.value(0, 1), None);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.value(0, 0), None);
    }

    #[test]
    fn test_native_equality() {
        assert_eq!(CellValue::Number(1.0), CellValue::Number(1.0));
        assert_ne!(CellValue::Number(1.0), CellValue::Number(2.0));
        assert_ne!(CellValue::Number(1.0), CellValue::Text("1".to_string()));
        assert_ne!(text("abc"), text("ABC"));
        assert_ne!(text("abc"), text("abc "));
        assert!(!CellValue::Empty.is_present());
        assert!(CellValue::Bool(false).is_present());
    }
}
