//! Spreadsheet loading via calamine

use crate::error::{Result, SheetdiffError};
use crate::table::{CellValue, Table};
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::path::Path;

/// Load an `.xlsx` file into a [`Table`].
///
/// Only the first worksheet is read; any additional sheets are ignored.
/// The first row of the used range is taken as the header, the remaining
/// rows become data rows. An empty workbook yields an empty table.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| convert_xlsx_error(e, path))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(result) => result.map_err(|e| convert_xlsx_error(e, path))?,
        None => {
            return Err(SheetdiffError::file_format(path, "workbook has no sheets"));
        }
    };

    let mut rows_iter = range.rows();
    let header: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(header_label).collect(),
        None => return Ok(Table::empty()),
    };

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    let table = Table::new(header, rows);
    log::debug!(
        "Loaded '{}': {} rows x {} columns",
        path.display(),
        table.row_count(),
        table.column_count()
    );

    Ok(table)
}

/// Separate plain IO failures from format problems so callers can tell
/// "file unreadable" apart from "file is not an xlsx"
fn convert_xlsx_error(error: XlsxError, path: &Path) -> SheetdiffError {
    match error {
        XlsxError::Io(e) => SheetdiffError::Io(e),
        other => SheetdiffError::file_format(path, other.to_string()),
    }
}

/// Convert a calamine cell into our typed value
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::DateTime(naive),
            // Serial numbers outside chrono's range stay numeric
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

/// Render a header cell as its column name
fn header_label(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => naive.to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
