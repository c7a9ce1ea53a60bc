//! Annotated workbook output via rust_xlsxwriter

use crate::diff::AnnotatedTable;
use crate::error::Result;
use crate::table::CellValue;
use crate::OUTPUT_SHEET_NAME;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::io::Write;
use std::path::Path;

/// Solid fill applied to marked cells (the original tool's FFFF0000)
pub const HIGHLIGHT_COLOR: Color = Color::Red;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Persist an annotated table as a single-sheet `.xlsx` workbook.
///
/// Row 0 carries the header, data rows carry the base table's values
/// verbatim, and every marked cell gets a solid highlight fill. The
/// workbook is serialized fully in memory and then moved into place via
/// a temporary file, so a failed write never leaves a truncated file at
/// the destination.
pub fn write_output(annotated: &AnnotatedTable, dest: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let highlight = Format::new().set_background_color(HIGHLIGHT_COLOR);
    let datetime = Format::new().set_num_format(DATETIME_FORMAT);
    let datetime_highlight = Format::new()
        .set_num_format(DATETIME_FORMAT)
        .set_background_color(HIGHLIGHT_COLOR);

    for (col, name) in annotated.table.header().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row, cells) in annotated.table.rows().iter().enumerate() {
        // Worksheet row 0 is the header
        let sheet_row = row as u32 + 1;
        for (col, value) in cells.iter().enumerate() {
            let sheet_col = col as u16;
            let marked = annotated.is_marked(row, col);

            match value {
                // Blank base cells are never marked, nothing to write
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    if marked {
                        worksheet.write_number_with_format(sheet_row, sheet_col, *n, &highlight)?;
                    } else {
                        worksheet.write_number(sheet_row, sheet_col, *n)?;
                    }
                }
                CellValue::Text(s) => {
                    if marked {
                        worksheet.write_string_with_format(sheet_row, sheet_col, s, &highlight)?;
                    } else {
                        worksheet.write_string(sheet_row, sheet_col, s)?;
                    }
                }
                CellValue::Bool(b) => {
                    if marked {
                        worksheet.write_boolean_with_format(sheet_row, sheet_col, *b, &highlight)?;
                    } else {
                        worksheet.write_boolean(sheet_row, sheet_col, *b)?;
                    }
                }
                CellValue::DateTime(dt) => {
                    let format = if marked { &datetime_highlight } else { &datetime };
                    worksheet.write_datetime_with_format(sheet_row, sheet_col, dt, format)?;
                }
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    persist_atomically(&buffer, dest)?;

    log::info!(
        "Wrote annotated workbook to '{}' ({} marked cells)",
        dest.display(),
        annotated.marks.len()
    );

    Ok(())
}

/// Write the serialized workbook next to the destination and rename it
/// into place
fn persist_atomically(buffer: &[u8], dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(buffer)?;
    temp.flush()?;
    temp.persist(dest).map_err(|e| e.error)?;

    Ok(())
}
