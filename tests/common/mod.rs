//! Common test utilities and helpers

use rust_xlsxwriter::{Format, Workbook};
use sheetdiff::{CellValue, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture managing a temporary directory of spreadsheet files
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        Ok(Self { temp_dir })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create an `.xlsx` file with the given header and data rows
    pub fn create_xlsx(
        &self,
        name: &str,
        header: &[&str],
        rows: &[Vec<CellValue>],
    ) -> Result<PathBuf> {
        let path = self.root().join(name);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        // Datetimes need a number format or they read back as plain serials
        let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

        for (col, label) in header.iter().enumerate() {
            worksheet.write_string(0, col as u16, *label)?;
        }
        for (row, cells) in rows.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                let r = row as u32 + 1;
                let c = col as u16;
                match value {
                    CellValue::Empty => {}
                    CellValue::Number(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string(r, c, s)?;
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(r, c, *b)?;
                    }
                    CellValue::DateTime(dt) => {
                        worksheet.write_datetime_with_format(r, c, dt, &datetime_format)?;
                    }
                }
            }
        }

        workbook.save(&path)?;
        Ok(path)
    }
}

/// Sample data builders shared across tests
pub mod sample_data {
    use sheetdiff::CellValue;

    pub fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    pub fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    /// The 3x2 table from the comparison scenarios:
    /// [["x",1],["y",2],["z",3]] under header ["Name","Val"]
    pub fn base_rows() -> Vec<Vec<CellValue>> {
        vec![
            vec![text("x"), num(1.0)],
            vec![text("y"), num(2.0)],
            vec![text("z"), num(3.0)],
        ]
    }

    pub fn header() -> Vec<&'static str> {
        vec!["Name", "Val"]
    }
}
