//! # sheetdiff
//!
//! A cell-by-cell spreadsheet comparison tool. Loads two `.xlsx` files,
//! compares them positionally, and writes an annotated copy of the first
//! file with every differing cell highlighted.

pub mod cli;
pub mod error;
pub mod table;
pub mod loader;
pub mod diff;
pub mod writer;
pub mod pipeline;
pub mod output;
pub mod progress;

pub use error::{Result, SheetdiffError};
pub use pipeline::{ComparisonReport, FileSelection};
pub use table::{CellValue, Table};

/// Sheet name used in the annotated output workbook
pub const OUTPUT_SHEET_NAME: &str = "Comparison";
