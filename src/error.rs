//! Error types for sheetdiff operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetdiffError>;

#[derive(Error, Debug)]
pub enum SheetdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a valid spreadsheet '{path}': {message}")]
    FileFormat { path: PathBuf, message: String },

    #[error("No {side} file selected")]
    InputMissing { side: String },

    #[error("Failed to write output workbook: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output selection cancelled by user")]
    Cancelled,

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl SheetdiffError {
    pub fn file_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn input_missing(side: impl Into<String>) -> Self {
        Self::InputMissing { side: side.into() }
    }
}
