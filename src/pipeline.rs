//! Top-level comparison pipeline: load -> annotate -> write

use crate::diff;
use crate::error::{Result, SheetdiffError};
use crate::loader;
use crate::progress::ProgressReporter;
use crate::writer;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The two input files the user has picked so far.
///
/// Owned by the presentation layer (CLI or GUI) and passed by reference
/// into [`run_comparison`]; the set/clear helpers mirror a shell's
/// select and clear actions.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    pub base: Option<PathBuf>,
    pub reference: Option<PathBuf>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for shells that already hold both paths
    pub fn with_paths(base: impl Into<PathBuf>, reference: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
            reference: Some(reference.into()),
        }
    }

    pub fn set_base(&mut self, path: impl Into<PathBuf>) {
        self.base = Some(path.into());
    }

    pub fn set_reference(&mut self, path: impl Into<PathBuf>) {
        self.reference = Some(path.into());
    }

    pub fn clear_base(&mut self) {
        self.base = None;
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    pub fn is_complete(&self) -> bool {
        self.base.is_some() && self.reference.is_some()
    }
}

/// Summary of a completed comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub marked_cells: usize,
}

/// Run the full comparison pipeline synchronously.
///
/// Validates that both inputs are selected before touching the
/// filesystem, loads the two tables, annotates the base against the
/// reference, and writes the highlighted output to `dest`. Errors from
/// the loader and writer propagate unmodified; there are no retries and
/// no partial output.
pub fn run_comparison(
    selection: &FileSelection,
    dest: &Path,
    progress: &mut ProgressReporter,
) -> Result<ComparisonReport> {
    let base_path = selection
        .base
        .as_deref()
        .ok_or_else(|| SheetdiffError::input_missing("first"))?;
    let reference_path = selection
        .reference
        .as_deref()
        .ok_or_else(|| SheetdiffError::input_missing("second"))?;

    log::info!(
        "Comparing '{}' against '{}'",
        base_path.display(),
        reference_path.display()
    );

    // The two loads are causally independent
    let (base, reference) = rayon::join(
        || loader::load_table(base_path),
        || loader::load_table(reference_path),
    );
    let (base, reference) = (base?, reference?);
    progress.finish_load(&format!(
        "Loaded {} + {} rows",
        base.row_count(),
        reference.row_count()
    ));

    let annotated = diff::annotate(&base, &reference);
    progress.finish_compare(&format!("{} differing cells", annotated.marks.len()));

    writer::write_output(&annotated, dest)?;
    progress.finish_write(&format!("Saved to {}", dest.display()));

    Ok(ComparisonReport {
        output_path: dest.to_path_buf(),
        rows: annotated.table.row_count(),
        columns: annotated.table.column_count(),
        marked_cells: annotated.marks.len(),
    })
}
