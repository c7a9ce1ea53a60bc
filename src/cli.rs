//! Command-line interface for sheetdiff

use clap::Parser;
use std::path::PathBuf;

/// The CLI is the thin presentation layer over the comparison pipeline:
/// it supplies the two input paths and the output path, then renders the
/// resulting report or error.
#[derive(Parser)]
#[command(name = "sheetdiff")]
#[command(about = "Compare two spreadsheets cell by cell and highlight the differences")]
#[command(version)]
pub struct Cli {
    /// Base spreadsheet (its values and shape define the output)
    pub base: PathBuf,

    /// Reference spreadsheet to compare against
    pub reference: PathBuf,

    /// Destination for the annotated output workbook
    #[arg(short, long)]
    pub output: PathBuf,

    /// Print the comparison report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
