//! Output formatting utilities

use crate::error::Result;
use crate::pipeline::ComparisonReport;

/// Pretty printer for sheetdiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print a comparison report
    pub fn print_comparison_report(report: &ComparisonReport) {
        println!("🔍 Comparison complete");
        println!("├─ Rows compared: {}", report.rows);
        println!("├─ Columns compared: {}", report.columns);

        if report.marked_cells > 0 {
            println!("├─ ❌ Differing cells: {}", report.marked_cells);
        } else {
            println!("├─ ✅ No differences found");
        }

        println!("└─ Output: {}", report.output_path.display());
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}
