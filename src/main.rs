//! Main entry point for the sheetdiff CLI

use clap::Parser;
use sheetdiff::cli::Cli;
use sheetdiff::output::{JsonFormatter, PrettyPrinter};
use sheetdiff::pipeline::{run_comparison, FileSelection};
use sheetdiff::progress::ProgressReporter;
use sheetdiff::SheetdiffError;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging, honoring --verbose
    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level())
        .init();

    let selection = FileSelection::with_paths(&cli.base, &cli.reference);
    let mut progress = if cli.quiet || cli.json {
        ProgressReporter::new_minimal()
    } else {
        ProgressReporter::new_for_comparison()
    };

    match run_comparison(&selection, &cli.output, &mut progress) {
        Ok(report) => {
            if cli.json {
                match JsonFormatter::format(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                PrettyPrinter::print_comparison_report(&report);
            }
        }
        // An aborted destination prompt is a no-op, not a failure
        Err(SheetdiffError::Cancelled) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
