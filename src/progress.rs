//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the load -> compare -> write pipeline
#[derive(Debug)]
pub struct ProgressReporter {
    load_pb: Option<ProgressBar>,
    compare_pb: Option<ProgressBar>,
    write_pb: Option<ProgressBar>,
    show_progress: bool,
}

impl ProgressReporter {
    /// Create a progress reporter for an interactive comparison run
    pub fn new_for_comparison() -> Self {
        Self {
            load_pb: Some(create_spinner("Loading spreadsheets...")),
            compare_pb: None,
            write_pb: None,
            show_progress: true,
        }
    }

    /// Create a silent reporter (no progress bars)
    pub fn new_minimal() -> Self {
        Self {
            load_pb: None,
            compare_pb: None,
            write_pb: None,
            show_progress: false,
        }
    }

    fn ensure_compare_pb(&mut self) {
        if self.show_progress && self.compare_pb.is_none() {
            self.compare_pb = Some(create_spinner("Comparing cells..."));
        }
    }

    fn ensure_write_pb(&mut self) {
        if self.show_progress && self.write_pb.is_none() {
            self.write_pb = Some(create_spinner("Writing annotated output..."));
        }
    }

    /// Finish the loading phase and start the comparison spinner
    pub fn finish_load(&mut self, message: &str) {
        if let Some(pb) = self.load_pb.take() {
            pb.finish_with_message(message.to_string());
        }
        self.ensure_compare_pb();
    }

    /// Finish the comparison phase and start the write spinner
    pub fn finish_compare(&mut self, message: &str) {
        self.ensure_compare_pb();
        if let Some(pb) = self.compare_pb.take() {
            pb.finish_with_message(message.to_string());
        }
        self.ensure_write_pb();
    }

    /// Finish the write phase
    pub fn finish_write(&mut self, message: &str) {
        self.ensure_write_pb();
        if let Some(pb) = self.write_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // Clean up any bars left running after an error
        if let Some(pb) = self.load_pb.take() {
            pb.finish_and_clear();
        }
        if let Some(pb) = self.compare_pb.take() {
            pb.finish_and_clear();
        }
        if let Some(pb) = self.write_pb.take() {
            pb.finish_and_clear();
        }
    }
}

/// Create a spinner progress bar
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
