//! Output formatting and progress indicators

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Write a report to the given file, or to stdout when no file is given
pub fn write_report(content: &str, file: Option<&Path>) -> Result<()> {
    match file {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output to '{}'", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
