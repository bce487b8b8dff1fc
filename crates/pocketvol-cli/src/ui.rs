use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner shown while the pipeline (NanoShaper included) is running.
/// Ticks on its own thread, so the blocking run does not freeze it.
pub fn pipeline_spinner(structure_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Detecting and ranking pockets for {structure_name}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
