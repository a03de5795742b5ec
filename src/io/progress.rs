//! Batch progress display for multi-sheet runs

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Sheets: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks converted sheets of one run
///
/// Single-sheet runs show nothing; larger batches get one progress bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare the display for `file_count` sheets
    pub fn initialize(&mut self, file_count: usize) {
        if file_count >= MIN_FILES_FOR_PROGRESS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show which sheet is being converted
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }
    }

    /// Count a finished sheet
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Whether a progress bar is displayed
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Close the progress display, summarizing `failed` sheets
    pub fn finish(&self, failed: usize) {
        if let Some(ref bar) = self.bar {
            if failed == 0 {
                bar.finish_with_message("all sheets converted");
            } else {
                bar.finish_with_message(format!("{failed} failed"));
            }
        }
    }
}
