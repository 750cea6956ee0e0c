//! Progress bar management

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_UPDATE_INTERVAL;

static GROWTH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cells")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Displays growth progress over the cell count
///
/// Position updates are batched so the terminal is not redrawn on every
/// single commit.
pub struct ProgressManager {
    bar: ProgressBar,
    last_drawn: usize,
}

impl ProgressManager {
    /// Create a progress bar spanning the total cell count
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(GROWTH_STYLE.clone());
        Self { bar, last_drawn: 0 }
    }

    /// Record the current number of committed cells
    pub fn update(&mut self, committed: usize) {
        if committed.saturating_sub(self.last_drawn) >= PROGRESS_UPDATE_INTERVAL {
            self.bar.set_position(committed as u64);
            self.last_drawn = committed;
        }
    }

    /// Complete the bar
    pub fn finish(&self) {
        self.bar.set_position(self.bar.length().unwrap_or(0));
        self.bar.finish();
    }
}
