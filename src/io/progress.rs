//! Batch progress display with a per-outcome tally
//!
//! The bar and the log share stderr. Log lines go through [`BarAwareStderr`],
//! which clears the bar for the duration of each write and redraws it after.

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::emitter::{ItemOutcome, ItemReport};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Items: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Stderr handle that suspends a progress bar while writing
#[derive(Clone)]
pub struct BarAwareStderr {
    bar: ProgressBar,
}

impl Write for BarAwareStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bar.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.bar.suspend(|| io::stderr().flush())
    }
}

/// Single progress bar advanced once per catalog item
pub struct ProgressManager {
    bar: ProgressBar,
    written: usize,
    skipped: usize,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`ProgressManager::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            written: 0,
            skipped: 0,
            failed: 0,
        }
    }

    /// Show a bar sized for the catalog
    ///
    /// The bar is reused, so writers from [`ProgressManager::log_writer`]
    /// obtained earlier keep suspending it.
    pub fn initialize(&mut self, item_count: usize) {
        self.bar.set_style(BATCH_STYLE.clone());
        self.bar.set_length(item_count as u64);
        self.bar.reset();
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
        self.written = 0;
        self.skipped = 0;
        self.failed = 0;
    }

    /// Stderr writer for log output that does not tear the bar
    pub fn log_writer(&self) -> BarAwareStderr {
        BarAwareStderr {
            bar: self.bar.clone(),
        }
    }

    /// Record one finished item
    pub fn record(&mut self, report: &ItemReport) {
        match report.outcome {
            ItemOutcome::Written { .. } => self.written += 1,
            ItemOutcome::Skipped { .. } => self.skipped += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
        self.bar.set_message(report.filename.clone());
        self.bar.inc(1);
    }

    /// Tally as `(written, skipped, failed)`
    pub const fn tally(&self) -> (usize, usize, usize) {
        (self.written, self.skipped, self.failed)
    }

    /// Replace the bar with a summary line
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} written, {} skipped, {} failed",
            self.written, self.skipped, self.failed
        ));
    }
}
