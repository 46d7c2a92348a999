use indicatif::{ProgressBar, ProgressStyle};
use scenario_inventory::ProgressReporter;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress reporter: one spinner per source while its categories are scanned.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(old) = guard.take() {
                old.finish_and_clear();
            }
            *guard = Some(pb);
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_cleanup_complete(&self, removed: usize, failed: usize) {
        if removed > 0 || failed > 0 {
            eprintln!(
                "  \x1b[32m✓\x1b[0m Cleanup complete: {} stale files removed, {} failures",
                removed, failed
            );
        }
    }

    fn on_source_start(&self, source: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(format!("Scanning {}...", source));
        pb.enable_steady_tick(Duration::from_millis(80));
        self.set_bar(pb);
    }

    fn on_category(&self, source: &str, key: &str, scenarios: usize) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.set_message(format!("Scanning {}... {} ({} scenarios)", source, key, scenarios));
            }
        }
    }

    fn on_source_complete(&self, source: &str, types: usize, scenarios: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m {}: {} types, {} scenarios in {:.2}s",
            source, types, scenarios, duration_secs
        );
    }

    fn on_emit_complete(&self, written: usize, failed: usize) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Output complete: {} files written, {} failed",
            written, failed
        );
    }
}
