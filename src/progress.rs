/// Trait for reporting pipeline progress.
///
/// The CLI implements it with an indicatif spinner; tests use `SilentReporter`.
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_cleanup_complete(&self, _removed: usize, _failed: usize) {}
    fn on_source_start(&self, _source: &str) {}
    fn on_category(&self, _source: &str, _key: &str, _scenarios: usize) {}
    fn on_source_complete(&self, _source: &str, _types: usize, _scenarios: usize, _duration_secs: f64) {}
    fn on_emit_complete(&self, _written: usize, _failed: usize) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
