use crate::cleanup::{self, CleanupReport};
use crate::config::{AppConfig, SourceConfig};
use crate::emit::{self, EmitReport};
use crate::error::Error;
use crate::inventory::{DropdownView, InventoryView, Summary};
use crate::model::Category;
use crate::progress::ProgressReporter;
use crate::scanner;
use chrono::{Local, NaiveDateTime, Timelike};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct InventoryEngine {
    config: AppConfig,
}

/// Scanned categories of one source and the two views derived from them.
#[derive(Debug)]
pub struct SourceInventory {
    pub name: String,
    pub categories: Vec<Category>,
    pub dropdown: DropdownView,
    pub inventory: InventoryView,
}

#[derive(Debug)]
pub struct RunResult {
    pub sources: Vec<SourceInventory>,
    pub summary: Summary,
    pub cleanup: CleanupReport,
    pub emit: EmitReport,
    pub duration: Duration,
}

impl InventoryEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn with_output_dir(mut self, dir: &str) -> Self {
        self.config.output_dir = dir.to_string();
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Scan and aggregate every configured source without writing anything.
    pub fn collect(&self, reporter: &dyn ProgressReporter) -> Vec<SourceInventory> {
        self.config
            .sources
            .iter()
            .map(|source| self.collect_source(source, reporter))
            .collect()
    }

    fn collect_source(&self, source: &SourceConfig, reporter: &dyn ProgressReporter) -> SourceInventory {
        info!("Generating {} data...", source.name);
        reporter.on_source_start(&source.name);
        let start = Instant::now();

        let categories = scanner::discover(source, &self.config.metadata_file);
        for category in &categories {
            reporter.on_category(&source.name, &category.key, category.scenario_count());
        }

        let dropdown = DropdownView::build(&source.types_field, &categories);
        let inventory = InventoryView::build(&source.inventory_key, &source.description, &categories);
        debug!(
            "{}: {} types, {} scenarios",
            source.name, dropdown.total_types, dropdown.total_scenarios
        );
        reporter.on_source_complete(
            &source.name,
            dropdown.total_types,
            dropdown.total_scenarios,
            start.elapsed().as_secs_f64(),
        );

        SourceInventory {
            name: source.name.clone(),
            categories,
            dropdown,
            inventory,
        }
    }

    /// Remove the configured stale outputs only.
    pub fn clean(&self, reporter: &dyn ProgressReporter) -> CleanupReport {
        let report = cleanup::remove_stale_outputs(
            Path::new(&self.config.output_dir),
            &self.config.stale_outputs,
        );
        reporter.on_cleanup_complete(report.removed.len(), report.failed);
        report
    }

    /// Run the whole pipeline:
    /// 1. Validate the configuration and create the output directory (the only fatal steps)
    /// 2. Remove stale outputs
    /// 3. Scan each source and write its dropdown and inventory files
    /// 4. Write the combined summary
    pub fn run(&self, reporter: &dyn ProgressReporter) -> Result<RunResult, Error> {
        let start = Instant::now();
        self.config.validate()?;
        let output_dir = Path::new(&self.config.output_dir);
        emit::ensure_output_dir(output_dir)?;

        let cleanup = self.clean(reporter);

        let mut report = EmitReport::default();
        let sources = self.collect(reporter);
        for (source, collected) in self.config.sources.iter().zip(&sources) {
            report.write(output_dir.join(&source.dropdown_file), &collected.dropdown);
            report.write(output_dir.join(&source.inventory_file), &collected.inventory);
        }

        info!("Generating summary...");
        let summary = Summary::build(
            generated_at(),
            sources
                .iter()
                .map(|collected| (collected.name.as_str(), &collected.inventory)),
        );
        report.write(output_dir.join(&self.config.summary_file), &summary);
        reporter.on_emit_complete(report.written.len(), report.failed.len());

        Ok(RunResult {
            sources,
            summary,
            cleanup,
            emit: report,
            duration: start.elapsed(),
        })
    }
}

/// Local time without an offset, e.g. `2026-10-17T09:30:00.123456`.
fn generated_at() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Microseconds are printed only when non-zero, so a whole second renders as
/// `2026-10-17T09:30:00`.
fn format_timestamp(time: NaiveDateTime) -> String {
    let seconds = time.format("%Y-%m-%dT%H:%M:%S").to_string();
    match time.nanosecond() / 1_000 {
        0 => seconds,
        micros => format!("{}.{:06}", seconds, micros),
    }
}
