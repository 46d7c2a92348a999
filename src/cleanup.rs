use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, warn};

#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub failed: usize,
}

/// Remove previously generated files matching `patterns` (filenames or globs
/// relative to `output_dir`). Each failure is logged and counted; the
/// remaining patterns are still processed. Absent files are not an error.
/// Nothing outside `output_dir` is ever removed.
pub fn remove_stale_outputs(output_dir: &Path, patterns: &[String]) -> CleanupReport {
    let mut report = CleanupReport::default();
    let escaped_dir = Pattern::escape(&output_dir.to_string_lossy());

    for pattern in patterns {
        if !is_contained(pattern) {
            error!(
                "Stale output pattern '{}' must stay inside {}",
                pattern,
                output_dir.display()
            );
            report.failed += 1;
            continue;
        }

        let full_pattern = Path::new(&escaped_dir).join(pattern);
        let paths = match glob::glob(&full_pattern.to_string_lossy()) {
            Ok(paths) => paths,
            Err(err) => {
                error!("Invalid stale output pattern '{}': {}", pattern, err);
                report.failed += 1;
                continue;
            }
        };

        for path_result in paths {
            let path = match path_result {
                Ok(path) => path,
                Err(err) => {
                    error!("Error matching {}: {}", err.path().display(), err.error());
                    report.failed += 1;
                    continue;
                }
            };

            if !path.starts_with(output_dir) {
                warn!("Skipping {} outside {}", path.display(), output_dir.display());
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("Removed stale output {}", path.display());
                    report.removed.push(path);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    debug!("Stale output {} already gone", path.display());
                }
                Err(err) => {
                    error!("Error removing {}: {}", path.display(), err);
                    report.failed += 1;
                }
            }
        }
    }

    report
}

/// A pattern is contained when it is relative and never climbs with `..`.
fn is_contained(pattern: &str) -> bool {
    Path::new(pattern)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
