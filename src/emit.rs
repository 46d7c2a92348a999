use crate::error::Error;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Outcome of writing the output files. Each file is attempted independently.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl EmitReport {
    /// Serialize `value` to `path`, recording rather than propagating failure.
    pub fn write<T: Serialize>(&mut self, path: PathBuf, value: &T) {
        match write_json(&path, value) {
            Ok(()) => {
                debug!("Wrote {}", path.display());
                self.written.push(path);
            }
            Err(err) => {
                error!("Error writing {}: {}", path.display(), err);
                self.failed.push((path, err.to_string()));
            }
        }
    }
}

/// Create the output directory. Failure here is fatal since nothing can be written.
pub fn ensure_output_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Pretty-printed JSON with a two-space indent, fully overwriting `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}
