use crate::config::KeyStyle;
use crate::model::{Category, ScenarioEntry};
use crate::scanner::read_json;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct CategoryMetadata {
    #[serde(default)]
    description: Option<String>,
}

/// One category per immediate subdirectory of `root` whose name starts with
/// one of `prefixes`. A missing root yields no categories.
pub fn discover_directories(
    root: &Path,
    prefixes: &[String],
    key_style: KeyStyle,
    metadata_file: &str,
) -> Vec<Category> {
    if !root.is_dir() {
        warn!("Scenario root {} not found, skipping", root.display());
        return Vec::new();
    }

    let mut categories = Vec::new();

    for entry_result in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                error!("Error reading entry in {}: {}", root.display(), err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy();
        let Some(prefix) = prefixes
            .iter()
            .find(|prefix| dir_name.starts_with(prefix.as_str()))
        else {
            continue;
        };

        let key = key_style.category_key(&dir_name, prefix);
        let scenarios: Vec<ScenarioEntry> = scenario_files(path, metadata_file)
            .into_iter()
            .map(ScenarioEntry::from_file)
            .collect();
        debug!("{} -> {} ({} scenarios)", dir_name, key, scenarios.len());

        categories.push(Category {
            label: key.clone(),
            key,
            description: read_description(&path.join(metadata_file)),
            scenarios,
        });
    }

    categories
}

/// Sorted `.json` filenames directly inside `dir`, excluding `metadata_file`.
fn scenario_files(dir: &Path, metadata_file: &str) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => Some(entry),
            Err(err) => {
                error!("Error reading entry in {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| match entry.file_name().to_str() {
            Some(name) => Some(name.to_owned()),
            None => {
                warn!("Skipping non UTF-8 filename {}", entry.path().display());
                None
            }
        })
        .filter(|name| name.ends_with(".json") && name != metadata_file)
        .collect();
    files.sort();
    files
}

fn read_description(path: &Path) -> String {
    if !path.exists() {
        return String::new();
    }

    match read_json::<CategoryMetadata>(path) {
        Ok(metadata) => metadata.description.unwrap_or_default(),
        Err(err) => {
            warn!("Ignoring unreadable metadata {}: {}", path.display(), err);
            String::new()
        }
    }
}
