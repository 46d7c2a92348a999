pub mod index;
pub mod walk;

use crate::config::{Discovery, SourceConfig};
use crate::error::Error;
use crate::model::Category;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Discover the categories of one source, sorted by key with keys unique.
/// Missing or malformed input never fails the scan; it yields fewer categories.
pub fn discover(source: &SourceConfig, metadata_file: &str) -> Vec<Category> {
    let root = Path::new(&source.root);
    let categories = match &source.discovery {
        Discovery::Directory {
            key_style,
            prefixes,
        } => walk::discover_directories(root, prefixes, *key_style, metadata_file),
        Discovery::Index {
            index_file,
            sections,
        } => index::discover_index(&root.join(index_file), sections),
    };
    merge_duplicate_keys(categories)
}

/// Sort categories by key and fold any repeated key into its first occurrence.
fn merge_duplicate_keys(mut categories: Vec<Category>) -> Vec<Category> {
    categories.sort_by(|a, b| a.key.cmp(&b.key));
    categories.dedup_by(|later, kept| {
        if later.key != kept.key {
            return false;
        }
        warn!(
            "Category '{}' discovered more than once; merging {} scenarios",
            kept.key,
            later.scenario_count()
        );
        kept.scenarios.append(&mut later.scenarios);
        kept.scenarios.sort_by(|a, b| a.file.cmp(&b.file));
        true
    });
    categories
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
