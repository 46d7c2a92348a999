use crate::config::SectionConfig;
use crate::label::format_display_name;
use crate::model::{Category, ScenarioEntry};
use crate::scanner::read_json;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, error, warn};

#[derive(Debug, Deserialize)]
struct IndexEntry {
    id: String,
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<IndexEntry> for ScenarioEntry {
    fn from(entry: IndexEntry) -> Self {
        ScenarioEntry {
            display_name: format_display_name(&entry.id),
            file: entry
                .file
                .unwrap_or_else(|| format!("{}.json", entry.id)),
            name: entry.id,
            source: entry.source,
            target: entry.target,
            description: entry.description,
        }
    }
}

/// One category per configured section of the index file at `index_path`.
/// A missing or malformed index yields no categories; a configured section
/// absent from a readable index yields an empty category.
pub fn discover_index(index_path: &Path, sections: &[SectionConfig]) -> Vec<Category> {
    if !index_path.is_file() {
        warn!("Index {} not found, skipping", index_path.display());
        return Vec::new();
    }

    let index: Map<String, Value> = match read_json(index_path) {
        Ok(index) => index,
        Err(err) => {
            error!("Error reading index {}: {}", index_path.display(), err);
            return Vec::new();
        }
    };

    sections
        .iter()
        .map(|section| {
            let mut scenarios = match index.get(&section.section) {
                Some(value) => section_entries(&section.section, value),
                None => {
                    debug!("Section '{}' absent from index", section.section);
                    Vec::new()
                }
            };
            scenarios.sort_by(|a, b| a.file.cmp(&b.file));

            Category {
                key: section.key.clone(),
                label: section.label.clone().unwrap_or_else(|| section.key.clone()),
                description: section.description.clone(),
                scenarios,
            }
        })
        .collect()
}

fn section_entries(section: &str, value: &Value) -> Vec<ScenarioEntry> {
    let Some(items) = value.as_array() else {
        warn!("Section '{}' is not a list, skipping", section);
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(
            |(position, item)| match IndexEntry::deserialize(item) {
                Ok(entry) => Some(ScenarioEntry::from(entry)),
                Err(err) => {
                    warn!(
                        "Skipping entry {} of section '{}': {}",
                        position, section, err
                    );
                    None
                }
            },
        )
        .collect()
}
