use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Top-level settings. Every field has a default, so an empty or partial
/// `Inventory.toml` still yields a runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: String,
    pub summary_file: String,
    /// Reserved filename inside category directories; never counted as a scenario.
    pub metadata_file: String,
    /// Filenames or glob patterns, relative to `output_dir`, removed before emission.
    pub stale_outputs: Vec<String>,
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Key used for this source in the summary file.
    pub name: String,
    pub root: String,
    pub dropdown_file: String,
    pub inventory_file: String,
    pub inventory_key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_types_field")]
    pub types_field: String,
    pub discovery: Discovery,
}

/// How a source finds its categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discovery {
    /// One category per subdirectory of `root` whose name starts with a prefix.
    Directory {
        #[serde(default)]
        key_style: KeyStyle,
        prefixes: Vec<String>,
    },
    /// Categories are named sections of a single index file under `root`.
    Index {
        #[serde(default = "default_index_file")]
        index_file: String,
        sections: Vec<SectionConfig>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionConfig {
    pub section: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    /// `mt103` -> `MT103`
    #[default]
    Upper,
    /// `camt025` -> `camt.025`
    Dotted,
    Verbatim,
}

impl KeyStyle {
    pub fn category_key(self, dir_name: &str, prefix: &str) -> String {
        match self {
            KeyStyle::Upper => dir_name.to_uppercase(),
            KeyStyle::Dotted => match dir_name.strip_prefix(prefix) {
                Some(rest) => format!("{}.{}", prefix, rest),
                None => dir_name.to_string(),
            },
            KeyStyle::Verbatim => dir_name.to_string(),
        }
    }
}

fn default_types_field() -> String {
    "messageTypes".to_string()
}

fn default_index_file() -> String {
    "index.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: "website/static/data".to_string(),
            summary_file: "message_summary.json".to_string(),
            metadata_file: "index.json".to_string(),
            stale_outputs: Vec::new(),
            sources: vec![
                SourceConfig {
                    name: "swift_mt".to_string(),
                    root: "test_scenarios/swift_mt".to_string(),
                    dropdown_file: "swift_mt_dropdown.json".to_string(),
                    inventory_file: "swift_mt_inventory.json".to_string(),
                    inventory_key: "swift_mt_messages".to_string(),
                    description: "Swift MT Message Test Scenarios Inventory".to_string(),
                    types_field: default_types_field(),
                    discovery: Discovery::Directory {
                        key_style: KeyStyle::Upper,
                        prefixes: vec!["mt".to_string()],
                    },
                },
                SourceConfig {
                    name: "iso20022_mx".to_string(),
                    root: "test_scenarios/iso20022_mx".to_string(),
                    dropdown_file: "mx_dropdown.json".to_string(),
                    inventory_file: "mx_inventory.json".to_string(),
                    inventory_key: "iso20022_mx_messages".to_string(),
                    description: "ISO 20022 MX Message Test Scenarios Inventory".to_string(),
                    types_field: default_types_field(),
                    discovery: Discovery::Directory {
                        key_style: KeyStyle::Dotted,
                        prefixes: vec!["camt".to_string(), "pacs".to_string(), "pain".to_string()],
                    },
                },
                SourceConfig {
                    name: "reframe".to_string(),
                    root: "test_scenarios/reframe".to_string(),
                    dropdown_file: "reframe_dropdown.json".to_string(),
                    inventory_file: "reframe_inventory.json".to_string(),
                    inventory_key: "reframe_transformations".to_string(),
                    description: "Reframe Transformation Scenarios Inventory".to_string(),
                    types_field: "transformationTypes".to_string(),
                    discovery: Discovery::Index {
                        index_file: default_index_file(),
                        sections: vec![
                            SectionConfig {
                                section: "outgoing".to_string(),
                                key: "forward".to_string(),
                                label: Some("MT to ISO 20022".to_string()),
                                description: "Swift MT messages transformed to ISO 20022"
                                    .to_string(),
                            },
                            SectionConfig {
                                section: "incoming".to_string(),
                                key: "reverse".to_string(),
                                label: Some("ISO 20022 to MT".to_string()),
                                description: "ISO 20022 messages transformed to Swift MT"
                                    .to_string(),
                            },
                        ],
                    },
                },
            ],
        }
    }
}

/// Layered load: built-in defaults, then `Inventory.toml` (or `path`), then
/// `INVENTORY__*` environment variables.
pub fn load_configuration(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file_source = match path {
        Some(path) => ConfigFile::from(path).required(true),
        None => ConfigFile::with_name("Inventory").required(false),
    };

    let builder = Config::builder()
        .add_source(file_source)
        .add_source(Environment::with_prefix("INVENTORY").separator("__"))
        .build()?;
    let config = builder.try_deserialize::<AppConfig>()?;
    config.validate()?;
    Ok(config)
}

/// Keys `Statistics` writes beside the per-source entries.
const RESERVED_SOURCE_NAMES: &[&str] = &["total_message_types", "total_scenarios"];

impl AppConfig {
    /// Source names key the summary maps and output files must not collide,
    /// otherwise one source silently overwrites another.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let mut files = HashSet::new();
        files.insert(self.summary_file.as_str());

        for source in &self.sources {
            if RESERVED_SOURCE_NAMES.contains(&source.name.as_str()) {
                return Err(ConfigError::Message(format!(
                    "source name '{}' is reserved",
                    source.name
                )));
            }
            if !names.insert(source.name.as_str()) {
                return Err(ConfigError::Message(format!(
                    "duplicate source name '{}'",
                    source.name
                )));
            }
            for file in [&source.dropdown_file, &source.inventory_file] {
                if !files.insert(file.as_str()) {
                    return Err(ConfigError::Message(format!(
                        "output file '{}' of source '{}' is already used",
                        file, source.name
                    )));
                }
            }
        }

        Ok(())
    }
}
