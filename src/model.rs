use crate::label::format_display_name;

/// One scenario file within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioEntry {
    /// Identifier, e.g. `mt103_stp_payment`.
    pub name: String,
    pub file: String,
    pub display_name: String,
    pub source: Option<String>,
    pub target: Option<String>,
    pub description: Option<String>,
}

impl ScenarioEntry {
    /// Entry for a scenario file found on disk; the identifier is the
    /// filename without its `.json` suffix.
    pub fn from_file(file: String) -> Self {
        let name = file.strip_suffix(".json").unwrap_or(&file).to_string();
        Self {
            display_name: format_display_name(&name),
            name,
            file,
            source: None,
            target: None,
            description: None,
        }
    }
}

/// A grouping of scenarios: a message type or a transformation direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub label: String,
    pub description: String,
    pub scenarios: Vec<ScenarioEntry>,
}

impl Category {
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }
}
