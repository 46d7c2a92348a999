//! Output projections built from scanned categories.
//!
//! All views are plain values computed from `&[Category]`. Totals are folds over
//! per-category counts. JSON maps keep category order, which is sorted by key.

use crate::model::{Category, ScenarioEntry};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Serialize ordered `(key, value)` pairs as a JSON object.
fn ordered_map<S, T>(entries: &[(String, T)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

struct OrderedMap<'a, T>(&'a [(String, T)]);

impl<T: Serialize> Serialize for OrderedMap<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered_map(self.0, serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeOption {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl From<&ScenarioEntry> for DropdownOption {
    fn from(entry: &ScenarioEntry) -> Self {
        Self {
            value: entry.name.clone(),
            label: entry.display_name.clone(),
            source: entry.source.clone(),
            target: entry.target.clone(),
        }
    }
}

/// Compact view consumed directly by selection widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    /// JSON field holding `types`, e.g. `messageTypes`.
    pub types_field: String,
    pub types: Vec<TypeOption>,
    pub scenarios_by_type: Vec<(String, Vec<DropdownOption>)>,
    pub total_types: usize,
    pub total_scenarios: usize,
}

impl DropdownView {
    pub fn build(types_field: &str, categories: &[Category]) -> Self {
        Self {
            types_field: types_field.to_string(),
            types: categories
                .iter()
                .map(|category| TypeOption {
                    value: category.key.clone(),
                    label: category.label.clone(),
                    description: category.description.clone(),
                })
                .collect(),
            scenarios_by_type: categories
                .iter()
                .map(|category| {
                    let options: Vec<DropdownOption> =
                        category.scenarios.iter().map(DropdownOption::from).collect();
                    (category.key.clone(), options)
                })
                .collect(),
            total_types: categories.len(),
            total_scenarios: total_scenarios(categories),
        }
    }
}

impl Serialize for DropdownView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(&self.types_field, &self.types)?;
        map.serialize_entry("scenariosByType", &OrderedMap(&self.scenarios_by_type))?;
        map.serialize_entry("totalTypes", &self.total_types)?;
        map.serialize_entry("totalScenarios", &self.total_scenarios)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioRecord {
    pub file: String,
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&ScenarioEntry> for ScenarioRecord {
    fn from(entry: &ScenarioEntry) -> Self {
        Self {
            file: entry.file.clone(),
            name: entry.name.clone(),
            display_name: entry.display_name.clone(),
            source: entry.source.clone(),
            target: entry.target.clone(),
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInventory {
    pub description: String,
    pub scenario_count: usize,
    pub scenarios: Vec<ScenarioRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryBody {
    pub description: String,
    pub total_message_types: usize,
    pub total_scenarios: usize,
    #[serde(serialize_with = "ordered_map")]
    pub message_types: Vec<(String, CategoryInventory)>,
}

/// Full view, wrapped in a single top-level key such as `swift_mt_messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub inventory_key: String,
    pub body: InventoryBody,
}

impl InventoryView {
    pub fn build(inventory_key: &str, description: &str, categories: &[Category]) -> Self {
        let message_types: Vec<(String, CategoryInventory)> = categories
            .iter()
            .map(|category| {
                let inventory = CategoryInventory {
                    description: category.description.clone(),
                    scenario_count: category.scenario_count(),
                    scenarios: category.scenarios.iter().map(ScenarioRecord::from).collect(),
                };
                (category.key.clone(), inventory)
            })
            .collect();

        Self {
            inventory_key: inventory_key.to_string(),
            body: InventoryBody {
                description: description.to_string(),
                total_message_types: message_types.len(),
                total_scenarios: message_types
                    .iter()
                    .map(|(_, inventory)| inventory.scenario_count)
                    .sum(),
                message_types,
            },
        }
    }

    pub fn category_keys(&self) -> Vec<String> {
        self.body
            .message_types
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }
}

impl Serialize for InventoryView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.inventory_key, &self.body)?;
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceTotals {
    pub message_types: usize,
    pub scenarios: usize,
}

/// Cross-source totals; per-source totals sit beside the grand totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_message_types: usize,
    pub total_scenarios: usize,
    pub per_source: Vec<(String, SourceTotals)>,
}

impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.per_source.len()))?;
        map.serialize_entry("total_message_types", &self.total_message_types)?;
        map.serialize_entry("total_scenarios", &self.total_scenarios)?;
        for (name, totals) in &self.per_source {
            map.serialize_entry(name, totals)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub generated_at: String,
    pub statistics: Statistics,
    #[serde(serialize_with = "ordered_map")]
    pub message_types: Vec<(String, Vec<String>)>,
}

impl Summary {
    /// Fold already-built inventories; nothing is re-scanned.
    pub fn build<'a, I>(generated_at: String, inventories: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a InventoryView)>,
    {
        let mut per_source = Vec::new();
        let mut message_types = Vec::new();

        for (name, inventory) in inventories {
            per_source.push((
                name.to_string(),
                SourceTotals {
                    message_types: inventory.body.total_message_types,
                    scenarios: inventory.body.total_scenarios,
                },
            ));
            message_types.push((name.to_string(), inventory.category_keys()));
        }

        Self {
            generated_at,
            statistics: Statistics {
                total_message_types: per_source.iter().map(|(_, t)| t.message_types).sum(),
                total_scenarios: per_source.iter().map(|(_, t)| t.scenarios).sum(),
                per_source,
            },
            message_types,
        }
    }
}

fn total_scenarios(categories: &[Category]) -> usize {
    categories.iter().map(Category::scenario_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str) -> ScenarioEntry {
        ScenarioEntry::from_file(format!("{}.json", name))
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                key: "MT103".to_string(),
                label: "MT103".to_string(),
                description: "Customer transfer".to_string(),
                scenarios: vec![entry("mt103_basic"), entry("mt103_stp_payment")],
            },
            Category {
                key: "MT940".to_string(),
                label: "MT940".to_string(),
                description: String::new(),
                scenarios: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_dropdown_totals_and_shape() {
        let view = DropdownView::build("messageTypes", &categories());
        assert_eq!(view.total_types, 2);
        assert_eq!(view.total_scenarios, 2);

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(
            value,
            json!({
                "messageTypes": [
                    {"value": "MT103", "label": "MT103", "description": "Customer transfer"},
                    {"value": "MT940", "label": "MT940", "description": ""}
                ],
                "scenariosByType": {
                    "MT103": [
                        {"value": "mt103_basic", "label": "MT103 Basic"},
                        {"value": "mt103_stp_payment", "label": "MT103 STP Payment"}
                    ],
                    "MT940": []
                },
                "totalTypes": 2,
                "totalScenarios": 2
            })
        );
    }

    #[test]
    fn test_dropdown_uses_configured_types_field() {
        let view = DropdownView::build("transformationTypes", &[]);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["transformationTypes"], json!([]));
        assert!(value.get("messageTypes").is_none());
        assert_eq!(value["totalTypes"], 0);
        assert_eq!(value["totalScenarios"], 0);
    }

    #[test]
    fn test_dropdown_option_direction_fields() {
        let mut scenario = entry("mt103_to_pacs008");
        scenario.source = Some("MT103".to_string());
        scenario.target = Some("pacs.008".to_string());

        let value = serde_json::to_value(DropdownOption::from(&scenario)).unwrap();
        assert_eq!(
            value,
            json!({
                "value": "mt103_to_pacs008",
                "label": "MT103 To pacs008",
                "source": "MT103",
                "target": "pacs.008"
            })
        );
    }

    #[test]
    fn test_inventory_keeps_empty_category() {
        let view = InventoryView::build(
            "swift_mt_messages",
            "Swift MT Message Test Scenarios Inventory",
            &categories(),
        );
        let value = serde_json::to_value(&view).unwrap();
        let body = &value["swift_mt_messages"];

        assert_eq!(body["total_message_types"], 2);
        assert_eq!(body["total_scenarios"], 2);
        assert_eq!(body["message_types"]["MT940"]["scenario_count"], 0);
        assert_eq!(body["message_types"]["MT940"]["scenarios"], json!([]));
        assert_eq!(
            body["message_types"]["MT103"]["scenarios"][1],
            json!({
                "file": "mt103_stp_payment.json",
                "name": "mt103_stp_payment",
                "display_name": "MT103 STP Payment"
            })
        );
    }

    #[test]
    fn test_map_keys_keep_category_order() {
        let mut unsorted = categories();
        unsorted.reverse();
        let view = InventoryView::build("k", "", &unsorted);
        let text = serde_json::to_string(&view).unwrap();
        let mt940 = text.find("\"MT940\"").unwrap();
        let mt103 = text.find("\"MT103\"").unwrap();
        assert!(mt940 < mt103);
    }

    #[test]
    fn test_summary_folds_source_totals() {
        let mt = InventoryView::build("swift_mt_messages", "", &categories());
        let mx = InventoryView::build(
            "iso20022_mx_messages",
            "",
            &[Category {
                key: "camt.053".to_string(),
                label: "camt.053".to_string(),
                description: String::new(),
                scenarios: vec![entry("camt053_statement")],
            }],
        );

        let summary = Summary::build(
            "2026-01-01T00:00:00.250000".to_string(),
            [("swift_mt", &mt), ("iso20022_mx", &mx)],
        );
        assert_eq!(summary.statistics.total_message_types, 3);
        assert_eq!(summary.statistics.total_scenarios, 3);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "generated_at": "2026-01-01T00:00:00.250000",
                "statistics": {
                    "total_message_types": 3,
                    "total_scenarios": 3,
                    "swift_mt": {"message_types": 2, "scenarios": 2},
                    "iso20022_mx": {"message_types": 1, "scenarios": 1}
                },
                "message_types": {
                    "swift_mt": ["MT103", "MT940"],
                    "iso20022_mx": ["camt.053"]
                }
            })
        );
    }
}
