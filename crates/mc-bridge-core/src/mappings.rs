//! Java item id to Bedrock item mappings.
//!
//! Loaded from the embedded `item_mappings.json`, keyed by Java identifier.

use std::collections::HashMap;

use serde::Deserialize;

const ITEM_MAPPINGS_JSON: &str = include_str!("../data/item_mappings.json");

#[derive(Debug, Deserialize)]
struct RawItemMapping {
    java_id: i32,
    bedrock_identifier: String,
    bedrock_runtime_id: i32,
    #[serde(default)]
    bedrock_data: u16,
}

/// Mapping of a single Java item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMapping {
    pub java_id: i32,
    pub java_identifier: String,
    pub bedrock_identifier: String,
    pub bedrock_runtime_id: i32,
    pub bedrock_data: u16,
}

pub struct ItemMappings {
    by_java_id: HashMap<i32, ItemMapping>,
    by_identifier: HashMap<String, i32>,
}

impl Default for ItemMappings {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemMappings {
    /// Build the mappings from the embedded JSON table.
    pub fn new() -> Self {
        Self::from_json(ITEM_MAPPINGS_JSON).expect("invalid item_mappings.json")
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, RawItemMapping> = serde_json::from_str(json)?;

        let mut by_java_id = HashMap::with_capacity(raw.len());
        let mut by_identifier = HashMap::with_capacity(raw.len());

        for (identifier, entry) in raw {
            by_identifier.insert(identifier.clone(), entry.java_id);
            by_java_id.insert(
                entry.java_id,
                ItemMapping {
                    java_id: entry.java_id,
                    java_identifier: identifier,
                    bedrock_identifier: entry.bedrock_identifier,
                    bedrock_runtime_id: entry.bedrock_runtime_id,
                    bedrock_data: entry.bedrock_data,
                },
            );
        }

        Ok(Self {
            by_java_id,
            by_identifier,
        })
    }

    pub fn get(&self, java_id: i32) -> Option<&ItemMapping> {
        self.by_java_id.get(&java_id)
    }

    /// Java id for a namespaced identifier such as `minecraft:bucket`.
    pub fn java_id(&self, identifier: &str) -> Option<i32> {
        self.by_identifier.get(identifier).copied()
    }

    /// Namespaced Java identifier, `minecraft:air` for unknown ids.
    pub fn java_identifier(&self, java_id: i32) -> &str {
        self.get(java_id)
            .map(|m| m.java_identifier.as_str())
            .unwrap_or("minecraft:air")
    }

    pub fn len(&self) -> usize {
        self.by_java_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_java_id.is_empty()
    }
}
