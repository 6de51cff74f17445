use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Selects a coordinate operator by name, for callers that configure the layout from data
/// (JSON documents, CLI flags) rather than code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordConfig {
    pub operator: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl Default for CoordConfig {
    fn default() -> Self {
        Self {
            operator: crate::coord::Center::NAME.to_string(),
            options: Map::new(),
        }
    }
}

impl CoordConfig {
    pub fn named(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            ..Default::default()
        }
    }
}
