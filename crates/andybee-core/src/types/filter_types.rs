//! Named filter types

use serde::{Deserialize, Serialize};

/// A named, user-defined predicate description used to narrow the catalog.
///
/// The criteria payload belongs to the filter service; this crate never looks
/// inside it. A filter's identity is its position in the service's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub name: String,
    #[serde(default)]
    pub criteria: serde_json::Value,
}

impl Filter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            criteria: serde_json::Value::Null,
        }
    }

    pub fn with_criteria(mut self, criteria: serde_json::Value) -> Self {
        self.criteria = criteria;
        self
    }
}

/// Ordered filter list, addressed by index
pub type FilterList = Vec<Filter>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_builder() {
        let filter = Filter::new("Mystery").with_criteria(json!({"type": "unknown"}));
        assert_eq!(filter.name, "Mystery");
        assert_eq!(filter.criteria["type"], "unknown");
    }

    #[test]
    fn test_filter_without_criteria_deserializes() {
        let filter: Filter = serde_json::from_str(r#"{"name": "All"}"#).unwrap();
        assert_eq!(filter, Filter::new("All"));
    }
}
