//! Preference payloads exchanged with the preferences dialog

use serde::{Deserialize, Serialize};

/// Opaque preference values owned by the preference service.
///
/// The dialog always receives a copy; edits only reach the service through
/// an explicit update after confirmation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(flatten)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferences_flatten() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"homeLat": 49.5, "defaultDb": "home.db"}"#).unwrap();
        assert_eq!(prefs.get("defaultDb"), Some(&json!("home.db")));

        let mut copy = prefs.clone();
        copy.set("defaultDb", json!("travel.db"));
        assert_ne!(copy, prefs);
    }
}
