//! Flat form payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → value mapping built from a form at submit time.
///
/// Serializes as a flat JSON object. Inserting a name twice keeps the last
/// value, matching standard form-encoding semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submission with every named field present and empty.
    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
        }
    }

    /// Build from `(name, value)` pairs; later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut submission = Self::new();
        for (name, value) in pairs {
            submission.set(name, value);
        }
        submission
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Reset every value to `""`, keeping the field names.
    pub fn clear_values(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value_wins() {
        let submission =
            FormSubmission::from_pairs([("username", "alice"), ("username", "bob")]);
        assert_eq!(submission.len(), 1);
        assert_eq!(submission.get("username"), Some("bob"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let submission =
            FormSubmission::from_pairs([("username", "alice"), ("password", "secret")]);
        let value: serde_json::Value = serde_json::from_str(&submission.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "username": "alice", "password": "secret" })
        );
    }

    #[test]
    fn test_clear_values_keeps_names() {
        let mut submission = FormSubmission::with_fields(["username", "old_password", "new_password"]);
        submission.set("username", "alice");
        submission.set("new_password", "n3w");
        assert!(!submission.is_blank());

        submission.clear_values();

        assert_eq!(submission.len(), 3);
        assert!(submission.is_blank());
        assert_eq!(submission.get("username"), Some(""));
    }
}
