//! Submitted field values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to submitted value
///
/// A `None` value stands for an explicit null. Checkers treat a null value
/// the same as a field that was never submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSet {
    values: IndexMap<String, Option<String>>,
}

impl ValueSet {
    /// Create an empty value set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value
    pub fn set(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, Some(value.into()));
        self
    }

    /// Set a field to null
    pub fn set_null(mut self, field: impl Into<String>) -> Self {
        self.insert(field, None);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        self.values.insert(field.into(), value);
    }

    /// Value of a field, `None` when absent or null
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|value| value.as_deref())
    }

    /// Whether the field was submitted at all, null included
    pub fn contains_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ValueSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

/// Absent, null and `""` all count as empty
pub fn is_empty_value(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_null_read_the_same() {
        let values = ValueSet::new().set("name", "Al").set_null("email");

        assert_eq!(values.get("name"), Some("Al"));
        assert_eq!(values.get("email"), None);
        assert_eq!(values.get("phone"), None);
        assert!(values.contains_field("email"));
        assert!(!values.contains_field("phone"));
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(None));
        assert!(is_empty_value(Some("")));
        assert!(!is_empty_value(Some(" ")));
        assert!(!is_empty_value(Some("x")));
    }

    #[test]
    fn test_value_set_from_json() {
        let values: ValueSet =
            serde_json::from_str(r#"{"name": "Al", "email": null, "note": ""}"#).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values.get("name"), Some("Al"));
        assert!(values.contains_field("email"));
        assert_eq!(values.get("note"), Some(""));
    }

    #[test]
    fn test_value_set_rejects_non_string_values() {
        let result: Result<ValueSet, _> = serde_json::from_str(r#"{"age": 42}"#);
        assert!(result.is_err());
    }
}
