//! Dictionary lookup values.

use serde::{Deserialize, Serialize};

/// A lookup-table entry: a numeric identifier plus its display value.
///
/// Used for order attributes chosen from service-side dictionaries, such as
/// delivery and payment methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryValue {
    /// Dictionary entry identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display value of the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DictionaryValue {
    /// Creates a dictionary value from an id and display value.
    pub fn new(id: i64, value: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            value: Some(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trips_through_json() {
        let entry = DictionaryValue::new(3, "Courier");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"id": 3, "value": "Courier"}));

        let back: DictionaryValue = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }
}
