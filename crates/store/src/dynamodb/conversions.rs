//! DynamoDB attribute conversion functions.
//!
//! Records are converted through `serde_json::Value`, so any serde record can
//! be stored. Pure functions, testable without DynamoDB access.
//!
//! | JSON | Attribute |
//! |---|---|
//! | string | `S` |
//! | bool | `BOOL` |
//! | number | `N` |
//! | null | `NULL` |
//! | array | `L` |
//! | object | `M` |
//!
//! String and number sets (`SS`, `NS`) decode to arrays. Binary attributes are
//! not supported.

use aws_sdk_dynamodb::types::AttributeValue;
use checkin_core::storage::{RepositoryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::Item;

// ============================================================================
// Encoding
// ============================================================================

/// Convert a record into a DynamoDB item.
///
/// The record must serialize to a JSON object.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item> {
    match serde_json::to_value(record).map_err(|e| RepositoryError::Codec(e.to_string()))? {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(name, value)| (name, value_to_attribute(value)))
            .collect()),
        other => Err(RepositoryError::Codec(format!(
            "expected a record, got {}",
            json_kind(&other)
        ))),
    }
}

/// Convert a single value into an attribute.
pub fn value_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(value_to_attribute).collect())
        }
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(name, value)| (name, value_to_attribute(value)))
                .collect(),
        ),
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Convert a DynamoDB item into a record.
///
/// Attributes missing from the item take the record's serde default. A
/// top-level `NULL` attribute counts as missing.
pub fn from_item<T: DeserializeOwned>(item: &Item) -> Result<T> {
    let present = item
        .iter()
        .filter(|(_, attribute)| !matches!(attribute, AttributeValue::Null(_)));
    let fields = attributes_to_object(present)?;
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        RepositoryError::Codec(format!(
            "cannot decode item {}: {e}",
            item_label(item)
        ))
    })
}

/// Convert every item, failing on the first one that does not decode.
pub fn from_items<T: DeserializeOwned>(items: &[Item]) -> Result<Vec<T>> {
    items.iter().map(from_item).collect()
}

/// Convert an attribute into a JSON value.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => number_to_value(n),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(fields) => attributes_to_object(fields).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| number_to_value(n))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(RepositoryError::Codec(
            "binary attributes are not supported".to_string(),
        )),
        other => Err(RepositoryError::Codec(format!(
            "unsupported attribute: {:?}",
            other
        ))),
    }
}

fn attributes_to_object<'a>(
    fields: impl IntoIterator<Item = (&'a String, &'a AttributeValue)>,
) -> Result<Map<String, Value>> {
    fields
        .into_iter()
        .map(|(name, attribute)| {
            attribute_to_value(attribute)
                .map(|value| (name.clone(), value))
                .map_err(|e| match e {
                    RepositoryError::Codec(msg) => {
                        RepositoryError::Codec(format!("attribute {name}: {msg}"))
                    }
                    other => other,
                })
        })
        .collect()
}

fn number_to_value(n: &str) -> Result<Value> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::Codec(format!("invalid number {n:?}")))
}

fn item_label(item: &Item) -> String {
    match super::keys::key_id(item) {
        Some(id) => format!("with id {id}"),
        None => "without id".to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_dynamodb::primitives::Blob;
    use checkin_core::models::{sample_trainees, Checkin, Trainee};

    use super::*;

    #[test]
    fn test_trainee_round_trip() {
        for trainee in sample_trainees() {
            let item = to_item(&trainee).unwrap();
            let decoded: Trainee = from_item(&item).unwrap();
            assert_eq!(trainee, decoded);
        }
    }

    #[test]
    fn test_trainee_item_attributes() {
        let trainee = sample_trainees().remove(0);
        let item = to_item(&trainee).unwrap();

        assert_eq!(item["id"], AttributeValue::S("2".to_string()));
        assert_eq!(
            item["email"],
            AttributeValue::S("robert.martinez@example.com".to_string())
        );
        assert_eq!(item["checked_in"], AttributeValue::Bool(true));
        assert_eq!(item.len(), 20);
    }

    #[test]
    fn test_missing_attributes_take_defaults() {
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("7".to_string())),
            ("first_name".to_string(), AttributeValue::S("Ana".to_string())),
        ]);

        let trainee: Trainee = from_item(&item).unwrap();

        assert_eq!(trainee.id, "7");
        assert_eq!(trainee.first_name, "Ana");
        assert_eq!(trainee.email, "");
        assert!(!trainee.checked_in);
    }

    #[test]
    fn test_null_attributes_take_defaults() {
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("7".to_string())),
            ("truck_number".to_string(), AttributeValue::Null(true)),
            ("checked_in".to_string(), AttributeValue::Null(true)),
        ]);

        let trainee: Trainee = from_item(&item).unwrap();

        assert_eq!(trainee.id, "7");
        assert_eq!(trainee.truck_number, "");
        assert!(!trainee.checked_in);
    }

    #[test]
    fn test_nested_null_is_kept() {
        let item = HashMap::from([(
            "meta".to_string(),
            AttributeValue::M(HashMap::from([(
                "note".to_string(),
                AttributeValue::Null(true),
            )])),
        )]);

        let value: Value = from_item(&item).unwrap();

        assert_eq!(value["meta"], serde_json::json!({ "note": null }));
    }

    #[test]
    fn test_wrong_attribute_kind_is_codec_error() {
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("7".to_string())),
            ("checked_in".to_string(), AttributeValue::S("yes".to_string())),
        ]);

        let result: Result<Trainee> = from_item(&item);

        match result {
            Err(RepositoryError::Codec(msg)) => assert!(msg.contains("with id 7"), "{msg}"),
            other => panic!("expected codec error, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_attribute_is_rejected() {
        let item = HashMap::from([(
            "avatar".to_string(),
            AttributeValue::B(Blob::new(vec![1, 2, 3])),
        )]);

        let result: Result<Value> = from_item(&item);

        match result {
            Err(RepositoryError::Codec(msg)) => assert!(msg.starts_with("attribute avatar"), "{msg}"),
            other => panic!("expected codec error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_record_is_rejected() {
        let result = to_item(&vec!["a", "b"]);
        assert!(matches!(result, Err(RepositoryError::Codec(_))));
    }

    #[test]
    fn test_nested_and_set_attributes() {
        let item = HashMap::from([
            (
                "tags".to_string(),
                AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]),
            ),
            (
                "scores".to_string(),
                AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]),
            ),
            (
                "meta".to_string(),
                AttributeValue::M(HashMap::from([(
                    "count".to_string(),
                    AttributeValue::N("3".to_string()),
                )])),
            ),
            ("gone".to_string(), AttributeValue::Null(true)),
        ]);

        let value: Value = from_item(&item).unwrap();

        assert_eq!(value["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(value["scores"], serde_json::json!([1, 2.5]));
        assert_eq!(value["meta"]["count"], serde_json::json!(3));
        assert!(value.get("gone").is_none());
    }

    #[test]
    fn test_numbers_encode_as_n() {
        let value = serde_json::json!({ "id": "1", "attempts": 3, "ratio": 0.5 });
        let item = to_item(&value).unwrap();

        assert_eq!(item["attempts"], AttributeValue::N("3".to_string()));
        assert_eq!(item["ratio"], AttributeValue::N("0.5".to_string()));
    }

    #[test]
    fn test_hierarchy_record_round_trip() {
        let checkin = Checkin {
            id: "c-1".to_string(),
            trainee_id: "2".to_string(),
            company_id: "comp-001".to_string(),
            region_id: "reg-001".to_string(),
            checked_in_at: "2024-02-15T10:00:00Z".to_string(),
            checked_out_at: String::new(),
        };

        let decoded: Checkin = from_item(&to_item(&checkin).unwrap()).unwrap();
        assert_eq!(checkin, decoded);
    }
}
