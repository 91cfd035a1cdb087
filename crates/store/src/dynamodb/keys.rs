//! Primary key construction.
//!
//! Every table is keyed by a single string hash key named `id`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use super::Item;

/// Name of the hash key attribute shared by every table.
pub const ID_ATTRIBUTE: &str = "id";

/// Build the key map for an item id.
pub fn primary_key(id: &str) -> Item {
    HashMap::from([(ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
}

/// Extract the id from a key or item, if present and a string.
pub fn key_id(item: &Item) -> Option<&str> {
    match item.get(ID_ATTRIBUTE) {
        Some(AttributeValue::S(id)) => Some(id),
        _ => None,
    }
}
