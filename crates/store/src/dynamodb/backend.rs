//! The operations repositories need from the store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use super::error::Result;
use super::Filter;

/// A stored item: attribute name to attribute value.
pub type Item = HashMap<String, AttributeValue>;

/// Minimal DynamoDB surface used by the repositories.
///
/// Every call reads or writes a single page; there is no batching and no
/// pagination.
#[async_trait]
pub trait DynamoBackend: Send + Sync {
    /// Fetch one item by primary key. `Ok(None)` when absent.
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>>;

    /// Full-table scan, keeping the items that match `filter`.
    async fn scan(&self, table: &str, filter: &Filter) -> Result<Vec<Item>>;

    /// Write the whole item, replacing any item with the same key.
    async fn put_item(&self, table: &str, item: Item) -> Result<()>;

    /// Remove the item with `key`. Removing an absent item succeeds.
    async fn delete_item(&self, table: &str, key: Item) -> Result<()>;

    /// Set a single attribute on the item with `key`, creating the item if it
    /// is absent.
    async fn update_item(
        &self,
        table: &str,
        key: Item,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<()>;

    /// Key-condition query against the table or one of its indexes.
    async fn query(
        &self,
        table: &str,
        index: Option<&str>,
        key_condition: &Filter,
    ) -> Result<Vec<Item>>;
}
