//! In-memory backend implementation.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use checkin_core::models::sample_trainees;
use checkin_core::storage::Result as RepositoryResult;

use crate::dynamodb::conversions::to_item;
use crate::dynamodb::keys::{key_id, ID_ATTRIBUTE};
use crate::dynamodb::{BackendError, DynamoBackend, Filter, Item, Result};

/// Backend operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetItem,
    Scan,
    PutItem,
    DeleteItem,
    UpdateItem,
    Query,
}

/// In-memory DynamoDB stand-in.
///
/// Tables keep their items in insertion order, which is the order scans
/// return them in. Operations on a table that was never created fail with
/// [`BackendError::TableNotFound`]. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    tables: Arc<RwLock<HashMap<String, Vec<Item>>>>,
    failures: Arc<RwLock<HashSet<Operation>>>,
    writes: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Creates a backend with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding the given tables.
    pub fn with_tables(tables: HashMap<String, Vec<Item>>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
            ..Self::default()
        }
    }

    /// Creates a backend whose `table` holds the sample trainees.
    pub fn with_trainee_fixtures(table: impl Into<String>) -> RepositoryResult<Self> {
        let items = sample_trainees()
            .iter()
            .map(to_item)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Self::with_tables(HashMap::from([(table.into(), items)])))
    }

    /// Create an empty table. Existing tables are left untouched.
    pub async fn create_table(&self, table: impl Into<String>) {
        self.tables.write().await.entry(table.into()).or_default();
    }

    /// Snapshot of a table's items in scan order.
    pub async fn items(&self, table: &str) -> Option<Vec<Item>> {
        self.tables.read().await.get(table).cloned()
    }

    /// Make every later call of `operation` fail.
    pub async fn fail_on(&self, operation: Operation) {
        self.failures.write().await.insert(operation);
    }

    pub async fn clear_failures(&self) {
        self.failures.write().await.clear();
    }

    /// Number of successful put, delete and update calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn check(&self, operation: Operation) -> Result<()> {
        if self.failures.read().await.contains(&operation) {
            return Err(BackendError::Service(format!(
                "injected {:?} failure",
                operation
            )));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

fn require_id(item: &Item) -> Result<String> {
    key_id(item)
        .map(str::to_string)
        .ok_or_else(|| BackendError::Codec(format!("missing string key attribute {ID_ATTRIBUTE}")))
}

fn table_not_found(table: &str) -> BackendError {
    BackendError::TableNotFound(table.to_string())
}

fn position(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|item| key_id(item) == Some(id))
}

#[async_trait]
impl DynamoBackend for MockBackend {
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        self.check(Operation::GetItem).await?;
        let id = require_id(&key)?;

        let tables = self.tables.read().await;
        let items = tables.get(table).ok_or_else(|| table_not_found(table))?;
        Ok(position(items, &id).map(|i| items[i].clone()))
    }

    async fn scan(&self, table: &str, filter: &Filter) -> Result<Vec<Item>> {
        self.check(Operation::Scan).await?;

        let tables = self.tables.read().await;
        let items = tables.get(table).ok_or_else(|| table_not_found(table))?;
        Ok(items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        self.check(Operation::PutItem).await?;
        let id = require_id(&item)?;

        let mut tables = self.tables.write().await;
        let items = tables.get_mut(table).ok_or_else(|| table_not_found(table))?;
        match position(items, &id) {
            Some(i) => items[i] = item,
            None => items.push(item),
        }
        self.record_write();
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<()> {
        self.check(Operation::DeleteItem).await?;
        let id = require_id(&key)?;

        let mut tables = self.tables.write().await;
        let items = tables.get_mut(table).ok_or_else(|| table_not_found(table))?;
        if let Some(i) = position(items, &id) {
            items.remove(i);
        }
        self.record_write();
        Ok(())
    }

    async fn update_item(
        &self,
        table: &str,
        key: Item,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<()> {
        self.check(Operation::UpdateItem).await?;
        let id = require_id(&key)?;
        if attribute == ID_ATTRIBUTE {
            return Err(BackendError::Codec(format!(
                "cannot update key attribute {ID_ATTRIBUTE}"
            )));
        }

        let mut tables = self.tables.write().await;
        let items = tables.get_mut(table).ok_or_else(|| table_not_found(table))?;
        match position(items, &id) {
            Some(i) => {
                items[i].insert(attribute.to_string(), value);
            }
            None => {
                let mut item = key;
                item.insert(attribute.to_string(), value);
                items.push(item);
            }
        }
        self.record_write();
        Ok(())
    }

    async fn query(
        &self,
        table: &str,
        _index: Option<&str>,
        key_condition: &Filter,
    ) -> Result<Vec<Item>> {
        self.check(Operation::Query).await?;
        if key_condition.is_empty() {
            return Err(BackendError::Codec(
                "query requires at least one key condition".to_string(),
            ));
        }

        let tables = self.tables.read().await;
        let items = tables.get(table).ok_or_else(|| table_not_found(table))?;
        Ok(items
            .iter()
            .filter(|item| key_condition.matches(item))
            .cloned()
            .collect())
    }
}
