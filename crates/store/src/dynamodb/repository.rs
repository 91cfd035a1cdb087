//! DynamoDB repository implementation.
//!
//! Implements the generic repository traits from `checkin_core::storage` for
//! every entity type. Lookups other than by id are filtered full-table scans.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use checkin_core::storage::{
    Entity, EntityRepository, RepositoryError, Result, Scope, ScopedRepository,
};

use super::conversions::{from_item, from_items, to_item};
use super::{keys, DynamoBackend, Filter};

/// DynamoDB-backed repository for one entity type.
///
/// Holds no state besides the backend handle and the table name, so it can be
/// shared freely between tasks.
pub struct DynamoRepository<E> {
    backend: Arc<dyn DynamoBackend>,
    table_name: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> DynamoRepository<E> {
    /// Creates a new repository over `backend` using `table_name`.
    pub fn new(backend: Arc<dyn DynamoBackend>, table_name: impl Into<String>) -> Self {
        Self {
            backend,
            table_name: table_name.into(),
            _entity: PhantomData,
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Scan the table and decode every item matching `filter`.
    pub async fn scan(&self, filter: &Filter) -> Result<Vec<E>> {
        tracing::debug!(
            entity = E::ENTITY_TYPE,
            table = %self.table_name,
            %filter,
            "Scanning table"
        );

        let items = self
            .backend
            .scan(&self.table_name, filter)
            .await
            .map_err(|e| RepositoryError::backend(self.action("scan"), e))?;

        from_items(&items)
    }

    /// First item matching `filter` in scan order.
    pub async fn find_first(&self, filter: &Filter) -> Result<E> {
        self.scan(filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::not_found(E::ENTITY_TYPE, filter.to_string()))
    }

    /// Set a single attribute without touching the rest of the item.
    ///
    /// Like DynamoDB's `UpdateItem`, an absent item is created.
    pub async fn set_attribute(
        &self,
        id: &str,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<()> {
        tracing::debug!(
            entity = E::ENTITY_TYPE,
            table = %self.table_name,
            id,
            attribute,
            "Updating attribute"
        );

        self.backend
            .update_item(&self.table_name, keys::primary_key(id), attribute, value)
            .await
            .map_err(|e| RepositoryError::backend(self.action(&format!("update {attribute} on")), e))
    }

    async fn put(&self, entity: &E) -> Result<()> {
        let item = to_item(entity)?;

        tracing::debug!(
            entity = E::ENTITY_TYPE,
            table = %self.table_name,
            id = entity.id(),
            "Writing item"
        );

        self.backend
            .put_item(&self.table_name, item)
            .await
            .map_err(|e| RepositoryError::backend(self.action("put"), e))
    }

    fn action(&self, verb: &str) -> String {
        format!("{verb} {} in {}", E::ENTITY_TYPE, self.table_name)
    }
}

impl<E> Clone for DynamoRepository<E> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            table_name: self.table_name.clone(),
            _entity: PhantomData,
        }
    }
}

// ============================================================================
// EntityRepository implementation
// ============================================================================

#[async_trait]
impl<E: Entity> EntityRepository<E> for DynamoRepository<E> {
    async fn find_by_id(&self, id: &str) -> Result<E> {
        let item = self
            .backend
            .get_item(&self.table_name, keys::primary_key(id))
            .await
            .map_err(|e| RepositoryError::backend(self.action("get"), e))?;

        match item {
            Some(item) => from_item(&item),
            None => Err(RepositoryError::not_found(E::ENTITY_TYPE, format!("id = {id}"))),
        }
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        self.scan(&Filter::all()).await
    }

    async fn save(&self, entity: &E) -> Result<()> {
        self.put(entity).await
    }

    async fn update(&self, entity: &E) -> Result<()> {
        match self.find_by_id(entity.id()).await {
            Ok(_) => self.put(entity).await,
            Err(RepositoryError::NotFound { .. }) => {
                tracing::warn!(
                    entity = E::ENTITY_TYPE,
                    id = entity.id(),
                    "Refusing to update missing item"
                );
                Err(RepositoryError::Precondition {
                    entity_type: E::ENTITY_TYPE,
                    id: entity.id().to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::debug!(entity = E::ENTITY_TYPE, table = %self.table_name, id, "Deleting item");

        self.backend
            .delete_item(&self.table_name, keys::primary_key(id))
            .await
            .map_err(|e| RepositoryError::backend(self.action("delete"), e))
    }
}

// ============================================================================
// ScopedRepository implementation
// ============================================================================

#[async_trait]
impl<E: Entity> ScopedRepository<E> for DynamoRepository<E> {
    async fn find_all_by(&self, scope: Scope, id: &str) -> Result<Vec<E>> {
        if !E::supports(scope) {
            return Err(RepositoryError::UnsupportedScope {
                entity_type: E::ENTITY_TYPE,
                scope,
            });
        }

        self.scan(&Filter::equals(scope.attribute(), id)).await
    }
}
