//! [`DynamoBackend`] over the AWS SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::backend::{DynamoBackend, Item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error, map_update_item_error, BackendError, Result,
};
use super::Filter;
use crate::config::StoreConfig;

/// Production backend backed by an `aws_sdk_dynamodb::Client`.
#[derive(Debug, Clone)]
pub struct SdkBackend {
    client: Client,
}

impl SdkBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default credential chain, honoring the
    /// configured region and local endpoint.
    pub async fn connect(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl DynamoBackend for SdkBackend {
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, table))?;

        Ok(result.item)
    }

    async fn scan(&self, table: &str, filter: &Filter) -> Result<Vec<Item>> {
        let mut request = self.client.scan().table_name(table);

        if let Some(rendered) = filter.expression() {
            request = request
                .filter_expression(rendered.expression)
                .set_expression_attribute_names(Some(rendered.names))
                .set_expression_attribute_values(Some(rendered.values));
        }

        let result = request
            .send()
            .await
            .map_err(|e| map_scan_error(e, table))?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(table, "scan returned a partial page, remaining items were not read");
        }

        Ok(result.items.unwrap_or_default())
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, table))?;

        Ok(())
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, table))?;

        Ok(())
    }

    async fn update_item(
        &self,
        table: &str,
        key: Item,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<()> {
        self.client
            .update_item()
            .table_name(table)
            .set_key(Some(key))
            .update_expression("SET #attr = :value")
            .expression_attribute_names("#attr", attribute)
            .expression_attribute_values(":value", value)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, table))?;

        Ok(())
    }

    async fn query(
        &self,
        table: &str,
        index: Option<&str>,
        key_condition: &Filter,
    ) -> Result<Vec<Item>> {
        let rendered = key_condition.expression().ok_or_else(|| {
            BackendError::Codec("query requires at least one key condition".to_string())
        })?;

        let result = self
            .client
            .query()
            .table_name(table)
            .set_index_name(index.map(str::to_string))
            .key_condition_expression(rendered.expression)
            .set_expression_attribute_names(Some(rendered.names))
            .set_expression_attribute_values(Some(rendered.values))
            .send()
            .await
            .map_err(|e| map_query_error(e, table))?;

        Ok(result.items.unwrap_or_default())
    }
}
