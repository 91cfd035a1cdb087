//! AWS SDK client setup (Imperative Shell).

use std::collections::HashMap;

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::Client;
use checkin_store::dynamodb::SdkBackend;
use checkin_store::StoreConfig;

use super::config::TableConfig;
use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// Creates a DynamoDB client for the configured region and endpoint.
pub async fn create_client(config: &StoreConfig) -> Client {
    SdkBackend::connect(config).await.client().clone()
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let table = response.table().ok_or_else(|| {
                DynamodbError::AwsSdk(format!("DescribeTable returned no table for {table_name}"))
            })?;

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Active) => TableStatus::Active,
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(TableState { status }))
        }
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(DynamodbError::AwsSdk(err.to_string())),
        },
    }
}

/// Fetches the state of every table that exists.
pub async fn get_table_states(
    client: &Client,
    tables: &[TableConfig],
) -> Result<HashMap<String, TableState>> {
    let mut states = HashMap::new();
    for table in tables {
        if let Some(state) = get_table_state(client, &table.table_name).await? {
            states.insert(table.table_name.clone(), state);
        }
    }
    Ok(states)
}
