//! Table configuration types (Functional Core - pure data).

use checkin_core::models::{
    AutomaticTextMessage, Checkin, Company, Language, Location, Region, TextMessage, Trainee,
    Training,
};
use checkin_core::storage::Entity;
use checkin_store::dynamodb::keys::ID_ATTRIBUTE;
use checkin_store::StoreConfig;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Table keyed by the string `id` attribute.
    pub fn keyed_by_id(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key: KeyAttribute {
                name: ID_ATTRIBUTE.to_string(),
                attribute_type: AttributeType::String,
            },
            billing_mode: BillingMode::PayPerRequest,
        }
    }

    fn for_entity<E: Entity>(store: &StoreConfig) -> Self {
        Self::keyed_by_id(store.table_name::<E>())
    }
}

/// Returns the table configuration for every entity in `store`'s environment.
/// This is a pure function - no I/O.
pub fn entity_tables(store: &StoreConfig) -> Vec<TableConfig> {
    vec![
        TableConfig::for_entity::<Company>(store),
        TableConfig::for_entity::<Region>(store),
        TableConfig::for_entity::<Location>(store),
        TableConfig::for_entity::<Language>(store),
        TableConfig::for_entity::<Training>(store),
        TableConfig::for_entity::<Checkin>(store),
        TableConfig::for_entity::<TextMessage>(store),
        TableConfig::for_entity::<AutomaticTextMessage>(store),
        TableConfig::for_entity::<Trainee>(store),
    ]
}
