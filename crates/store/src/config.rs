use std::env;

use checkin_core::models::Trainee;
use checkin_core::storage::Entity;

/// Trainee table base name when `DYNAMODB_TABLE_NAME` is unset.
pub const DEFAULT_TRAINEE_TABLE: &str = "trainees";
/// Environment when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "dev";
/// The only environment whose tables carry no suffix.
pub const PRODUCTION_ENVIRONMENT: &str = "prod";
/// Region when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base name of the trainee table (default: "trainees")
    pub trainee_table: String,
    /// Deployment environment (default: "dev")
    pub environment: String,
    /// Custom endpoint URL for local DynamoDB
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Trainee table base name (default: "trainees")
    /// - `ENVIRONMENT` - Deployment environment (default: "dev")
    /// - `AWS_ENDPOINT_URL` - Local DynamoDB endpoint (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            trainee_table: non_empty_var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TRAINEE_TABLE.to_string()),
            environment: non_empty_var("ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            endpoint_url: non_empty_var("AWS_ENDPOINT_URL"),
            region: non_empty_var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        }
    }

    /// Configuration for `environment` with default table and region.
    pub fn for_environment(environment: impl Into<String>) -> Self {
        Self {
            trainee_table: DEFAULT_TRAINEE_TABLE.to_string(),
            environment: environment.into(),
            endpoint_url: None,
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION_ENVIRONMENT
    }

    /// Apply the environment suffix to a base table name.
    ///
    /// `trainees` becomes `trainees_dev` outside production.
    pub fn qualify(&self, base: &str) -> String {
        if self.is_production() {
            base.to_string()
        } else {
            format!("{}_{}", base, self.environment)
        }
    }

    /// Physical table name for an entity type.
    ///
    /// The trainee table's base name is configurable; every other entity uses
    /// its fixed table name.
    pub fn table_name<E: Entity>(&self) -> String {
        if E::TABLE == Trainee::TABLE {
            self.qualify(&self.trainee_table)
        } else {
            self.qualify(E::TABLE)
        }
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({}), environment {}", url, self.environment),
            None => format!(
                "AWS DynamoDB (region: {}), environment {}",
                self.region, self.environment
            ),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
