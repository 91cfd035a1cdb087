//! Shared handle to the store.

use std::sync::Arc;

use checkin_core::models::Trainee;
use checkin_core::storage::Entity;

use crate::config::StoreConfig;
use crate::dynamodb::{DynamoBackend, DynamoRepository, SdkBackend};

/// Backend plus configuration, built once at startup.
///
/// Cloning is cheap; every clone shares the same backend.
#[derive(Clone)]
pub struct StoreContext {
    backend: Arc<dyn DynamoBackend>,
    config: StoreConfig,
}

impl StoreContext {
    pub fn new(backend: Arc<dyn DynamoBackend>, config: StoreConfig) -> Self {
        Self { backend, config }
    }

    /// Connect to DynamoDB using the configured region and endpoint.
    pub async fn connect(config: StoreConfig) -> Self {
        tracing::info!(target = %config.target_display(), "Connecting to DynamoDB");
        let backend = SdkBackend::connect(&config).await;
        Self::new(Arc::new(backend), config)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> Arc<dyn DynamoBackend> {
        Arc::clone(&self.backend)
    }

    /// Repository for any entity, bound to its environment-qualified table.
    pub fn repository<E: Entity>(&self) -> DynamoRepository<E> {
        DynamoRepository::new(self.backend(), self.config.table_name::<E>())
    }

    pub fn trainees(&self) -> DynamoRepository<Trainee> {
        self.repository()
    }
}

#[cfg(test)]
mod tests {
    use checkin_core::models::{Company, Region};
    use checkin_core::storage::{EntityRepository, TraineeRepository};

    use super::*;
    use crate::inmemory::MockBackend;

    #[tokio::test]
    async fn test_repositories_use_qualified_tables() {
        let backend = MockBackend::with_trainee_fixtures("trainees_test").unwrap();
        let context = StoreContext::new(Arc::new(backend), StoreConfig::for_environment("test"));

        assert_eq!(context.trainees().table_name(), "trainees_test");
        assert_eq!(context.repository::<Region>().table_name(), "regions_test");

        let trainee = context
            .trainees()
            .find_by_email("jennifer.garcia@example.com")
            .await
            .unwrap();
        assert_eq!(trainee.id, "3");
    }

    #[tokio::test]
    async fn test_clones_share_backend() {
        let backend = MockBackend::new();
        backend.create_table("companies_dev").await;
        let context = StoreContext::new(Arc::new(backend.clone()), StoreConfig::for_environment("dev"));
        let other = context.clone();

        let company = Company {
            id: "comp-001".to_string(),
            name: "Acme Mining".to_string(),
        };
        context.repository::<Company>().save(&company).await.unwrap();

        let found = other
            .repository::<Company>()
            .find_by_id("comp-001")
            .await
            .unwrap();
        assert_eq!(found, company);
        assert_eq!(backend.write_count(), 1);
    }
}
