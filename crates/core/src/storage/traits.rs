use async_trait::async_trait;

use crate::models::Trainee;

use super::{Entity, Result, Scope};

/// Basic persistence for any stored entity.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Gets an item by its id. Fails with `NotFound` if there is none.
    async fn find_by_id(&self, id: &str) -> Result<E>;

    /// Gets every item in the table.
    async fn find_all(&self) -> Result<Vec<E>>;

    /// Writes the full item, replacing any existing one with the same id.
    async fn save(&self, entity: &E) -> Result<()>;

    /// Overwrites an existing item. Fails with `Precondition` if the id is
    /// not stored.
    async fn update(&self, entity: &E) -> Result<()>;

    /// Deletes an item by its id. Deleting a missing id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Listing by organizational scope.
#[async_trait]
pub trait ScopedRepository<E: Entity>: EntityRepository<E> {
    /// Gets every item whose scope attribute equals `id`. An empty list is a
    /// valid answer.
    async fn find_all_by(&self, scope: Scope, id: &str) -> Result<Vec<E>>;

    async fn find_all_by_company_id(&self, id: &str) -> Result<Vec<E>> {
        self.find_all_by(Scope::Company, id).await
    }

    async fn find_all_by_region_id(&self, id: &str) -> Result<Vec<E>> {
        self.find_all_by(Scope::Region, id).await
    }

    async fn find_all_by_location_id(&self, id: &str) -> Result<Vec<E>> {
        self.find_all_by(Scope::Location, id).await
    }

    async fn find_all_by_trainee_id(&self, id: &str) -> Result<Vec<E>> {
        self.find_all_by(Scope::Trainee, id).await
    }
}

/// Trainee lookups and check-in state changes.
///
/// Every `find_by_*` returns the first match in scan order and fails with
/// `NotFound` when nothing matches.
#[async_trait]
pub trait TraineeRepository: ScopedRepository<Trainee> {
    async fn find_by_email(&self, email: &str) -> Result<Trainee>;

    async fn find_by_phone(&self, phone: &str) -> Result<Trainee>;

    async fn find_by_email_and_location(&self, email: &str, location_id: &str)
        -> Result<Trainee>;

    async fn find_by_phone_and_location(&self, phone: &str, location_id: &str)
        -> Result<Trainee>;

    async fn find_by_names(&self, first_name: &str, last_name: &str) -> Result<Trainee>;

    async fn find_by_names_and_location(
        &self,
        first_name: &str,
        last_name: &str,
        location_id: &str,
    ) -> Result<Trainee>;

    /// Resolves the email to an id, then deletes that id. Nothing is deleted
    /// if the lookup fails.
    async fn delete_by_email(&self, email: &str) -> Result<()>;

    /// Stamps `last_training` with the current time.
    async fn complete_training(&self, id: &str) -> Result<()>;

    /// Sets `checked_in` to true.
    async fn checkin(&self, id: &str) -> Result<()>;

    /// Sets `checked_in` to false.
    async fn checkout(&self, id: &str) -> Result<()>;
}
