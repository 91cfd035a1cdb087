//! Trainee lookups and partial updates.
//!
//! Every lookup other than by id is a filtered scan; the first match in scan
//! order wins.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{SecondsFormat, Utc};

use checkin_core::models::Trainee;
use checkin_core::storage::{EntityRepository, Result, TraineeRepository};

use super::{DynamoRepository, Filter};

const EMAIL: &str = "email";
const PHONE: &str = "phone";
const FIRST_NAME: &str = "first_name";
const LAST_NAME: &str = "last_name";
const LOCATION_ID: &str = "location_id";
const LAST_TRAINING: &str = "last_training";
const CHECKED_IN: &str = "checked_in";

#[async_trait]
impl TraineeRepository for DynamoRepository<Trainee> {
    async fn find_by_email(&self, email: &str) -> Result<Trainee> {
        self.find_first(&Filter::equals(EMAIL, email)).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Trainee> {
        self.find_first(&Filter::equals(PHONE, phone)).await
    }

    async fn find_by_email_and_location(&self, email: &str, location_id: &str) -> Result<Trainee> {
        self.find_first(&Filter::equals(EMAIL, email).and(LOCATION_ID, location_id))
            .await
    }

    async fn find_by_phone_and_location(&self, phone: &str, location_id: &str) -> Result<Trainee> {
        self.find_first(&Filter::equals(PHONE, phone).and(LOCATION_ID, location_id))
            .await
    }

    async fn find_by_names(&self, first_name: &str, last_name: &str) -> Result<Trainee> {
        self.find_first(&Filter::equals(FIRST_NAME, first_name).and(LAST_NAME, last_name))
            .await
    }

    async fn find_by_names_and_location(
        &self,
        first_name: &str,
        last_name: &str,
        location_id: &str,
    ) -> Result<Trainee> {
        let filter = Filter::equals(FIRST_NAME, first_name)
            .and(LAST_NAME, last_name)
            .and(LOCATION_ID, location_id);
        self.find_first(&filter).await
    }

    async fn delete_by_email(&self, email: &str) -> Result<()> {
        let trainee = self.find_by_email(email).await?;
        self.delete(&trainee.id).await
    }

    async fn complete_training(&self, id: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.set_attribute(id, LAST_TRAINING, AttributeValue::S(now))
            .await
    }

    async fn checkin(&self, id: &str) -> Result<()> {
        self.set_attribute(id, CHECKED_IN, AttributeValue::Bool(true))
            .await
    }

    async fn checkout(&self, id: &str) -> Result<()> {
        self.set_attribute(id, CHECKED_IN, AttributeValue::Bool(false))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::DateTime;
    use checkin_core::models::sample_trainees;
    use checkin_core::storage::{RepositoryError, ScopedRepository};

    use super::*;
    use crate::dynamodb::DynamoBackend;
    use crate::inmemory::{MockBackend, Operation};

    const TABLE: &str = "trainees_test";

    fn repository() -> (MockBackend, DynamoRepository<Trainee>) {
        let backend = MockBackend::with_trainee_fixtures(TABLE).unwrap();
        let repo = DynamoRepository::new(Arc::new(backend.clone()), TABLE);
        (backend, repo)
    }

    fn fixture(id: &str) -> Trainee {
        sample_trainees()
            .into_iter()
            .find(|t| t.id == id)
            .unwrap()
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_find_by_id() {
        let (_, repo) = repository();

        assert_eq!(repo.find_by_id("2").await.unwrap(), fixture("2"));
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_not_found() {
        let (_, repo) = repository();

        let result = repo.find_by_id("99").await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Trainee",
                criteria: "id = 99".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let (_, repo) = repository();

        let trainee = repo
            .find_by_email("robert.martinez@example.com")
            .await
            .unwrap();

        assert_eq!(trainee.id, "2");
        assert!(trainee.checked_in);
    }

    #[tokio::test]
    async fn test_find_by_email_is_exact_match() {
        let (_, repo) = repository();

        let result = repo.find_by_email("ROBERT.MARTINEZ@example.com").await;

        assert!(matches!(
            result,
            Err(RepositoryError::NotFound { entity_type: "Trainee", .. })
        ));
    }

    #[tokio::test]
    async fn test_find_by_phone() {
        let (_, repo) = repository();

        let trainee = repo.find_by_phone("555-678-9012").await.unwrap();

        assert_eq!(trainee.id, "4");
    }

    #[tokio::test]
    async fn test_find_by_email_and_location() {
        let (_, repo) = repository();

        let trainee = repo
            .find_by_email_and_location("jennifer.garcia@example.com", "loc-002")
            .await
            .unwrap();
        assert_eq!(trainee.id, "3");

        let result = repo
            .find_by_email_and_location("jennifer.garcia@example.com", "loc-001")
            .await;
        match result {
            Err(RepositoryError::NotFound { criteria, .. }) => assert_eq!(
                criteria,
                "email = jennifer.garcia@example.com AND location_id = loc-001"
            ),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_by_phone_and_location() {
        let (_, repo) = repository();

        let trainee = repo
            .find_by_phone_and_location("555-456-7890", "loc-001")
            .await
            .unwrap();
        assert_eq!(trainee.id, "2");

        assert!(repo
            .find_by_phone_and_location("555-456-7890", "loc-003")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_names() {
        let (_, repo) = repository();

        let trainee = repo.find_by_names("Thomas", "Wilson").await.unwrap();
        assert_eq!(trainee.id, "4");

        assert!(repo
            .find_by_names("Thomas", "Garcia")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_names_and_location() {
        let (_, repo) = repository();

        let trainee = repo
            .find_by_names_and_location("Jennifer", "Garcia", "loc-002")
            .await
            .unwrap();
        assert_eq!(trainee, fixture("3"));

        let result = repo
            .find_by_names_and_location("Jennifer", "Garcia", "loc-999")
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_email_returns_first_in_scan_order() {
        let (_, repo) = repository();
        let duplicate = Trainee::new("Rob", "Martinez")
            .with_id("5")
            .with_email("robert.martinez@example.com");
        repo.save(&duplicate).await.unwrap();

        let trainee = repo
            .find_by_email("robert.martinez@example.com")
            .await
            .unwrap();

        assert_eq!(trainee.id, "2");
    }

    #[tokio::test]
    async fn test_find_all_returns_fixtures_in_order() {
        let (_, repo) = repository();

        assert_eq!(repo.find_all().await.unwrap(), sample_trainees());
    }

    #[tokio::test]
    async fn test_find_all_by_affiliation() {
        let (_, repo) = repository();
        let colleague = Trainee::new("Maria", "Lopez")
            .with_id("6")
            .with_affiliation("comp-001", "reg-001", "loc-004");
        repo.save(&colleague).await.unwrap();

        let by_company = repo.find_all_by_company_id("comp-001").await.unwrap();
        let ids: Vec<&str> = by_company.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2", "6"]);

        let by_region = repo.find_all_by_region_id("reg-002").await.unwrap();
        assert_eq!(by_region, vec![fixture("3")]);

        let by_location = repo.find_all_by_location_id("loc-004").await.unwrap();
        assert_eq!(by_location, vec![colleague]);
    }

    #[tokio::test]
    async fn test_find_all_by_unknown_company_is_empty() {
        let (_, repo) = repository();

        let trainees = repo.find_all_by_company_id("comp-999").await.unwrap();

        assert!(trainees.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_by_trainee_scope_is_unsupported() {
        let (_, repo) = repository();

        let result = repo.find_all_by_trainee_id("2").await;

        assert!(matches!(
            result,
            Err(RepositoryError::UnsupportedScope { entity_type: "Trainee", .. })
        ));
    }

    // ------------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_save_then_find_by_id_round_trips() {
        let (_, repo) = repository();
        let trainee = Trainee::new("Ana", "Silva")
            .with_email("ana.silva@example.com")
            .with_phone("555-000-1111")
            .with_affiliation("comp-002", "reg-002", "loc-002");

        repo.save(&trainee).await.unwrap();

        assert_eq!(repo.find_by_id(&trainee.id).await.unwrap(), trainee);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let (backend, repo) = repository();
        let mut trainee = fixture("4");
        trainee.truck_number = "T-999".to_string();

        repo.update(&trainee).await.unwrap();

        assert_eq!(repo.find_by_id("4").await.unwrap(), trainee);
        assert_eq!(backend.write_count(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_is_precondition_without_write() {
        let (backend, repo) = repository();
        let stranger = Trainee::new("No", "Body").with_id("99");

        let result = repo.update(&stranger).await;

        assert_eq!(
            result,
            Err(RepositoryError::Precondition {
                entity_type: "Trainee",
                id: "99".to_string(),
            })
        );
        assert_eq!(backend.write_count(), 0);
        assert!(repo.find_by_id("99").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_find_is_not_found() {
        let (_, repo) = repository();

        repo.delete("3").await.unwrap();

        assert!(repo.find_by_id("3").await.unwrap_err().is_not_found());
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_by_email() {
        let (backend, repo) = repository();

        repo.delete_by_email("thomas.wilson@example.com")
            .await
            .unwrap();

        assert!(repo.find_by_id("4").await.unwrap_err().is_not_found());
        assert_eq!(backend.write_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_unknown_email_deletes_nothing() {
        let (backend, repo) = repository();

        let result = repo.delete_by_email("nobody@example.com").await;

        assert!(matches!(
            result,
            Err(RepositoryError::NotFound { entity_type: "Trainee", .. })
        ));
        assert_eq!(backend.write_count(), 0);
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    // ------------------------------------------------------------------------
    // Partial updates
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_checkout_changes_only_checked_in() {
        let (_, repo) = repository();

        repo.checkout("2").await.unwrap();

        let trainee = repo.find_by_id("2").await.unwrap();
        assert!(!trainee.checked_in);
        assert_eq!(trainee.email, "robert.martinez@example.com");
        assert_eq!(
            trainee,
            Trainee {
                checked_in: false,
                ..fixture("2")
            }
        );
    }

    #[tokio::test]
    async fn test_checkin_is_inverse_of_checkout() {
        let (_, repo) = repository();

        repo.checkin("3").await.unwrap();
        assert_eq!(
            repo.find_by_id("3").await.unwrap(),
            Trainee {
                checked_in: true,
                ..fixture("3")
            }
        );

        repo.checkout("3").await.unwrap();
        assert_eq!(repo.find_by_id("3").await.unwrap(), fixture("3"));
    }

    #[tokio::test]
    async fn test_complete_training_sets_timestamp() {
        let (_, repo) = repository();
        let before = Utc::now().timestamp();

        repo.complete_training("4").await.unwrap();

        let trainee = repo.find_by_id("4").await.unwrap();
        let completed = DateTime::parse_from_rfc3339(&trainee.last_training).unwrap();
        assert!(completed.timestamp() >= before);
        assert_eq!(
            trainee,
            Trainee {
                last_training: trainee.last_training.clone(),
                ..fixture("4")
            }
        );
    }

    #[tokio::test]
    async fn test_checkin_unknown_id_creates_partial_item() {
        let (_, repo) = repository();

        repo.checkin("77").await.unwrap();

        let trainee = repo.find_by_id("77").await.unwrap();
        assert_eq!(trainee.id, "77");
        assert!(trainee.checked_in);
        assert_eq!(trainee.email, "");
    }

    // ------------------------------------------------------------------------
    // Failures
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_item_with_null_attributes_is_readable() {
        let (backend, repo) = repository();
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("7".to_string())),
            ("email".to_string(), AttributeValue::S("ana@example.com".to_string())),
            ("truck_number".to_string(), AttributeValue::Null(true)),
        ]);
        backend.put_item(TABLE, item).await.unwrap();

        let trainee = repo.find_by_id("7").await.unwrap();
        assert_eq!(trainee.truck_number, "");
        assert_eq!(repo.find_by_email("ana@example.com").await.unwrap().id, "7");
        assert_eq!(repo.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_item_is_codec_error() {
        let (backend, repo) = repository();
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("8".to_string())),
            ("checked_in".to_string(), AttributeValue::S("yes".to_string())),
        ]);
        backend.put_item(TABLE, item).await.unwrap();

        assert!(matches!(
            repo.find_by_id("8").await,
            Err(RepositoryError::Codec(_))
        ));
        assert!(matches!(
            repo.find_all().await,
            Err(RepositoryError::Codec(_))
        ));
    }

    #[tokio::test]
    async fn test_scan_failure_is_backend_error() {
        let (backend, repo) = repository();
        backend.fail_on(Operation::Scan).await;

        match repo.find_by_email("robert.martinez@example.com").await {
            Err(RepositoryError::Backend { operation, .. }) => {
                assert_eq!(operation, "scan Trainee in trainees_test")
            }
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_failure_is_backend_error() {
        let (backend, repo) = repository();
        backend.fail_on(Operation::UpdateItem).await;

        let result = repo.checkout("2").await;

        assert!(matches!(result, Err(RepositoryError::Backend { .. })));
        assert!(repo.find_by_id("2").await.unwrap().checked_in);
    }

    #[tokio::test]
    async fn test_delete_by_email_stops_on_delete_failure() {
        let (backend, repo) = repository();
        backend.fail_on(Operation::DeleteItem).await;

        let result = repo.delete_by_email("robert.martinez@example.com").await;

        assert!(matches!(result, Err(RepositoryError::Backend { .. })));
        assert_eq!(repo.find_by_id("2").await.unwrap(), fixture("2"));
    }
}
