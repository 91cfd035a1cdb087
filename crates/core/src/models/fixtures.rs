//! Sample trainees for tests and seeding.
//!
//! Pure data: the same set backs the in-memory backend's fixtures and the
//! `xtask dynamodb seed` command.

use super::Trainee;

/// Returns the sample trainees in their canonical scan order.
///
/// # Example
///
/// ```
/// use checkin_core::models::sample_trainees;
///
/// let trainees = sample_trainees();
/// assert_eq!(trainees.len(), 3);
/// assert_eq!(trainees[0].email, "robert.martinez@example.com");
/// ```
pub fn sample_trainees() -> Vec<Trainee> {
    vec![
        sample(
            "2",
            ("Robert", "Martinez"),
            "robert.martinez@example.com",
            "555-456-7890",
            ("ABC Construction", "ABC Construction Inc."),
            ("contractor", "MSHA123456", "T-789", "en"),
            "2024-02-15",
            ("comp-001", "reg-001", "loc-001"),
            true,
        ),
        sample(
            "3",
            ("Jennifer", "Garcia"),
            "jennifer.garcia@example.com",
            "555-567-8901",
            ("XYZ Logistics", "XYZ Logistics LLC"),
            ("vendor", "MSHA789012", "T-456", "es"),
            "2024-01-20",
            ("comp-002", "reg-002", "loc-002"),
            false,
        ),
        sample(
            "4",
            ("Thomas", "Wilson"),
            "thomas.wilson@example.com",
            "555-678-9012",
            ("123 Excavation", "123 Excavation Services"),
            ("contractor", "MSHA345678", "T-123", "en"),
            "2024-03-05",
            ("comp-003", "reg-003", "loc-003"),
            true,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    (first_name, last_name): (&str, &str),
    email: &str,
    phone: &str,
    (company, display_company): (&str, &str),
    (visitor_type, msha_number, truck_number, language): (&str, &str, &str, &str),
    trained_on: &str,
    (company_id, region_id, location_id): (&str, &str, &str),
    checked_in: bool,
) -> Trainee {
    Trainee {
        msha_number: msha_number.to_string(),
        truck_number: truck_number.to_string(),
        last_training: trained_on.to_string(),
        last_training_video: trained_on.to_string(),
        last_training_agreement: trained_on.to_string(),
        checked_in,
        ..Trainee::new(first_name, last_name)
            .with_id(id)
            .with_email(email)
            .with_phone(phone)
            .with_company(company, display_company)
            .with_visitor_type(visitor_type)
            .with_preferred_language(language)
            .with_affiliation(company_id, region_id, location_id)
    }
}
