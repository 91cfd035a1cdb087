use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{Entity, Scope};

/// A person visiting a site who must complete safety training before
/// checking in.
///
/// Serialized field names are the attribute names used in the store. Missing
/// attributes fall back to their defaults when a record is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trainee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    /// Company as typed by the trainee.
    pub company: String,
    pub display_company: String,
    pub visitor_type: String,
    pub msha_number: String,
    pub truck_number: String,
    pub preferred_language: String,
    pub last_training: String,
    pub last_training_video: String,
    pub last_training_agreement: String,
    pub company_id: String,
    pub location_id: String,
    pub region_id: String,
    pub checked_in: bool,
    pub checkin_id: String,
}

impl Trainee {
    /// Creates a trainee with a fresh id and a display name derived from the
    /// first and last names.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        Self {
            id: Uuid::new_v4().to_string(),
            display_name: display_name(&first_name, &last_name),
            first_name,
            last_name,
            ..Default::default()
        }
    }

    /// Sets a specific id (useful for fixtures and tests).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the free-text company and its display form.
    pub fn with_company(
        mut self,
        company: impl Into<String>,
        display_company: impl Into<String>,
    ) -> Self {
        self.company = company.into();
        self.display_company = display_company.into();
        self
    }

    /// Places the trainee in the Company → Region → Location hierarchy.
    pub fn with_affiliation(
        mut self,
        company_id: impl Into<String>,
        region_id: impl Into<String>,
        location_id: impl Into<String>,
    ) -> Self {
        self.company_id = company_id.into();
        self.region_id = region_id.into();
        self.location_id = location_id.into();
        self
    }

    pub fn with_visitor_type(mut self, visitor_type: impl Into<String>) -> Self {
        self.visitor_type = visitor_type.into();
        self
    }

    pub fn with_preferred_language(mut self, language: impl Into<String>) -> Self {
        self.preferred_language = language.into();
        self
    }

    /// Recomputes `display_name` from the current first and last names.
    pub fn refresh_display_name(&mut self) {
        self.display_name = display_name(&self.first_name, &self.last_name);
    }
}

fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}").trim().to_string()
}

impl Entity for Trainee {
    const ENTITY_TYPE: &'static str = "Trainee";
    const TABLE: &'static str = "trainees";
    const SCOPES: &'static [Scope] = &[Scope::Company, Scope::Region, Scope::Location];

    fn id(&self) -> &str {
        &self.id
    }
}
