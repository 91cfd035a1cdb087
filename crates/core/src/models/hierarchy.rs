//! Organizational records around trainees.
//!
//! Company → Region → Location form the hierarchy trainees are scoped to. The
//! remaining records hang off that hierarchy. Each carries the scoping ids its
//! repository can filter on.

use serde::{Deserialize, Serialize};

use crate::storage::{Entity, Scope};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub id: String,
    pub name: String,
}

impl Entity for Company {
    const ENTITY_TYPE: &'static str = "Company";
    const TABLE: &'static str = "companies";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub company_id: String,
}

impl Entity for Region {
    const ENTITY_TYPE: &'static str = "Region";
    const TABLE: &'static str = "regions";
    const SCOPES: &'static [Scope] = &[Scope::Company];

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub company_id: String,
    pub region_id: String,
}

impl Entity for Location {
    const ENTITY_TYPE: &'static str = "Location";
    const TABLE: &'static str = "locations";
    const SCOPES: &'static [Scope] = &[Scope::Company, Scope::Region];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A language trainings and messages can be delivered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: String,
    pub name: String,
    /// Short code matching `Trainee::preferred_language` (e.g. `en`).
    pub code: String,
}

impl Entity for Language {
    const ENTITY_TYPE: &'static str = "Language";
    const TABLE: &'static str = "languages";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A completed training session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Training {
    pub id: String,
    pub name: String,
    pub trainee_id: String,
    pub company_id: String,
    pub region_id: String,
    pub location_id: String,
    pub completed_at: String,
}

impl Entity for Training {
    const ENTITY_TYPE: &'static str = "Training";
    const TABLE: &'static str = "trainings";
    const SCOPES: &'static [Scope] = &[
        Scope::Company,
        Scope::Region,
        Scope::Location,
        Scope::Trainee,
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A single visit by a trainee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkin {
    pub id: String,
    pub trainee_id: String,
    pub company_id: String,
    pub region_id: String,
    pub checked_in_at: String,
    pub checked_out_at: String,
}

impl Entity for Checkin {
    const ENTITY_TYPE: &'static str = "Checkin";
    const TABLE: &'static str = "checkins";
    const SCOPES: &'static [Scope] = &[Scope::Company, Scope::Region, Scope::Trainee];

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMessage {
    pub id: String,
    pub location_id: String,
    pub message: String,
}

impl Entity for TextMessage {
    const ENTITY_TYPE: &'static str = "TextMessage";
    const TABLE: &'static str = "text_messages";
    const SCOPES: &'static [Scope] = &[Scope::Location];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A text message sent without operator action (e.g. on check-in).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomaticTextMessage {
    pub id: String,
    pub location_id: String,
    pub message: String,
}

impl Entity for AutomaticTextMessage {
    const ENTITY_TYPE: &'static str = "AutomaticTextMessage";
    const TABLE: &'static str = "automatic_text_messages";
    const SCOPES: &'static [Scope] = &[Scope::Location];

    fn id(&self) -> &str {
        &self.id
    }
}
