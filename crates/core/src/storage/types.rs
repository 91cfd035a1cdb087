use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// An organizational key a collection can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Company,
    Region,
    Location,
    Trainee,
}

impl Scope {
    /// Attribute that holds the scoping id on stored items.
    pub fn attribute(&self) -> &'static str {
        match self {
            Scope::Company => "company_id",
            Scope::Region => "region_id",
            Scope::Location => "location_id",
            Scope::Trainee => "trainee_id",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// A record stored as one item per id in its own table.
///
/// Serialized field names are the stored attribute names, so the attribute
/// codec can work from the serde representation alone.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Human readable name used in errors and logs.
    const ENTITY_TYPE: &'static str;

    /// Base table name, before any environment suffix.
    const TABLE: &'static str;

    /// Scopes the entity's collection can be listed by.
    const SCOPES: &'static [Scope] = &[];

    /// The primary key.
    fn id(&self) -> &str;

    /// Returns true if the entity declares `scope`.
    fn supports(scope: Scope) -> bool {
        Self::SCOPES.contains(&scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_attributes() {
        assert_eq!(Scope::Company.attribute(), "company_id");
        assert_eq!(Scope::Region.attribute(), "region_id");
        assert_eq!(Scope::Location.attribute(), "location_id");
        assert_eq!(Scope::Trainee.attribute(), "trainee_id");
    }

    #[test]
    fn test_scope_display_is_attribute() {
        assert_eq!(Scope::Location.to_string(), "location_id");
    }
}
