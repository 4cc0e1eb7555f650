use serde::Serialize;
use std::fmt;

/// Named-entity tag vocabulary. Parsing is case-insensitive and total: an unrecognized
/// tag maps to [`NamedEntityType::None`] rather than failing, so gazetteer-assigned and
/// hand-annotated tags can both flow through the same layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NamedEntityType {
    None,
    Person,
    Location,
    Organization,
    Time,
    Money,
}

impl NamedEntityType {
    /// Maps a textual tag to a named-entity type; unrecognized tags map to `None`.
    pub fn parse(entity_type: &str) -> Self {
        match entity_type.to_ascii_lowercase().as_str() {
            "person" => Self::Person,
            "location" => Self::Location,
            "organization" => Self::Organization,
            "time" => Self::Time,
            "money" => Self::Money,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Person => "PERSON",
            Self::Location => "LOCATION",
            Self::Organization => "ORGANIZATION",
            Self::Time => "TIME",
            Self::Money => "MONEY",
        }
    }
}

impl fmt::Display for NamedEntityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
