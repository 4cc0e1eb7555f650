use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

/// A slot-filling tag. The tag grammar belongs to the slot-filling resource; the value
/// is carried verbatim and round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    tag: String,
}

impl Slot {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.tag)
    }
}
