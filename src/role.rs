use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

use crate::error::{AnnotationError, AnnotationResult};

/// A semantic-role tag: an argument-type discriminator (e.g. "PREDICATE", "ARG0") and,
/// for predicates, the sense id of the frameset being evoked.
///
/// The layer value grammar is `<type>` or `<type>$<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    argument_type: String,
    id: Option<String>,
}

impl Argument {
    /// Parses an argument from its layer value. Never fails: a value without `$` is a
    /// bare argument type.
    pub fn new(argument: &str) -> Self {
        match argument.split_once('$') {
            Some((argument_type, id)) => Self {
                argument_type: argument_type.to_string(),
                id: Some(id.to_string()),
            },
            None => Self {
                argument_type: argument.to_string(),
                id: None,
            },
        }
    }

    /// The argument-type discriminator.
    pub fn argument_type(&self) -> &str {
        &self.argument_type
    }

    /// The sense id of the evoked frameset, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}${}", self.argument_type, id),
            None => write!(f, "{}", self.argument_type),
        }
    }
}

impl Serialize for Argument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A frame-role tag: a frame-element discriminator (e.g. "PREDICATE"), the evoked frame
/// and the sense id it is anchored to.
///
/// The layer value grammar is `<type>$<frame>$<id>`, or a bare `<type>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameElement {
    frame_element_type: String,
    frame: Option<String>,
    id: Option<String>,
}

impl FrameElement {
    pub fn new(
        frame_element_type: impl Into<String>,
        frame: Option<String>,
        id: Option<String>,
    ) -> Self {
        Self {
            frame_element_type: frame_element_type.into(),
            frame,
            id,
        }
    }

    pub(crate) fn from_layer_value(value: &str) -> AnnotationResult<Self> {
        if value.contains('$') {
            let mut items = value.split('$');
            match (items.next(), items.next(), items.next(), items.next()) {
                (Some(fe_type), Some(frame), Some(id), None) => Ok(Self::new(
                    fe_type,
                    Some(frame.to_string()),
                    Some(id.to_string()),
                )),
                _ => Err(AnnotationError::MalformedLayerValue(
                    "framenet",
                    value.to_string(),
                    "expected <type>$<frame>$<id>",
                )),
            }
        } else {
            Ok(Self::new(value, None, None))
        }
    }

    /// The frame-element discriminator.
    pub fn frame_element_type(&self) -> &str {
        &self.frame_element_type
    }

    /// The evoked frame, if any.
    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    /// The anchoring sense id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for FrameElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.frame, &self.id) {
            (Some(frame), Some(id)) => {
                write!(f, "{}${}${}", self.frame_element_type, frame, id)
            }
            _ => write!(f, "{}", self.frame_element_type),
        }
    }
}

impl Serialize for FrameElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
