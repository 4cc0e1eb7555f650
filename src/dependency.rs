use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

use crate::error::{AnnotationError, AnnotationResult};
use crate::evaluation::ParserEvaluationScore;

/// A universal dependency relation: a target word index and a relation label, pointing
/// toward the syntactic head of a word. Target indices are 1-based; 0 is reserved for ROOT.
///
/// The layer value grammar is `<int>$<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalDependencyRelation {
    to: isize,
    dependency_type: String,
}

impl UniversalDependencyRelation {
    pub fn new(to: isize, dependency_type: impl Into<String>) -> Self {
        Self {
            to,
            dependency_type: dependency_type.into(),
        }
    }

    pub(crate) fn from_layer_value(value: &str) -> AnnotationResult<Self> {
        let (to, dependency_type) = value.split_once('$').ok_or_else(|| {
            AnnotationError::MalformedLayerValue(
                "universalDependency",
                value.to_string(),
                "expected <int>$<label>",
            )
        })?;
        let to: isize = to.parse().map_err(|_| {
            AnnotationError::MalformedLayerValue(
                "universalDependency",
                value.to_string(),
                "target index is not an integer",
            )
        })?;
        Ok(Self::new(to, dependency_type))
    }

    /// The 1-based index of the word this relation points to; 0 or negative means ROOT.
    pub fn to(&self) -> isize {
        self.to
    }

    /// The relation label.
    pub fn dependency_type(&self) -> &str {
        &self.dependency_type
    }

    /// Compares this relation with another, producing a one-word evaluation outcome:
    /// an unlabeled hit when the targets agree, a labeled hit when the labels agree too.
    /// Labels are compared case-insensitively, matching the normalization the relation
    /// type system applies.
    pub fn compare(&self, other: &UniversalDependencyRelation) -> ParserEvaluationScore {
        let unlabeled = self.to == other.to;
        let labeled = unlabeled
            && self
                .dependency_type
                .eq_ignore_ascii_case(&other.dependency_type);
        ParserEvaluationScore::of_word(labeled, unlabeled)
    }
}

impl fmt::Display for UniversalDependencyRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.dependency_type)
    }
}

impl Serialize for UniversalDependencyRelation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&format_args!("{}${}", self.to, self.dependency_type))
    }
}
