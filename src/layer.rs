//! The per-word annotation layer codec. One bracketed token holds a surface form and any
//! subset of the known layers as `{key=value}` segments; this module maps segments to
//! typed [`Layer`] values and back. Unknown keys are accepted and discarded so that
//! tokens from newer or older annotation tools keep decoding; malformed values for known
//! keys abort the token's decode.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::dependency::UniversalDependencyRelation;
use crate::entity::NamedEntityType;
use crate::error::AnnotationResult;
use crate::morphology::{MetamorphicParse, MorphologicalParse};
use crate::role::{Argument, FrameElement};
use crate::slot::Slot;

static SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("segment pattern is valid"));

/// Addresses a single annotation layer of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLayer {
    Surface,
    InflectionalGroup,
    MetaMorpheme,
    Semantics,
    NamedEntity,
    PropBank,
    FrameNet,
    ShallowParse,
    Dependency,
    Slot,
    Polarity,
}

/// Sentiment polarity of a word sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarityType {
    Positive,
    Negative,
    Neutral,
}

impl PolarityType {
    /// Maps a textual polarity tag to a polarity; parsing is case-insensitive and total,
    /// anything that is not positive or negative is neutral.
    pub fn parse(polarity: &str) -> Self {
        match polarity.to_ascii_lowercase().as_str() {
            "positive" | "pos" => Self::Positive,
            "negative" | "neg" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for PolarityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One decoded annotation layer, tagged by kind. The codec dispatches each `{key=value}`
/// segment of a token into exactly one of these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Surface(String),
    MorphologicalAnalysis(MorphologicalParse),
    MetaMorphemes(MetamorphicParse),
    Semantics(String),
    NamedEntity(NamedEntityType),
    PropBank(Argument),
    FrameNet(FrameElement),
    ShallowParse(String),
    UniversalDependency(UniversalDependencyRelation),
    Slot(Slot),
    Polarity(PolarityType),
}

impl Layer {
    /// The layer key as used in the bracketed annotation format.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Surface(_) => "turkish",
            Self::MorphologicalAnalysis(_) => "morphologicalAnalysis",
            Self::MetaMorphemes(_) => "metaMorphemes",
            Self::Semantics(_) => "semantics",
            Self::NamedEntity(_) => "namedEntity",
            Self::PropBank(_) => "propbank",
            Self::FrameNet(_) => "framenet",
            Self::ShallowParse(_) => "shallowParse",
            Self::UniversalDependency(_) => "universalDependency",
            Self::Slot(_) => "slot",
            Self::Polarity(_) => "polarity",
        }
    }

    /// Parses one `key=value` segment. Returns `Ok(None)` for unrecognized keys; a
    /// malformed value for a recognized key is an error and aborts the token's decode.
    pub fn from_segment(key: &str, value: &str) -> AnnotationResult<Option<Layer>> {
        Ok(Some(match key {
            "turkish" => Layer::Surface(value.to_string()),
            "morphologicalAnalysis" => {
                Layer::MorphologicalAnalysis(MorphologicalParse::new(value))
            }
            "metaMorphemes" => Layer::MetaMorphemes(MetamorphicParse::new(value)),
            "semantics" => Layer::Semantics(value.to_string()),
            "namedEntity" => Layer::NamedEntity(NamedEntityType::parse(value)),
            "propbank" => Layer::PropBank(Argument::new(value)),
            "framenet" => Layer::FrameNet(FrameElement::from_layer_value(value)?),
            "shallowParse" => Layer::ShallowParse(value.to_string()),
            "universalDependency" => {
                Layer::UniversalDependency(UniversalDependencyRelation::from_layer_value(value)?)
            }
            "slot" => Layer::Slot(Slot::new(value)),
            "polarity" => Layer::Polarity(PolarityType::parse(value)),
            _ => return Ok(None),
        }))
    }

    /// Iterates over the bracketed segments of a token, brace-stripped.
    pub(crate) fn segments(token: &str) -> impl Iterator<Item = &str> {
        SEGMENT_PATTERN
            .captures_iter(token)
            .filter_map(|captures| captures.get(1))
            .map(|segment| segment.as_str())
    }
}
