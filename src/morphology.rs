use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

/// Morphological tags the annotation layers query for. This is the small slice of the
/// analyzer's tag vocabulary that sentence-level operations actually test against; the
/// full vocabulary belongs to the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphologicalTag {
    ProperNoun,
    Noun,
    Adjective,
    Adverb,
    Verb,
}

impl MorphologicalTag {
    /// The surface form of the tag as it appears in an analysis string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProperNoun => "PROP",
            Self::Noun => "NOUN",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
            Self::Verb => "VERB",
        }
    }
}

/// A morphological analysis as produced by an external analyzer, carried verbatim.
///
/// The textual grammar is the analyzer's: a root followed by `+`-separated tags, with
/// `^DB+` marking a derivation boundary that opens a new inflectional group whose first
/// tag is that group's part of speech. This type only answers the queries the
/// sentence-level operations need (root, part of speech, tag membership) and round-trips
/// the analysis string exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologicalParse {
    raw: String,
}

impl MorphologicalParse {
    pub fn new(parse: impl Into<String>) -> Self {
        Self { raw: parse.into() }
    }

    /// The root word of the analysis.
    pub fn root(&self) -> &str {
        let first = self.raw.split("^DB+").next().unwrap_or("");
        first.split('+').next().unwrap_or("")
    }

    /// The part of speech of the root, i.e. the first tag of the first inflectional group.
    pub fn root_pos(&self) -> Option<&str> {
        let first = self.raw.split("^DB+").next().unwrap_or("");
        first.split('+').nth(1)
    }

    /// The part of speech of the word as a whole, i.e. the part of speech of the last
    /// inflectional group.
    pub fn pos(&self) -> Option<&str> {
        match self.raw.rsplit_once("^DB+") {
            Some((_, last)) => last.split('+').next(),
            None => self.raw.split('+').nth(1),
        }
    }

    /// Is the word a verb? Tests the part of speech of the last inflectional group.
    pub fn is_verb(&self) -> bool {
        self.pos().map_or(false, |pos| pos == MorphologicalTag::Verb.as_str())
    }

    /// Does any inflectional group carry the given tag?
    pub fn contains_tag(&self, tag: MorphologicalTag) -> bool {
        for (i, group) in self.raw.split("^DB+").enumerate() {
            // the first group leads with the root, not a tag
            let skip = if i == 0 { 1 } else { 0 };
            if group
                .split('+')
                .skip(skip)
                .any(|t| t.eq_ignore_ascii_case(tag.as_str()))
            {
                return true;
            }
        }
        false
    }
}

impl fmt::Display for MorphologicalParse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for MorphologicalParse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// A metamorphic (morpheme-level) segmentation, distinct from the primary morphological
/// analysis: `+`-separated morphemes, the first being the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetamorphicParse {
    raw: String,
}

impl MetamorphicParse {
    pub fn new(parse: impl Into<String>) -> Self {
        Self { raw: parse.into() }
    }

    /// The morphemes of the segmentation, in order.
    pub fn morphemes(&self) -> impl Iterator<Item = &str> {
        self.raw.split('+')
    }

    /// Number of morphemes in the segmentation.
    pub fn size(&self) -> usize {
        self.morphemes().count()
    }

    /// The root morpheme.
    pub fn root(&self) -> &str {
        self.raw.split('+').next().unwrap_or("")
    }
}

impl fmt::Display for MetamorphicParse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for MetamorphicParse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
