//! Contracts for the external lexical resources the sentence-level operations query:
//! frameset and frame-lexicon membership, literal/synset construction and gazetteers.
//! The resources themselves live outside this crate; implementations here only shape
//! the queries and carry the answers.

use serde::Serialize;
use std::fmt;

use crate::morphology::{MetamorphicParse, MorphologicalParse};

/// A lexical sense entry: the literal name under which a sense is listed, and the id of
/// the synset containing it. The name is the display key used for deterministic ordering
/// of candidate lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    name: String,
    synset_id: String,
}

impl Literal {
    pub fn new(name: impl Into<String>, synset_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synset_id: synset_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn synset_id(&self) -> &str {
        &self.synset_id
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A sense cluster (ontology node). The id is the display key used for deterministic
/// ordering of candidate lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynSet {
    id: String,
}

impl SynSet {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SynSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Membership test against a frameset resource: does a frameset exist for a sense id?
pub trait FramesetIndex {
    fn frame_exists(&self, synset_id: &str) -> bool;
}

/// Membership test against a frame lexicon: does a lexical unit exist for a sense id?
pub trait FrameLexicon {
    fn lexical_unit_exists(&self, synset_id: &str) -> bool;
}

/// Literal/synset construction over 1-word and multi-word windows. Multi-word queries
/// receive the parses of the window's words in sentence order; the resource decides
/// which idiom entries, if any, those parses can evoke.
pub trait SenseInventory {
    /// All single-word literal candidates for a root form and its parses.
    fn construct_literals(
        &self,
        root: &str,
        parse: &MorphologicalParse,
        metamorphic_parse: &MetamorphicParse,
    ) -> Vec<Literal>;

    /// All literal candidates for a multi-word idiom window.
    fn construct_idiom_literals(
        &self,
        parses: &[&MorphologicalParse],
        metamorphic_parses: &[&MetamorphicParse],
    ) -> Vec<Literal>;

    /// All single-word synset candidates for a root form and its parses.
    fn construct_synsets(
        &self,
        root: &str,
        parse: &MorphologicalParse,
        metamorphic_parse: &MetamorphicParse,
    ) -> Vec<SynSet>;

    /// All synset candidates for a multi-word idiom window.
    fn construct_idiom_synsets(
        &self,
        parses: &[&MorphologicalParse],
        metamorphic_parses: &[&MetamorphicParse],
    ) -> Vec<SynSet>;
}

/// A named-entity gazetteer: a word list published under the entity tag it assigns.
pub trait Gazetteer {
    /// The name of the gazetteer, doubling as the named-entity tag it assigns.
    fn name(&self) -> &str;

    /// Is the given (lowercased) word listed?
    fn contains(&self, word: &str) -> bool;
}
