/*
    Annosent Library (multi-layer sentence annotation)

        Licensed under the GNU General Public License v3
*/

//! ## Introduction
//!
//! Annosent is a library for working with multi-layer linguistic annotation of sentences
//! in agglutinative languages. Every word of a sentence carries independent, optional
//! annotation layers: the surface form, a morphological analysis, a metamorphic
//! (morpheme-level) segmentation, a sense id, a named-entity tag, a semantic-role
//! argument, a frame element, a shallow-parse chunk tag, a universal dependency
//! relation, a slot-filling tag and a sentiment polarity.
//!
//! **What can you do with this library?**
//!
//! * Losslessly decode and re-encode the compact bracketed annotation token each word is
//!   stored as (`{turkish=...}{morphologicalAnalysis=...}...`), tolerating layer keys
//!   from newer or older annotation tools.
//! * Run sentence-level algorithms over the decoded words:
//!    * group words into shallow-parse phrases,
//!    * detect predicate candidates against a frameset or frame-lexicon resource,
//!      including multi-word verbal expressions sharing one sense,
//!    * look up the nearest verbal predicate for a word,
//!    * remove words while keeping all dependency targets consistent,
//!    * build literal/synset candidate lists over 1/2/3-word windows for sense
//!      disambiguation,
//!    * score two dependency annotations of the same text against each other, and sum
//!      such scores across a corpus.
//! * Load one-sentence annotation files and whole corpus folders, with per-file
//!   failures reported rather than silently dropped.
//!
//! The morphological analyzer, wordnet, frameset/framenet resources and gazetteers are
//! external collaborators: this crate defines the value types and traits that shape the
//! queries ([`MorphologicalParse`], [`SenseInventory`], [`FramesetIndex`],
//! [`FrameLexicon`], [`Gazetteer`]) and consumes their answers, but implements none of
//! them.
//!
//! Entry points:
//! * [`AnnotatedWord`] - one word and its layers
//! * [`AnnotatedSentence`] - the word sequence and all sentence-level algorithms
//! * [`AnnotatedPhrase`] - a labeled span produced by shallow-parse grouping
//! * [`AnnotatedCorpus`] - a folder of sentences
//! * [`ParserEvaluationScore`] - accumulated dependency-comparison outcomes

mod config;
mod corpus;
mod dependency;
mod entity;
mod error;
mod evaluation;
mod file;
mod json;
mod layer;
mod morphology;
mod phrase;
mod resources;
mod role;
mod sentence;
mod slot;
mod types;
mod word;

// Our internal crate structure is not very relevant to the outside world,
// expose all structs and traits in the root namespace, and be explicit about it:

pub use config::{Config, Configurable};
pub use corpus::AnnotatedCorpus;
pub use dependency::UniversalDependencyRelation;
pub use entity::NamedEntityType;
pub use error::{AnnotationError, AnnotationResult};
pub use evaluation::ParserEvaluationScore;
pub use json::ToJson;
pub use layer::{Layer, PolarityType, ViewLayer};
pub use morphology::{MetamorphicParse, MorphologicalParse, MorphologicalTag};
pub use phrase::AnnotatedPhrase;
pub use resources::{FrameLexicon, FramesetIndex, Gazetteer, Literal, SenseInventory, SynSet};
pub use role::{Argument, FrameElement};
pub use sentence::AnnotatedSentence;
pub use slot::Slot;
pub use types::{Type, TypeInfo};
pub use word::AnnotatedWord;
