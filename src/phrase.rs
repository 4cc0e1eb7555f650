use sealed::sealed;
use serde::Serialize;
use std::fmt;

use crate::json::ToJson;
use crate::types::*;
use crate::word::AnnotatedWord;

/// A contiguous labeled span over a sentence, such as a shallow-parse chunk or a
/// named-entity group. The phrase owns copies of its member words: it is a derived,
/// disposable view, not a borrow into the sentence it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedPhrase {
    /// Index of the phrase's first word in the originating sentence.
    word_index: usize,
    /// Tag of the phrase, e.g. its shallow-parse or named-entity tag.
    tag: Option<String>,
    words: Vec<AnnotatedWord>,
}

impl AnnotatedPhrase {
    pub fn new(word_index: usize, tag: Option<String>) -> Self {
        Self {
            word_index,
            tag,
            words: Vec::new(),
        }
    }

    /// Index of the phrase's first word in the originating sentence.
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Tag of the phrase, absent when the opening word carried no tag.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Appends a copy of a word to the phrase.
    pub fn push_word(&mut self, word: AnnotatedWord) {
        self.words.push(word);
    }

    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for AnnotatedPhrase {
    /// Space-joined surface forms of the phrase's words.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", word.name())?;
        }
        Ok(())
    }
}

#[sealed]
impl TypeInfo for AnnotatedPhrase {
    fn typeinfo() -> Type {
        Type::AnnotatedPhrase
    }
}

impl ToJson for AnnotatedPhrase {}
