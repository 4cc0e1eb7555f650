/*
    Annosent Library (multi-layer sentence annotation)

        Licensed under the GNU General Public License v3
*/

//! The annotated sentence and the sentence-level algorithms that consume its words'
//! annotation layers: shallow-parse grouping, predicate-candidate detection, nearest-verb
//! lookup, word removal with dependency renumbering, literal/synset candidate
//! construction and dependency comparison.

use sealed::sealed;
use serde::Serialize;
use std::fmt;
use std::io::BufRead;

use crate::config::Config;
use crate::error::{AnnotationError, AnnotationResult};
use crate::evaluation::ParserEvaluationScore;
use crate::file::open_file_reader;
use crate::json::ToJson;
use crate::morphology::{MetamorphicParse, MorphologicalParse, MorphologicalTag};
use crate::phrase::AnnotatedPhrase;
use crate::resources::{FrameLexicon, FramesetIndex, Literal, SenseInventory, SynSet};
use crate::types::*;
use crate::word::AnnotatedWord;

/// An ordered sequence of [`AnnotatedWord`]. Words are addressed 0-based; dependency
/// targets inside the words are 1-based, with 0 reserved for ROOT.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotatedSentence {
    words: Vec<AnnotatedWord>,
}

impl AnnotatedSentence {
    /// An empty sentence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a line of whitespace-separated annotation tokens into a sentence.
    pub fn from_line(line: &str) -> AnnotationResult<Self> {
        let words = line
            .split_whitespace()
            .map(AnnotatedWord::from_token)
            .collect::<AnnotationResult<Vec<_>>>()?;
        Ok(Self { words })
    }

    /// Reads an annotated sentence from a text file; only the first line is read.
    pub fn from_file(filename: &str, config: &Config) -> AnnotationResult<Self> {
        debug(config, || {
            format!("AnnotatedSentence::from_file: filename={:?}", filename)
        });
        let reader = open_file_reader(filename, config)?;
        match reader.lines().next() {
            Some(line) => {
                let line = line.map_err(|e| {
                    AnnotationError::IOError(
                        e,
                        filename.to_string(),
                        "Reading sentence line failed",
                    )
                })?;
                Self::from_line(&line)
            }
            None => Ok(Self::new()),
        }
    }

    pub fn push_word(&mut self, word: AnnotatedWord) {
        self.words.push(word);
    }

    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&AnnotatedWord> {
        self.words.get(index)
    }

    pub fn word_mut(&mut self, index: usize) -> Option<&mut AnnotatedWord> {
        self.words.get_mut(index)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space-joined surface forms.
    pub fn to_words(&self) -> String {
        let mut result = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            result.push_str(word.name());
        }
        result
    }

    /// Space-joined root words from the morphological parses, falling back to the
    /// surface form for words without a parse layer.
    pub fn to_stems(&self) -> String {
        let mut result = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            match word.parse() {
                Some(parse) => result.push_str(parse.root()),
                None => result.push_str(word.name()),
            }
        }
        result
    }

    /// Groups the sentence into shallow-parse phrases. The scan is left to right: a new
    /// phrase opens whenever the previous word carried a present chunk tag differing
    /// from the current word's tag, and the final phrase is always flushed. The returned
    /// phrases partition the sentence in original order. A first word without a chunk
    /// tag yields an untagged first phrase.
    pub fn shallow_parse_groups(&self) -> Vec<AnnotatedPhrase> {
        let mut groups = Vec::new();
        let first = match self.words.first() {
            Some(word) => word,
            None => return groups,
        };
        let mut current = AnnotatedPhrase::new(0, first.shallow_parse().map(String::from));
        current.push_word(first.clone());
        for (i, word) in self.words.iter().enumerate().skip(1) {
            let previous = &self.words[i - 1];
            if previous.shallow_parse().is_some()
                && previous.shallow_parse() != word.shallow_parse()
            {
                groups.push(std::mem::replace(
                    &mut current,
                    AnnotatedPhrase::new(i, word.shallow_parse().map(String::from)),
                ));
            }
            current.push_word(word.clone());
        }
        groups.push(current);
        groups
    }

    /// Is any word annotated as a semantic-role predicate?
    pub fn contains_predicate(&self) -> bool {
        self.words
            .iter()
            .any(|word| word.argument().map_or(false, |a| a.argument_type() == "PREDICATE"))
    }

    /// Is any word annotated as a frame-element predicate?
    pub fn contains_frame_predicate(&self) -> bool {
        self.words.iter().any(|word| {
            word.frame_element()
                .map_or(false, |e| e.frame_element_type() == "PREDICATE")
        })
    }

    /// All words that are plausibly verbal predicates with a resolvable sense: verbs
    /// with a present sense id for which a frameset exists. Adjacent words sharing the
    /// candidate's sense id are promoted too, capturing multi-word verbal expressions.
    /// Candidates keep first-qualification order and contain no duplicates.
    pub fn predicate_candidates<F: FramesetIndex>(&self, framesets: &F) -> Vec<&AnnotatedWord> {
        let mut candidates: Vec<usize> = Vec::new();
        for (i, word) in self.words.iter().enumerate() {
            if word.parse().map_or(false, |p| p.is_verb())
                && word.semantic().map_or(false, |s| framesets.frame_exists(s))
            {
                candidates.push(i);
            }
        }
        self.extend_multiword_candidates(&mut candidates);
        candidates.into_iter().map(|i| &self.words[i]).collect()
    }

    /// Same as [`Self::predicate_candidates`], with frame-lexicon membership deciding
    /// whether a sense id resolves.
    pub fn predicate_frame_candidates<F: FrameLexicon>(&self, framenet: &F) -> Vec<&AnnotatedWord> {
        let mut candidates: Vec<usize> = Vec::new();
        for (i, word) in self.words.iter().enumerate() {
            if word.parse().map_or(false, |p| p.is_verb())
                && word
                    .semantic()
                    .map_or(false, |s| framenet.lexical_unit_exists(s))
            {
                candidates.push(i);
            }
        }
        self.extend_multiword_candidates(&mut candidates);
        candidates.into_iter().map(|i| &self.words[i]).collect()
    }

    /// Two passes over adjacent pairs: a word joins the candidates when its successor
    /// already qualified and both share the identical sense id.
    fn extend_multiword_candidates(&self, candidates: &mut Vec<usize>) {
        for distance in 0..2 {
            for j in 0..self.words.len().saturating_sub(distance + 1) {
                if !candidates.contains(&j) && candidates.contains(&(j + 1)) {
                    let word = &self.words[j];
                    let next = &self.words[j + 1];
                    if word.semantic().is_some() && word.semantic() == next.semantic() {
                        candidates.push(j);
                    }
                }
            }
        }
    }

    /// Finds the predicate nearest to the word at `index`: the closest preceding and the
    /// closest following word whose root part of speech and part of speech are both
    /// verbal are located, and the surface form at the larger of the two distances is
    /// returned. Returns an empty string when `index` is out of range.
    pub fn predicate(&self, index: usize) -> String {
        if index >= self.word_count() {
            return String::new();
        }
        let parses: Vec<Option<&MorphologicalParse>> =
            self.words.iter().map(|word| word.parse()).collect();
        let full_verb = |parse: &MorphologicalParse| {
            parse.root_pos() == Some(MorphologicalTag::Verb.as_str()) && parse.is_verb()
        };
        let mut count1 = 0;
        let mut count2 = 0;
        let mut i = index as isize;
        while i >= 0 {
            if let Some(parse) = parses[i as usize] {
                if full_verb(parse) {
                    count1 = index - i as usize;
                    break;
                }
            }
            i -= 1;
        }
        let mut i = index;
        while i < self.word_count() - index {
            if let Some(parse) = parses[i] {
                if full_verb(parse) {
                    count2 = i - index;
                    break;
                }
            }
            i += 1;
        }
        let picked = if count1 > count2 { count1 } else { count2 };
        self.words[picked].name().to_string()
    }

    /// Removes the word at `index`. Every surviving word's dependency target is kept
    /// consistent: targets pointing at the removed word become ROOT, greater targets
    /// shift down by one, lesser targets are untouched.
    pub fn remove_word(&mut self, index: usize) -> AnnotationResult<()> {
        if index >= self.words.len() {
            return Err(AnnotationError::IndexOutOfRange(
                index,
                self.words.len(),
                "remove_word",
            ));
        }
        let removed = (index + 1) as isize;
        for word in self.words.iter_mut() {
            let relation = word
                .universal_dependency()
                .map(|r| (r.to(), r.dependency_type().to_string()));
            if let Some((to, dependency_type)) = relation {
                if to == removed {
                    word.set_universal_dependency(-1, "ROOT");
                } else if to > removed {
                    word.set_universal_dependency(to - 1, &dependency_type);
                }
            }
        }
        self.words.remove(index);
        Ok(())
    }

    /// Compares the dependency layers of two sentences word by position. Positions where
    /// either side lacks a relation are skipped entirely; the rest accumulate into a
    /// [`ParserEvaluationScore`].
    pub fn compare_parses(&self, other: &AnnotatedSentence) -> ParserEvaluationScore {
        let mut score = ParserEvaluationScore::new();
        for (word, other_word) in self.words.iter().zip(other.words.iter()) {
            if let (Some(relation), Some(other_relation)) =
                (word.universal_dependency(), other_word.universal_dependency())
            {
                score.add(&relation.compare(other_relation));
            }
        }
        score
    }

    /// All literal candidates for the word at `word_index`: single-word candidates for
    /// its root and parses, plus candidates for every existing 2- and 3-word idiom
    /// window around it, sorted descending by literal name.
    pub fn construct_literals<S: SenseInventory>(
        &self,
        inventory: &S,
        word_index: usize,
    ) -> AnnotationResult<Vec<Literal>> {
        let parse = self.required_parse(word_index, "construct_literals")?;
        let metamorphic_parse = self.required_metamorphic(word_index, "construct_literals")?;
        let mut candidates = inventory.construct_literals(parse.root(), parse, metamorphic_parse);
        for window in self.idiom_windows(word_index) {
            let (parses, metamorphic_parses) =
                self.window_parses(&window, "construct_literals")?;
            candidates.extend(inventory.construct_idiom_literals(&parses, &metamorphic_parses));
        }
        candidates.sort_by(|a, b| b.name().cmp(a.name()));
        Ok(candidates)
    }

    /// All synset candidates for the word at `word_index`, windowed like
    /// [`Self::construct_literals`] and sorted descending by synset id.
    pub fn construct_synsets<S: SenseInventory>(
        &self,
        inventory: &S,
        word_index: usize,
    ) -> AnnotationResult<Vec<SynSet>> {
        let parse = self.required_parse(word_index, "construct_synsets")?;
        let metamorphic_parse = self.required_metamorphic(word_index, "construct_synsets")?;
        let mut candidates = inventory.construct_synsets(parse.root(), parse, metamorphic_parse);
        for window in self.idiom_windows(word_index) {
            let (parses, metamorphic_parses) = self.window_parses(&window, "construct_synsets")?;
            candidates.extend(inventory.construct_idiom_synsets(&parses, &metamorphic_parses));
        }
        candidates.sort_by(|a, b| b.id().cmp(a.id()));
        Ok(candidates)
    }

    /// The 2- and 3-word idiom windows around a word that exist within the sentence
    /// bounds, as index lists in sentence order.
    fn idiom_windows(&self, i: usize) -> Vec<Vec<usize>> {
        let n = self.words.len();
        let mut windows = Vec::new();
        if i >= 2 {
            windows.push(vec![i - 2, i - 1, i]);
        }
        if i >= 1 {
            windows.push(vec![i - 1, i]);
        }
        if i >= 1 && i + 1 < n {
            windows.push(vec![i - 1, i, i + 1]);
        }
        if i + 2 < n {
            windows.push(vec![i, i + 1, i + 2]);
        }
        if i + 1 < n {
            windows.push(vec![i, i + 1]);
        }
        windows
    }

    fn window_parses(
        &self,
        window: &[usize],
        context: &'static str,
    ) -> AnnotationResult<(Vec<&MorphologicalParse>, Vec<&MetamorphicParse>)> {
        let mut parses = Vec::with_capacity(window.len());
        let mut metamorphic_parses = Vec::with_capacity(window.len());
        for &i in window {
            parses.push(self.required_parse(i, context)?);
            metamorphic_parses.push(self.required_metamorphic(i, context)?);
        }
        Ok((parses, metamorphic_parses))
    }

    fn required_parse(
        &self,
        index: usize,
        context: &'static str,
    ) -> AnnotationResult<&MorphologicalParse> {
        self.words
            .get(index)
            .ok_or(AnnotationError::IndexOutOfRange(
                index,
                self.words.len(),
                context,
            ))?
            .parse()
            .ok_or(AnnotationError::AbsentLayer(
                "morphologicalAnalysis",
                index,
                context,
            ))
    }

    fn required_metamorphic(
        &self,
        index: usize,
        context: &'static str,
    ) -> AnnotationResult<&MetamorphicParse> {
        self.words
            .get(index)
            .ok_or(AnnotationError::IndexOutOfRange(
                index,
                self.words.len(),
                context,
            ))?
            .metamorphic_parse()
            .ok_or(AnnotationError::AbsentLayer(
                "metaMorphemes",
                index,
                context,
            ))
    }
}

impl fmt::Display for AnnotatedSentence {
    /// Space-joined bracketed tokens of all words, i.e. the sentence's file form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

#[sealed]
impl TypeInfo for AnnotatedSentence {
    fn typeinfo() -> Type {
        Type::AnnotatedSentence
    }
}

impl ToJson for AnnotatedSentence {}
