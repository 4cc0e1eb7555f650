/*
    Annosent Library (multi-layer sentence annotation)

        Licensed under the GNU General Public License v3
*/

//! Corpus loading: every annotation file in a folder becomes one sentence. Files that
//! fail to load do not abort the corpus; they are collected into an explicit
//! partial-result report the caller can inspect.

use sealed::sealed;
use std::path::PathBuf;

use crate::config::{Config, Configurable};
use crate::error::{AnnotationError, AnnotationResult};
use crate::evaluation::ParserEvaluationScore;
use crate::sentence::AnnotatedSentence;
use crate::types::*;

/// An ordered collection of [`AnnotatedSentence`], typically loaded from a folder with
/// one annotation file per sentence.
#[derive(Debug, Default)]
pub struct AnnotatedCorpus {
    sentences: Vec<AnnotatedSentence>,
    skipped: Vec<(PathBuf, AnnotationError)>,
    config: Config,
}

impl AnnotatedCorpus {
    /// An empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every file in the given folder as an annotated sentence. Files are visited
    /// in sorted filename order. Per-file failures are recorded in [`Self::skipped`]
    /// rather than aborting the load; only failure to read the folder itself is fatal.
    pub fn from_folder(folder: &str, config: Config) -> AnnotationResult<Self> {
        Self::load(folder, None, config)
    }

    /// Like [`Self::from_folder`], restricted to files whose name contains the given
    /// pattern, e.g. ".train" or ".test".
    pub fn from_folder_with_pattern(
        folder: &str,
        pattern: &str,
        config: Config,
    ) -> AnnotationResult<Self> {
        Self::load(folder, Some(pattern), config)
    }

    fn load(folder: &str, pattern: Option<&str>, config: Config) -> AnnotationResult<Self> {
        debug(&config, || {
            format!(
                "AnnotatedCorpus::load: folder={:?} pattern={:?}",
                folder, pattern
            )
        });
        let entries = std::fs::read_dir(folder).map_err(|e| {
            AnnotationError::IOError(e, folder.to_string(), "Reading corpus folder failed")
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        let mut corpus = Self {
            sentences: Vec::new(),
            skipped: Vec::new(),
            config,
        };
        for path in paths {
            if let Some(pattern) = pattern {
                let matches = path
                    .file_name()
                    .map_or(false, |name| name.to_string_lossy().contains(pattern));
                if !matches {
                    continue;
                }
            }
            let loaded = match path.to_str() {
                Some(filename) => AnnotatedSentence::from_file(filename, &corpus.config),
                None => Err(AnnotationError::OtherError(
                    "corpus filename is not valid unicode",
                )),
            };
            match loaded {
                Ok(sentence) => corpus.sentences.push(sentence),
                Err(e) => {
                    debug(&corpus.config, || {
                        format!("AnnotatedCorpus::load: skipping {:?}: {}", path, e)
                    });
                    corpus.skipped.push((path, e));
                }
            }
        }
        Ok(corpus)
    }

    pub fn push_sentence(&mut self, sentence: AnnotatedSentence) {
        self.sentences.push(sentence);
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&AnnotatedSentence> {
        self.sentences.get(index)
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Files that failed to load, with the error that caused each skip. Empty after a
    /// fully clean load.
    pub fn skipped(&self) -> &[(PathBuf, AnnotationError)] {
        &self.skipped
    }

    /// Compares the dependency layers of two corpora by pairing sentences positionally
    /// and summing their scores. The corpora must have equal sentence counts.
    pub fn compare_parses(
        &self,
        corpus: &AnnotatedCorpus,
    ) -> AnnotationResult<ParserEvaluationScore> {
        if self.sentence_count() != corpus.sentence_count() {
            return Err(AnnotationError::CorpusMismatch(
                self.sentence_count(),
                corpus.sentence_count(),
            ));
        }
        let mut result = ParserEvaluationScore::new();
        for (sentence, other) in self.sentences.iter().zip(corpus.sentences.iter()) {
            result.add(&sentence.compare_parses(other));
        }
        Ok(result)
    }
}

impl Configurable for AnnotatedCorpus {
    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn set_config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }
}

#[sealed]
impl TypeInfo for AnnotatedCorpus {
    fn typeinfo() -> Type {
        Type::AnnotatedCorpus
    }
}
