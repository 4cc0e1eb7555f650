#![allow(dead_code)]
use annosent::*;
use std::collections::HashSet;

pub const CARGO_MANIFEST_DIR: &'static str = env!("CARGO_MANIFEST_DIR");

pub fn sentences_dir() -> String {
    format!("{}/tests/sentences", CARGO_MANIFEST_DIR)
}

pub fn load_sentence(name: &str) -> AnnotatedSentence {
    AnnotatedSentence::from_file(
        &format!("{}/{}", sentences_dir(), name),
        &Config::default(),
    )
    .expect("fixture sentence loads")
}

/// The frameset/framenet ids the fixture corpus annotates predicates with.
pub struct FixtureFramesets(HashSet<String>);

impl FixtureFramesets {
    pub fn new() -> Self {
        Self(
            [
                "TUR10-0148580",
                "TUR10-0166557",
                "TUR10-0797380",
                "TUR10-0483950",
            ]
            .iter()
            .map(|id| id.to_string())
            .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(HashSet::new())
    }
}

impl FramesetIndex for FixtureFramesets {
    fn frame_exists(&self, synset_id: &str) -> bool {
        self.0.contains(synset_id)
    }
}

impl FrameLexicon for FixtureFramesets {
    fn lexical_unit_exists(&self, synset_id: &str) -> bool {
        self.0.contains(synset_id)
    }
}
