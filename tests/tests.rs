use annosent::*;

mod common;
use common::FixtureFramesets;

fn all_sentences() -> Vec<AnnotatedSentence> {
    (0..10)
        .map(|i| common::load_sentence(&format!("{:04}.dev", i)))
        .collect()
}

#[test]
fn shallow_parse_group_counts() {
    let expected = [4, 5, 3, 2, 4, 3, 4, 4, 3, 3];
    for (sentence, expected) in all_sentences().iter().zip(expected) {
        let groups = sentence.shallow_parse_groups();
        assert_eq!(groups.len(), expected);
        // the groups partition the sentence in order
        let total: usize = groups.iter().map(|g| g.word_count()).sum();
        assert_eq!(total, sentence.word_count());
        let mut index = 0;
        for group in &groups {
            assert_eq!(group.word_index(), index);
            index += group.word_count();
        }
    }
}

#[test]
fn contains_predicate_per_sentence() {
    let expected = [
        true, true, false, true, true, false, false, true, true, true,
    ];
    for (sentence, expected) in all_sentences().iter().zip(expected) {
        assert_eq!(sentence.contains_predicate(), expected);
    }
}

#[test]
fn contains_frame_predicate_per_sentence() {
    for (i, sentence) in all_sentences().iter().enumerate() {
        assert_eq!(sentence.contains_frame_predicate(), i == 6);
    }
}

#[test]
fn predicate_candidate_counts() {
    let framesets = FixtureFramesets::new();
    let expected = [1, 1, 0, 2, 1, 0, 0, 1, 1, 2];
    for (sentence, expected) in all_sentences().iter().zip(expected) {
        assert_eq!(sentence.predicate_candidates(&framesets).len(), expected);
        // the frame-lexicon variant only differs in the membership test
        assert_eq!(
            sentence.predicate_frame_candidates(&framesets).len(),
            expected
        );
        assert!(sentence
            .predicate_candidates(&FixtureFramesets::empty())
            .is_empty());
    }
}

#[test]
fn multiword_candidates_keep_qualification_order() {
    let framesets = FixtureFramesets::new();
    let sentence = common::load_sentence("0009.dev");
    let names: Vec<&str> = sentence
        .predicate_candidates(&framesets)
        .iter()
        .map(|w| w.name())
        .collect();
    assert_eq!(names, vec!["etti", "devam"]);
}

#[test]
fn nearest_verb_predicates() {
    let sentences = all_sentences();
    assert_eq!(sentences[0].predicate(0), "tanıttı");
    assert_eq!(sentences[1].predicate(0), "yapacak");
    assert_eq!(sentences[3].predicate(0), "edildi");
    assert_eq!(sentences[4].predicate(0), "yazmıştı");
    assert_eq!(sentences[7].predicate(0), "düşünmüştü");
    assert_eq!(sentences[9].predicate(0), "etti");
    // the only verb sits at position 0
    assert_eq!(sentences[8].predicate(0), "Gerekiyordu");
    // no verb at all resolves to the first word
    assert_eq!(sentences[5].predicate(0), "Bu");
    assert_eq!(sentences[2].predicate(0), "Reklam");
    // out of range
    assert_eq!(sentences[0].predicate(100), "");
}

#[test]
fn stems() {
    let sentences = all_sentences();
    assert_eq!(
        sentences[0].to_stems(),
        "büyük şirket yeni ürün dün tanıt"
    );
    assert_eq!(sentences[3].to_stems(), "bu karar kabul et");
    assert_eq!(sentences[9].to_stems(), "fon reklam devam et");
    // no morphological parses at all: the surface forms pass through unchanged
    assert_eq!(
        sentences[2].to_stems(),
        "Reklam ve tanıtım işleri görüşüldü ."
    );
    assert_eq!(sentences[2].to_stems(), sentences[2].to_words());
}

#[test]
fn file_roundtrip_is_canonical() {
    for i in 0..10 {
        let name = format!("{:04}.dev", i);
        let raw = std::fs::read_to_string(format!("{}/{}", common::sentences_dir(), name))
            .expect("fixture file is readable");
        let line = raw.lines().next().expect("fixture file has a line");
        let sentence = common::load_sentence(&name);
        assert_eq!(sentence.to_string(), line);
    }
}

#[test]
fn word_removal_renumbers_fixture() -> Result<(), AnnotationError> {
    let mut sentence = common::load_sentence("0007.dev");
    sentence.remove_word(2)?;
    assert_eq!(sentence.word_count(), 4);
    let relation = |i: usize| {
        sentence
            .word(i)
            .and_then(|w| w.universal_dependency())
            .map(|r| (r.to(), r.dependency_type().to_string()))
    };
    assert_eq!(relation(0), Some((4, "NSUBJ".to_string())));
    // pointed at the removed word
    assert_eq!(relation(1), None);
    assert_eq!(relation(2), Some((4, "OBJ".to_string())));
    assert_eq!(relation(3), Some((0, "ROOT".to_string())));
    Ok(())
}

#[test]
fn corpus_load_with_pattern() -> Result<(), AnnotationError> {
    let corpus =
        AnnotatedCorpus::from_folder_with_pattern(&common::sentences_dir(), ".dev", Config::default())?;
    assert_eq!(corpus.sentence_count(), 10);
    assert!(corpus.skipped().is_empty());
    assert_eq!(corpus.sentence(0).map(|s| s.word_count()), Some(6));
    Ok(())
}

#[test]
fn corpus_load_reports_skipped_files() -> Result<(), AnnotationError> {
    let corpus = AnnotatedCorpus::from_folder(&common::sentences_dir(), Config::default())?;
    assert_eq!(corpus.sentence_count(), 10);
    assert_eq!(corpus.skipped().len(), 1);
    let (path, error) = &corpus.skipped()[0];
    assert!(path.to_string_lossy().ends_with("9999.broken"));
    assert!(matches!(
        error,
        AnnotationError::MalformedLayerValue("universalDependency", _, _)
    ));
    Ok(())
}

#[test]
fn corpus_comparison_against_itself() -> Result<(), AnnotationError> {
    let dir = common::sentences_dir();
    let corpus1 = AnnotatedCorpus::from_folder_with_pattern(&dir, ".dev", Config::default())?;
    let corpus2 = AnnotatedCorpus::from_folder_with_pattern(&dir, ".dev", Config::default())?;
    let score = corpus1.compare_parses(&corpus2)?;
    // every fixture word carrying a relation compares correct against itself
    assert_eq!(score.total(), 36);
    assert_eq!(score.labeled_correct(), 36);
    assert_eq!(score.unlabeled_correct(), 36);
    assert_eq!(score.labeled_attachment_score(), 1.0);
    assert_eq!(score.unlabeled_attachment_score(), 1.0);
    Ok(())
}

#[test]
fn sentence_comparison_with_divergent_labels() -> Result<(), AnnotationError> {
    let gold = common::load_sentence("0004.dev");
    let mut system = gold.clone();
    if let Some(word) = system.word_mut(1) {
        // same head, different label
        word.set_universal_dependency(4, "OBL");
    }
    let score = gold.compare_parses(&system);
    assert_eq!(score.total(), 4);
    assert_eq!(score.unlabeled_correct(), 4);
    assert_eq!(score.labeled_correct(), 3);
    Ok(())
}

#[test]
fn json_export_and_config_roundtrip() -> Result<(), AnnotationError> {
    let dir = std::env::temp_dir();

    let config_path = dir.join("annosent_test_config.json");
    let config_filename = config_path.to_str().expect("temp path is unicode");
    Config::default()
        .with_debug(true)
        .to_json_file(config_filename, &Config::default())?;
    let loaded = Config::from_file(config_filename)?;
    assert!(loaded.debug());

    let sentence_path = dir.join("annosent_test_sentence.json");
    let sentence_filename = sentence_path.to_str().expect("temp path is unicode");
    let sentence = common::load_sentence("0008.dev");
    sentence.to_json_file(sentence_filename, &Config::default())?;
    let raw = std::fs::read_to_string(&sentence_path)
        .map_err(|e| AnnotationError::IOError(e, sentence_filename.to_string(), "read back"))?;
    assert!(raw.contains("\"turkish\": \"Gerekiyordu\""));
    assert!(raw.contains("\"universalDependency\": \"0$ROOT\""));
    Ok(())
}
