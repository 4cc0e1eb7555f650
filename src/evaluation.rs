use serde::Serialize;

/// Accumulator of dependency-comparison outcomes. Counts correct labeled attachments,
/// correct unlabeled attachments and the total number of relations compared; words
/// skipped because one side lacks a dependency layer contribute nothing and can be
/// derived by the caller from its own word counts.
///
/// Scores start at zero, are only ever incremented by summation, and sum associatively:
/// word scores into a sentence score, sentence scores into a corpus score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParserEvaluationScore {
    labeled_correct: usize,
    unlabeled_correct: usize,
    total: usize,
}

impl ParserEvaluationScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outcome for a single compared word.
    pub fn of_word(labeled_correct: bool, unlabeled_correct: bool) -> Self {
        Self {
            labeled_correct: labeled_correct as usize,
            unlabeled_correct: unlabeled_correct as usize,
            total: 1,
        }
    }

    /// Sums another score into this one.
    pub fn add(&mut self, other: &ParserEvaluationScore) {
        self.labeled_correct += other.labeled_correct;
        self.unlabeled_correct += other.unlabeled_correct;
        self.total += other.total;
    }

    /// Number of compared words whose target and label both agreed.
    pub fn labeled_correct(&self) -> usize {
        self.labeled_correct
    }

    /// Number of compared words whose target agreed.
    pub fn unlabeled_correct(&self) -> usize {
        self.unlabeled_correct
    }

    /// Total number of relations compared.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Labeled attachment score: labeled hits over total, 0.0 when nothing was compared.
    pub fn labeled_attachment_score(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.labeled_correct as f64 / self.total as f64
        }
    }

    /// Unlabeled attachment score: unlabeled hits over total, 0.0 when nothing was compared.
    pub fn unlabeled_attachment_score(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.unlabeled_correct as f64 / self.total as f64
        }
    }
}
