//! Accuracy and precision over scored test documents

use serde::Serialize;

use crate::corpus::Label;
use crate::scorer::ScoredDocument;

/// Probability at or above which a document counts as spam
pub const SPAM_THRESHOLD: f64 = 0.5;

/// Confusion counts of a scored test set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub total: usize,
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl Evaluation {
    /// Tally predictions against ground truth
    pub fn from_results(results: &[ScoredDocument]) -> Self {
        let mut evaluation = Self {
            total: results.len(),
            ..Self::default()
        };

        for doc in results {
            match (doc.actual_class, doc.predicted_spam()) {
                (Label::Spam, true) => evaluation.true_positives += 1,
                (Label::Spam, false) => evaluation.false_negatives += 1,
                (Label::Ham, true) => evaluation.false_positives += 1,
                (Label::Ham, false) => evaluation.true_negatives += 1,
            }
        }

        evaluation
    }

    /// Share of correct predictions, 0.0 for an empty test set
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / self.total as f64
    }

    /// Share of spam predictions that were spam, 0.0 when nothing was predicted spam
    pub fn precision(&self) -> f64 {
        let predicted_spam = self.true_positives + self.false_positives;
        if predicted_spam == 0 {
            return 0.0;
        }
        self.true_positives as f64 / predicted_spam as f64
    }
}
