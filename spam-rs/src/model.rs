//! Probability estimation
//!
//! Turns per-class document frequencies into Laplace-smoothed word
//! likelihoods, then combines them into the per-word spam likelihood the
//! scorer consumes. Only words seen in spam training documents receive a
//! combined likelihood; ham-only words are never scored.

use std::collections::HashMap;
use tracing::info;

use crate::corpus::{Label, TrainingCorpus, TrainingCorpusStats, WordFrequencyTable};

/// Word to probability mapping
pub type WordProbability = HashMap<String, f64>;

/// Add-one smoothed probability that a document of a class contains a word
pub fn smoothed_probability(count: u32, documents: u32) -> f64 {
    (f64::from(count) + 1.0) / (f64::from(documents) + 2.0)
}

/// Immutable model produced from a training corpus
#[derive(Debug, Clone)]
pub struct TrainedModel {
    ham_probability: WordProbability,
    spam_probability: WordProbability,
    spam_likelihood: WordProbability,
    stats: TrainingCorpusStats,
}

impl TrainedModel {
    /// Estimate all word probabilities from a loaded corpus
    pub fn train(corpus: &TrainingCorpus) -> Self {
        let ham_probability = conditional(&corpus.ham, corpus.stats.ham_documents);
        let spam_probability = conditional(&corpus.spam, corpus.stats.spam_documents);

        let spam_likelihood: WordProbability = spam_probability
            .iter()
            .map(|(word, &p_spam)| {
                let p_ham = ham_probability.get(word).copied().unwrap_or(0.0);
                (word.clone(), p_spam / (p_spam + p_ham))
            })
            .collect();

        info!(
            "Estimated probabilities for {} ham / {} spam words",
            ham_probability.len(),
            spam_likelihood.len()
        );

        Self {
            ham_probability,
            spam_probability,
            spam_likelihood,
            stats: corpus.stats,
        }
    }

    /// Smoothed P(word | class), `None` when the word never occurred in that class
    pub fn conditional_probability(&self, word: &str, label: Label) -> Option<f64> {
        let table = match label {
            Label::Ham => &self.ham_probability,
            Label::Spam => &self.spam_probability,
        };
        table.get(word).copied()
    }

    /// Combined spam likelihood of a word, `None` outside the spam vocabulary
    pub fn spam_likelihood(&self, word: &str) -> Option<f64> {
        self.spam_likelihood.get(word).copied()
    }

    /// All combined spam likelihoods
    pub fn spam_likelihoods(&self) -> &WordProbability {
        &self.spam_likelihood
    }

    /// Document totals the model was trained on
    pub fn stats(&self) -> TrainingCorpusStats {
        self.stats
    }
}

fn conditional(table: &WordFrequencyTable, documents: u32) -> WordProbability {
    table
        .iter()
        .map(|(word, count)| {
            let probability = smoothed_probability(count, documents);
            debug_assert!(
                probability > 0.0 && probability < 1.0,
                "P({}) = {} outside (0, 1)",
                word,
                probability
            );
            (word.to_string(), probability)
        })
        .collect()
}
