//! Document scoring
//!
//! Each distinct word shared with the spam vocabulary contributes
//! `ln(1 - p) - ln(p)` to an accumulated log-odds `n`; the document's spam
//! probability is `1 / (1 + e^n)`. A document sharing no words scores 0.5.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

use crate::corpus::{
    document_name, list_documents, read_document, CorpusLayout, CorpusReport, Label,
};
use crate::error::Result;
use crate::evaluate::SPAM_THRESHOLD;
use crate::model::TrainedModel;
use crate::tokenizer::tokenize;

/// Spam probability of one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub spam_probability: f64,
    /// Distinct words that were found in the spam vocabulary
    pub matched_words: usize,
}

impl Classification {
    pub fn is_spam(&self) -> bool {
        self.spam_probability >= SPAM_THRESHOLD
    }
}

/// A scored test document with its known label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    pub file: String,
    pub spam_probability: f64,
    pub actual_class: Label,
}

impl ScoredDocument {
    /// Whether the classifier called this document spam
    pub fn predicted_spam(&self) -> bool {
        self.spam_probability >= SPAM_THRESHOLD
    }
}

impl TrainedModel {
    /// Score an already tokenized document
    pub fn classify_words(&self, words: &BTreeSet<String>) -> Classification {
        let mut log_odds = 0.0_f64;
        let mut matched_words = 0;

        for word in words {
            if let Some(p) = self.spam_likelihood(word) {
                log_odds += (1.0 - p).ln() - p.ln();
                matched_words += 1;
            }
        }

        let spam_probability = 1.0 / (1.0 + log_odds.exp());
        debug_assert!(
            (0.0..=1.0).contains(&spam_probability),
            "spam probability {} from log-odds {}",
            spam_probability,
            log_odds
        );

        Classification {
            spam_probability,
            matched_words,
        }
    }

    /// Score raw document text
    pub fn classify_text(&self, text: &str) -> Classification {
        self.classify_words(&tokenize(text))
    }

    /// Spam probability of raw document text
    pub fn score_text(&self, text: &str) -> f64 {
        self.classify_text(text).spam_probability
    }
}

/// Scored test documents and per-file outcomes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestRun {
    pub results: Vec<ScoredDocument>,
    pub report: CorpusReport,
}

impl TestRun {
    /// Score every document in `dir`, labelling results with `label`
    pub fn score_directory(&mut self, model: &TrainedModel, dir: &Path, label: Label) -> Result<()> {
        let paths = list_documents(dir)?;
        debug!("Scoring {} {} documents from {}", paths.len(), label, dir.display());

        for path in paths {
            match read_document(&path) {
                Ok(text) => {
                    self.results.push(ScoredDocument {
                        file: document_name(&path),
                        spam_probability: model.score_text(&text),
                        actual_class: label,
                    });
                    self.report.processed += 1;
                }
                Err(e) => self.report.skip(path, e.to_string()),
            }
        }

        Ok(())
    }
}

/// Score the test half of the corpus: ham documents first, then spam
pub fn test_model(model: &TrainedModel, root: &Path, layout: &CorpusLayout) -> Result<TestRun> {
    let mut run = TestRun::default();
    for label in [Label::Ham, Label::Spam] {
        run.score_directory(model, &root.join(layout.test_dir(label)), label)?;
    }

    info!(
        "Scored {} test documents ({} skipped)",
        run.results.len(),
        run.report.skipped.len()
    );

    Ok(run)
}
