//! Training corpus ingestion
//!
//! Walks the labeled training directories, tokenizes every document and
//! accumulates per-class document frequencies.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{DetectorError, Result};
use crate::tokenizer::tokenize;

/// Ground-truth class of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "Ham",
            Label::Spam => "Spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of distinct documents of one class that contain each word
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    counts: HashMap<String, u32>,
}

impl WordFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word of one document once
    pub fn record_document(&mut self, words: &BTreeSet<String>) {
        for word in words {
            *self.counts.entry(word.clone()).or_insert(0) += 1;
        }
    }

    /// Document frequency of a word (zero when never seen)
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// Number of training documents per class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrainingCorpusStats {
    pub ham_documents: u32,
    pub spam_documents: u32,
}

impl TrainingCorpusStats {
    pub fn documents(&self, label: Label) -> u32 {
        match label {
            Label::Ham => self.ham_documents,
            Label::Spam => self.spam_documents,
        }
    }
}

/// Directory layout of a labeled corpus, relative to its root
///
/// All ham training directories merge into one ham class, likewise for spam.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorpusLayout {
    #[serde(default = "default_train_ham")]
    pub train_ham: Vec<PathBuf>,
    #[serde(default = "default_train_spam")]
    pub train_spam: Vec<PathBuf>,
    #[serde(default = "default_test_ham")]
    pub test_ham: PathBuf,
    #[serde(default = "default_test_spam")]
    pub test_spam: PathBuf,
}

fn default_train_ham() -> Vec<PathBuf> {
    vec![PathBuf::from("train/ham"), PathBuf::from("train/ham2")]
}

fn default_train_spam() -> Vec<PathBuf> {
    vec![PathBuf::from("train/spam")]
}

fn default_test_ham() -> PathBuf {
    PathBuf::from("test/ham")
}

fn default_test_spam() -> PathBuf {
    PathBuf::from("test/spam")
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self {
            train_ham: default_train_ham(),
            train_spam: default_train_spam(),
            test_ham: default_test_ham(),
            test_spam: default_test_spam(),
        }
    }
}

impl CorpusLayout {
    /// Training directories for one class
    pub fn training_dirs(&self, label: Label) -> &[PathBuf] {
        match label {
            Label::Ham => &self.train_ham,
            Label::Spam => &self.train_spam,
        }
    }

    /// Test directory for one class
    pub fn test_dir(&self, label: Label) -> &Path {
        match label {
            Label::Ham => &self.test_ham,
            Label::Spam => &self.test_spam,
        }
    }

    /// Validate layout
    pub fn validate(&self) -> Result<()> {
        for label in [Label::Ham, Label::Spam] {
            if self.training_dirs(label).is_empty() {
                return Err(DetectorError::Config(format!(
                    "No {} training directories configured",
                    label
                )));
            }
        }
        Ok(())
    }
}

/// A document left out of training or testing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Per-file outcomes of one pass over a set of directories
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorpusReport {
    /// Documents read successfully
    pub processed: usize,
    /// Documents that could not be read
    pub skipped: Vec<SkippedFile>,
}

impl CorpusReport {
    pub(crate) fn skip(&mut self, path: PathBuf, reason: String) {
        warn!("Skipping {}: {}", path.display(), reason);
        self.skipped.push(SkippedFile { path, reason });
    }
}

/// Word counts gathered from the training directories
#[derive(Debug, Clone, Default)]
pub struct TrainingCorpus {
    pub ham: WordFrequencyTable,
    pub spam: WordFrequencyTable,
    pub stats: TrainingCorpusStats,
    pub report: CorpusReport,
}

impl TrainingCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the training half of the corpus rooted at `root`
    pub fn load(root: &Path, layout: &CorpusLayout) -> Result<Self> {
        layout.validate()?;

        let mut corpus = Self::new();
        for label in [Label::Ham, Label::Spam] {
            for dir in layout.training_dirs(label) {
                corpus.load_directory(&root.join(dir), label)?;
            }
            if corpus.stats.documents(label) == 0 {
                return Err(DetectorError::EmptyCorpus(label));
            }
        }

        info!(
            "Loaded training corpus: {} ham / {} spam documents, {} ham / {} spam words, {} skipped",
            corpus.stats.ham_documents,
            corpus.stats.spam_documents,
            corpus.ham.len(),
            corpus.spam.len(),
            corpus.report.skipped.len()
        );

        Ok(corpus)
    }

    /// Add one tokenized document to a class
    pub fn add_document(&mut self, label: Label, words: &BTreeSet<String>) {
        match label {
            Label::Ham => {
                self.ham.record_document(words);
                self.stats.ham_documents += 1;
            }
            Label::Spam => {
                self.spam.record_document(words);
                self.stats.spam_documents += 1;
            }
        }
    }

    /// Tokenize a document and add it to a class
    pub fn add_text(&mut self, label: Label, text: &str) {
        self.add_document(label, &tokenize(text));
    }

    /// Frequency table of one class
    pub fn table(&self, label: Label) -> &WordFrequencyTable {
        match label {
            Label::Ham => &self.ham,
            Label::Spam => &self.spam,
        }
    }

    fn load_directory(&mut self, dir: &Path, label: Label) -> Result<()> {
        let paths = list_documents(dir)?;
        if paths.is_empty() {
            return Err(DetectorError::EmptyDirectory(dir.to_path_buf()));
        }

        debug!("Reading {} {} documents from {}", paths.len(), label, dir.display());

        for path in paths {
            match read_document(&path) {
                Ok(text) => {
                    self.add_text(label, &text);
                    self.report.processed += 1;
                }
                Err(e) => self.report.skip(path, e.to_string()),
            }
        }

        Ok(())
    }
}

/// List the entries of a corpus directory in file-name order
pub(crate) fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DetectorError::MissingDirectory(dir.to_path_buf()));
    }

    let mut paths = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(|source| DetectorError::UnreadableDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

    paths.sort();
    Ok(paths)
}

/// Read a whole document, replacing invalid UTF-8 sequences
pub(crate) fn read_document(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// File name shown for a document
pub(crate) fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
