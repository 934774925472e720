//! spam-rs: Naive-Bayes spam detector
//!
//! Trains a word-presence model on a labeled directory corpus and scores
//! held-out documents with a spam probability.
//!
//! # Pipeline
//!
//! - **Load**: every training document becomes a set of distinct lowercase
//!   words; per-class document frequencies are accumulated.
//! - **Estimate**: `P(word | class) = (count + 1) / (documents + 2)`, and for
//!   each spam word `P(w|spam) / (P(w|spam) + P(w|ham))`.
//! - **Score**: log-odds summed over shared words, mapped back through a
//!   logistic to a probability.
//! - **Evaluate**: accuracy and precision at a 0.5 threshold.
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::{Evaluation, SpamDetector};
//! use std::path::Path;
//!
//! fn main() -> spam_rs::Result<()> {
//!     let run = SpamDetector::new().run(Path::new("data"))?;
//!     for doc in &run.results {
//!         println!("{} {:.3} {}", doc.file, doc.spam_probability, doc.actual_class);
//!     }
//!     let evaluation = Evaluation::from_results(&run.results);
//!     println!("accuracy {:.3}", evaluation.accuracy());
//!     Ok(())
//! }
//! ```
//!
//! # Corpus layout
//!
//! ```text
//! <root>/train/ham/*   <root>/train/ham2/*   <root>/train/spam/*
//! <root>/test/ham/*    <root>/test/spam/*
//! ```

pub mod corpus;
pub mod detector;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod scorer;
pub mod tokenizer;

pub use corpus::{CorpusLayout, CorpusReport, Label, SkippedFile, TrainingCorpus};
pub use detector::{train_and_test, DetectionRun, SpamDetector};
pub use error::{DetectorError, Result};
pub use evaluate::{Evaluation, SPAM_THRESHOLD};
pub use model::TrainedModel;
pub use scorer::{Classification, ScoredDocument};
