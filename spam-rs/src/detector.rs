//! End-to-end pipeline: load, estimate, score

use std::path::Path;
use tracing::info;

use crate::corpus::{CorpusLayout, CorpusReport, TrainingCorpus};
use crate::error::Result;
use crate::evaluate::Evaluation;
use crate::model::TrainedModel;
use crate::scorer::{test_model, ScoredDocument, TestRun};

/// Trains on a labeled corpus and scores its test documents
#[derive(Debug, Clone, Default)]
pub struct SpamDetector {
    layout: CorpusLayout,
}

/// Everything one pipeline run produced
#[derive(Debug, Clone)]
pub struct DetectionRun {
    pub model: TrainedModel,
    /// Ham test documents first, then spam, each in file-name order
    pub results: Vec<ScoredDocument>,
    pub training: CorpusReport,
    pub testing: CorpusReport,
}

impl DetectionRun {
    pub fn evaluation(&self) -> Evaluation {
        Evaluation::from_results(&self.results)
    }
}

impl SpamDetector {
    /// Create a detector using the default corpus layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector for a custom corpus layout
    pub fn with_layout(layout: CorpusLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &CorpusLayout {
        &self.layout
    }

    /// Train on `root`'s training directories and score its test directories
    pub fn run(&self, root: &Path) -> Result<DetectionRun> {
        info!("Training spam model from {}", root.display());

        let corpus = TrainingCorpus::load(root, &self.layout)?;
        let model = TrainedModel::train(&corpus);
        let TestRun { results, report } = test_model(&model, root, &self.layout)?;

        let run = DetectionRun {
            model,
            results,
            training: corpus.report,
            testing: report,
        };

        let evaluation = run.evaluation();
        info!(
            "Evaluated {} documents: accuracy {:.4}, precision {:.4}",
            evaluation.total,
            evaluation.accuracy(),
            evaluation.precision()
        );

        Ok(run)
    }
}

/// Train on the default layout under `root` and return the scored test documents
pub fn train_and_test(root: impl AsRef<Path>) -> Result<Vec<ScoredDocument>> {
    Ok(SpamDetector::new().run(root.as_ref())?.results)
}
