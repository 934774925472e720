//! Shared application state
//!
//! Holds the single pipeline run for the process. The first caller trains
//! on a blocking thread; concurrent callers wait for that same run.

use spam_rs::{DetectionRun, SpamDetector};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::{Result, ServiceError};

pub struct AppState {
    config: ApiConfig,
    detector: SpamDetector,
    run: OnceCell<Arc<DetectionRun>>,
}

impl AppState {
    /// Create state for a configuration; nothing is trained yet
    pub fn new(config: ApiConfig) -> Self {
        let detector = SpamDetector::with_layout(config.corpus.layout.clone());
        Self {
            config,
            detector,
            run: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Whether the pipeline has completed
    pub fn is_trained(&self) -> bool {
        self.run.initialized()
    }

    /// Pipeline output, training and testing on first use
    ///
    /// A failed run is not cached; the next call tries again.
    pub async fn detection(&self) -> Result<Arc<DetectionRun>> {
        let detector = self.detector.clone();
        let root = self.config.corpus.data_dir.clone();

        self.run
            .get_or_try_init(|| async move {
                info!("Training and testing the model, please wait");
                let run = tokio::task::spawn_blocking(move || detector.run(&root))
                    .await
                    .map_err(|e| ServiceError::Task(e.to_string()))??;
                Ok::<_, ServiceError>(Arc::new(run))
            })
            .await
            .cloned()
    }
}
