//! API request handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use spam_rs::{Evaluation, ScoredDocument, SkippedFile};
use std::sync::Arc;

use crate::error::Result;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub trained: bool,
}

/// Scalar metric response
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricResponse {
    pub val: f64,
}

/// Classification request body
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// Classification of an ad-hoc message
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub spam_probability: f64,
    pub is_spam: bool,
    pub matched_words: usize,
}

/// Full evaluation report
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub accuracy: f64,
    pub precision: f64,
    pub evaluation: Evaluation,
    pub ham_training_documents: u32,
    pub spam_training_documents: u32,
    pub skipped_training_files: Vec<SkippedFile>,
    pub skipped_test_files: Vec<SkippedFile>,
}

/// GET /health - Liveness and training status
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        trained: state.is_trained(),
    })
}

/// GET /api/spam - Scored test documents, ham first
pub async fn spam_results(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ScoredDocument>>> {
    let run = state.detection().await?;
    Ok(Json(run.results.clone()))
}

/// GET /api/spam/accuracy
pub async fn accuracy(State(state): State<Arc<AppState>>) -> Result<Json<MetricResponse>> {
    let run = state.detection().await?;
    Ok(Json(MetricResponse {
        val: run.evaluation().accuracy(),
    }))
}

/// GET /api/spam/precision
pub async fn precision(State(state): State<Arc<AppState>>) -> Result<Json<MetricResponse>> {
    let run = state.detection().await?;
    Ok(Json(MetricResponse {
        val: run.evaluation().precision(),
    }))
}

/// GET /api/spam/report - Metrics, confusion counts and skipped files
pub async fn report(State(state): State<Arc<AppState>>) -> Result<Json<ReportResponse>> {
    let run = state.detection().await?;
    let evaluation = run.evaluation();
    let stats = run.model.stats();

    Ok(Json(ReportResponse {
        accuracy: evaluation.accuracy(),
        precision: evaluation.precision(),
        evaluation,
        ham_training_documents: stats.ham_documents,
        spam_training_documents: stats.spam_documents,
        skipped_training_files: run.training.skipped.clone(),
        skipped_test_files: run.testing.skipped.clone(),
    }))
}

/// POST /api/spam/classify - Score a message against the trained model
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>> {
    let run = state.detection().await?;
    let classification = run.model.classify_text(&req.text);

    Ok(Json(ClassifyResponse {
        spam_probability: classification.spam_probability,
        is_spam: classification.is_spam(),
        matched_words: classification.matched_words,
    }))
}
