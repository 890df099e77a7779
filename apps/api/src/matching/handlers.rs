//! Axum route handler for candidate filtering.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::evaluator::FitEvaluator;
use crate::models::candidate::Candidate;
use crate::models::decode_payload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub results: Vec<Candidate>,
}

/// POST /evaluate
///
/// Judges every stored candidate against the HR message and returns the fits.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(body) = body?;
    let request: EvaluateRequest = decode_payload(body)?;
    let message = request
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("message cannot be empty".to_string()))?;

    let candidates = state.candidates.list().await?;

    let evaluator = FitEvaluator::new(
        state.llm.as_ref(),
        Duration::from_secs(state.config.llm_timeout_secs),
        state.config.evaluate_concurrency,
    );
    let results = evaluator.evaluate(&message, candidates).await?;

    Ok(Json(EvaluateResponse { results }))
}
