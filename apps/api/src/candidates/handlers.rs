//! Axum route handlers for `/api/candidates`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::candidates::validation::{validate_new_candidate, validate_patch, validate_review};
use crate::errors::AppError;
use crate::models::candidate::{
    Candidate, CandidateInput, CandidateListQuery, ReviewInput, SwipeCounter,
};
use crate::models::decode_payload;
use crate::state::AppState;

/// Ids that are not UUIDs cannot name a stored candidate, so they are reported as unknown.
fn parse_candidate_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Candidate {raw} not found")))
}

/// POST /api/candidates
pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    let Json(body) = body?;
    let input: CandidateInput = decode_payload(body)?;
    let candidate = validate_new_candidate(input)?;
    let created = state.candidates.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/candidates
///
/// `?email=` narrows the list to one person (the candidate dashboard lookup).
pub async fn handle_list(
    State(state): State<AppState>,
    params: Result<Query<CandidateListQuery>, QueryRejection>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let Query(params) = params?;
    let candidates = match params.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => state.candidates.find_by_email(email).await?,
        _ => state.candidates.list().await?,
    };
    Ok(Json(candidates))
}

/// GET /api/candidates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let id = parse_candidate_id(&id)?;
    Ok(Json(state.candidates.get(id).await?))
}

/// PUT /api/candidates/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Candidate>, AppError> {
    let Json(body) = body?;
    let id = parse_candidate_id(&id)?;
    let input: CandidateInput = decode_payload(body.clone())?;
    let patch = validate_patch(&body, input)?;
    Ok(Json(state.candidates.update(id, patch).await?))
}

/// PATCH /api/candidates/:id/rights
pub async fn handle_right_swipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let id = parse_candidate_id(&id)?;
    Ok(Json(
        state.candidates.increment_swipe(id, SwipeCounter::Right).await?,
    ))
}

/// PATCH /api/candidates/:id/lefts
pub async fn handle_left_swipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let id = parse_candidate_id(&id)?;
    Ok(Json(
        state.candidates.increment_swipe(id, SwipeCounter::Left).await?,
    ))
}

/// POST /api/candidates/:id/reviews
///
/// Accepts `{comment, swipe}` or the same object wrapped as `{review: {...}}`.
pub async fn handle_add_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Candidate>, AppError> {
    let Json(body) = body?;
    let id = parse_candidate_id(&id)?;
    let body = match body.get("review") {
        Some(inner @ Value::Object(_)) => inner.clone(),
        _ => body,
    };
    let input: ReviewInput = decode_payload(body)?;
    let review = validate_review(input)?;
    Ok(Json(state.candidates.append_review(id, review).await?))
}
