//! Axum route handlers for the dashboard insight endpoints.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::insights::generator::{InsightGenerator, ProfileSuggestions, ProfileSummary};
use crate::state::AppState;

/// Pulls `profile` out of `{profile: {...}}`; anything but an object is rejected.
fn take_profile(mut body: Value) -> Result<Value, AppError> {
    match body.get_mut("profile").map(Value::take) {
        Some(profile @ Value::Object(_)) => Ok(profile),
        _ => Err(AppError::Validation(
            "profile must be a candidate object".to_string(),
        )),
    }
}

fn insight_generator(state: &AppState) -> InsightGenerator<'_> {
    InsightGenerator::new(
        state.llm.as_ref(),
        Duration::from_secs(state.config.llm_timeout_secs),
    )
}

/// POST /summariseProfile
pub async fn handle_summarise(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProfileSummary>, AppError> {
    let Json(body) = body?;
    let profile = take_profile(body)?;
    Ok(Json(insight_generator(&state).summarize(&profile).await?))
}

/// POST /suggestProfile
pub async fn handle_suggest(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProfileSuggestions>, AppError> {
    let Json(body) = body?;
    let profile = take_profile(body)?;
    Ok(Json(insight_generator(&state).suggest(&profile).await?))
}
