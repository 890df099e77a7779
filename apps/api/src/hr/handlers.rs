//! Axum route handlers for `/api/hr`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::decode_payload;
use crate::models::hr::{HrAccount, HrAccountInput, HrLookupQuery, NewHrAccount};
use crate::state::AppState;

fn validate_hr_account(input: HrAccountInput) -> Result<NewHrAccount, AppError> {
    let required = |field: &str, value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Validation(format!("{field} is required")))
    };

    let email = required("email", input.email)?;
    if !email.contains('@') {
        return Err(AppError::Validation(format!("'{email}' is not an email address")));
    }

    Ok(NewHrAccount {
        name: required("name", input.name)?,
        email,
        company_name: required("companyName", input.company_name)?,
    })
}

/// POST /api/hr
pub async fn handle_create_hr(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<HrAccount>), AppError> {
    let Json(body) = body?;
    let input: HrAccountInput = decode_payload(body)?;
    let account = validate_hr_account(input)?;
    let created = state.hr.create(account).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/hr?email=
pub async fn handle_find_hr(
    State(state): State<AppState>,
    params: Result<Query<HrLookupQuery>, QueryRejection>,
) -> Result<Json<HrAccount>, AppError> {
    let Query(params) = params?;
    let email = params.email.as_deref().map(str::trim).unwrap_or_default();
    if email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    state
        .hr
        .find_by_email(email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No HR account for {email}")))
}
