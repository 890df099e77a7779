pub mod candidate;
pub mod hr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// Decodes a JSON request body, reporting shape errors as validation failures (400)
/// rather than Axum's default 422 rejection.
pub fn decode_payload<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}
