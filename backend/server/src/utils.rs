use axum::{Json, extract::rejection::JsonRejection};
use bank::{FoodInput, NewFood};
use tracing::warn;

use crate::error::AppError;

/// Turns a create/update body into a record the store will accept.
///
/// Undecodable JSON (wrong content type, syntax, a number where a string
/// belongs) is a malformed payload; a missing or blank field is a validation
/// failure. Either way the store is never reached.
pub fn parse_food(payload: Result<Json<FoodInput>, JsonRejection>) -> Result<NewFood, AppError> {
    let Json(input) = payload.map_err(|e| {
        warn!("Rejected food payload: {e}");

        AppError::MalformedPayload
    })?;

    Ok(input.validate()?)
}
