//! The three scheme guards.
//!
//! Each guard performs at most one store lookup and answers `Ok(())` to let
//! the request through. Store failures are logged and replaced by a fixed
//! message so raw database errors never reach the caller.

use serde_json::Value;

use crate::error::AppError;
use crate::repositories::SchemeRepositoryTrait;
use crate::types::SchemeId;
use crate::validation::rules::{validate_instructions, validate_scheme_name, validate_step_number};

const SCHEME_ID_LOOKUP_FAILED: &str = "An error occured while checking scheme_id";
const SCHEME_NAME_LOOKUP_FAILED: &str = "Server error while validating scheme_name";
const STEP_NUMBER_LOOKUP_FAILED: &str = "Server error while validating step_number";
const INVALID_SCHEME_NAME: &str = "invalid scheme_name";
const INVALID_STEP: &str = "invalid step";

fn scheme_not_found(raw_id: &str) -> AppError {
    AppError::NotFound(format!("scheme with scheme_id {} not found", raw_id))
}

/// Ensures the scheme referenced by the `scheme_id` path parameter exists.
///
/// An id that is not an integer cannot name any scheme and is answered with
/// 404 without touching the store.
pub async fn check_scheme_id(
    schemes: &dyn SchemeRepositoryTrait,
    raw_id: &str,
) -> Result<(), AppError> {
    let Ok(scheme_id) = raw_id.parse::<SchemeId>() else {
        tracing::debug!(scheme_id = raw_id, "Rejected non-numeric scheme_id");
        return Err(scheme_not_found(raw_id));
    };

    match schemes.find_scheme_by_id(scheme_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => {
            tracing::debug!(%scheme_id, "Scheme not found");
            Err(scheme_not_found(raw_id))
        }
        Err(err) => {
            tracing::warn!(%scheme_id, error = ?err, "Failed to look up scheme");
            Err(AppError::internal(SCHEME_ID_LOOKUP_FAILED, err))
        }
    }
}

/// Validates a scheme payload: `scheme_name` must be a non-blank string not
/// already used by another scheme.
pub async fn validate_scheme(
    schemes: &dyn SchemeRepositoryTrait,
    body: &Value,
) -> Result<(), AppError> {
    let scheme_name = validate_scheme_name(body.get("scheme_name")).map_err(|err| {
        tracing::debug!(code = %err.code, "Rejected scheme payload");
        AppError::BadRequest(INVALID_SCHEME_NAME.to_string())
    })?;

    let existing = schemes
        .find_schemes_by_name(scheme_name.trim())
        .await
        .map_err(|err| {
            tracing::warn!(scheme_name, error = ?err, "Failed to look up scheme_name");
            AppError::internal(SCHEME_NAME_LOOKUP_FAILED, err)
        })?;

    if !existing.is_empty() {
        return Err(AppError::Conflict(format!(
            "Duplicate scheme_name: \"{}\" found in database",
            scheme_name
        )));
    }
    Ok(())
}

/// Validates a step payload: `instructions` must be a non-blank string and
/// `step_number` an integer of at least one that no existing step uses.
pub async fn validate_step(
    schemes: &dyn SchemeRepositoryTrait,
    body: &Value,
) -> Result<(), AppError> {
    let step_number = validate_instructions(body.get("instructions"))
        .and_then(|_| validate_step_number(body.get("step_number")))
        .map_err(|err| {
            tracing::debug!(code = %err.code, "Rejected step payload");
            AppError::BadRequest(INVALID_STEP.to_string())
        })?;

    let existing = schemes
        .find_steps_by_number(step_number)
        .await
        .map_err(|err| {
            tracing::warn!(step_number, error = ?err, "Failed to look up step_number");
            AppError::internal(STEP_NUMBER_LOOKUP_FAILED, err)
        })?;

    if !existing.is_empty() {
        return Err(AppError::Conflict(format!(
            "Duplicate step_number \"{}\" found in database",
            step_number
        )));
    }
    Ok(())
}
