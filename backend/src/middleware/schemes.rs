//! Axum middleware wrapping the scheme guards.
//!
//! Attach with `axum::middleware::from_fn_with_state(state, ...)` as a route
//! layer. A rejected request is answered with the guard's error; an accepted
//! one reaches the next handler untouched, body included.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::AppError, state::AppState, validation::guards};

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Deserialize)]
pub struct SchemeIdParams {
    pub scheme_id: String,
}

pub async fn check_scheme_id(
    State(state): State<AppState>,
    Path(params): Path<SchemeIdParams>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    guards::check_scheme_id(state.schemes.as_ref(), &params.scheme_id).await?;
    Ok(next.run(request).await)
}

pub async fn validate_scheme(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (request, body) = buffer_json_body(request).await;
    guards::validate_scheme(state.schemes.as_ref(), &body).await?;
    Ok(next.run(request).await)
}

pub async fn validate_step(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (request, body) = buffer_json_body(request).await;
    guards::validate_step(state.schemes.as_ref(), &body).await?;
    Ok(next.run(request).await)
}

/// Reads the request body as JSON and rebuilds the request around the same
/// bytes. Unreadable or non-JSON bodies parse as `Value::Null`.
async fn buffer_json_body(request: Request) -> (Request, Value) {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = ?err, "Failed to buffer request body");
            Bytes::new()
        }
    };
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (Request::from_parts(parts, Body::from(bytes)), value)
}
