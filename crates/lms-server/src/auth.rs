//! API key guard.
//!
//! Every item route sits behind [`require_api_key`]. Callers present the key
//! as `Authorization: Bearer <key>`; the comparison is constant time.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the bearer token from the `Authorization` header, if any.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Whether `presented` equals the configured key.
///
/// An empty configured key never matches.
#[must_use]
pub fn key_matches(configured: &str, presented: &str) -> bool {
    if configured.is_empty() {
        return false;
    }
    configured.as_bytes().ct_eq(presented.as_bytes()).into()
}

/// Reject the request with `401` unless it carries the configured API key.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the key is missing, wrong, or the
/// server has no key configured.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rejection = if state.api_key.is_empty() {
        Some("no API key configured")
    } else {
        match bearer_token(request.headers()) {
            Some(token) if key_matches(&state.api_key, token) => None,
            Some(_) => Some("invalid API key"),
            None => Some("missing API key"),
        }
    };

    if let Some(reason) = rejection {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason,
            "request rejected"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
