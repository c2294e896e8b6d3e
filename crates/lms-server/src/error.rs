//! # API Errors
//!
//! Maps store and extractor failures onto HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use lms_db::error::DatabaseError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, wrong, or unconfigured API key.
    #[error("missing or invalid API key")]
    Unauthorized,

    /// The request body is not valid JSON or does not fit the expected shape.
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// A path segment could not be parsed.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A query parameter could not be parsed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidBody { status, .. } => *status,
            Self::InvalidPath(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Database(err) => match err {
                DatabaseError::ItemNotFound(_) | DatabaseError::ParentNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                DatabaseError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(ErrorResponse {
            error: message,
            code: status.as_u16(),
        });
        let mut response = (status, body).into_response();
        if matches!(self, Self::Unauthorized) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::errors::{MappingError, ValidationError};

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Database(DatabaseError::ItemNotFound(3)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(DatabaseError::ParentNotFound(3)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(DatabaseError::Validation(ValidationError::EmptyTitle))
                .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InvalidPath("abc".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn mapping_failures_are_internal() {
        let err = ApiError::Database(DatabaseError::Mapping(MappingError::UnknownType {
            id: 4,
            item_type: "quiz".into(),
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_response_carries_challenge() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn body_status_is_preserved() {
        let err = ApiError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad".into(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
