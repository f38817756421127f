//! JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pressroom_core::error::{ContentError, StoreError};
use pressroom_github::GithubError;
use serde::Serialize;

/// The error payload as clients consume it.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// API-boundary error carrying the response status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<GithubError> for ApiError {
    fn from(err: GithubError) -> Self {
        let status = match &err {
            GithubError::RefConflict { .. } => StatusCode::CONFLICT,
            GithubError::NotAFile { .. } => StatusCode::BAD_REQUEST,
            GithubError::Fetch { source, .. }
                if matches!(**source, GithubError::Api { status: 404, .. }) =>
            {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self::bad_request(err.to_string())
    }
}
