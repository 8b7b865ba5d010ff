use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use github_contrib::GithubFetchError;
use strava::StravaFetchError;

use crate::app_state::AppStateError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AppStateError> for ApiError {
    fn from(err: AppStateError) -> Self {
        match err {
            AppStateError::MissingGithubToken => Self::internal(err.to_string()),
        }
    }
}

// Upstream detail is logged, never returned to the caller.
impl From<GithubFetchError> for ApiError {
    fn from(err: GithubFetchError) -> Self {
        tracing::error!("GitHub contributions fetch failed: {}", err);
        Self::internal("Failed to fetch GitHub contributions")
    }
}

impl From<StravaFetchError> for ApiError {
    fn from(err: StravaFetchError) -> Self {
        match err {
            StravaFetchError::Unauthorized => Self::unauthorized("Strava authorization expired"),
            _ => {
                tracing::error!("Strava activity fetch failed: {}", err);
                Self::internal("Failed to fetch Strava activities")
            }
        }
    }
}
