use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use github_contrib::GithubClient;

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("GitHub token is not set")]
    MissingGithubToken,
}

impl IntoResponse for AppStateError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingGithubToken => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    github_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(github_token: Option<String>) -> Self {
        Self {
            github_token: github_token
                .filter(|token| !token.is_empty())
                .map(Arc::from),
        }
    }

    /// Reads `GITHUB_TOKEN`. A missing token is not fatal at startup; it
    /// surfaces per request as a configuration error.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GITHUB_TOKEN").ok())
    }

    pub fn github_client(&self) -> Result<GithubClient, AppStateError> {
        self.github_token
            .as_deref()
            .map(GithubClient::new)
            .ok_or(AppStateError::MissingGithubToken)
    }
}
