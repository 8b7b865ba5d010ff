use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    domain::{Activity, ActivityWindow},
    StravaUrl,
};

pub const ACTIVITIES_PER_PAGE: usize = 100;

/// Hard stop for the pagination loop. Strava normally terminates with an
/// empty page; the cap keeps a misbehaving upstream from driving unbounded
/// iteration.
pub const MAX_ACTIVITY_PAGES: usize = 20;

pub struct StravaClient {
    access_token: String,
    base_url: StravaUrl,
}

impl StravaClient {
    /// The access token comes out of the external OAuth flow; this client
    /// only attaches it as a bearer credential.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: StravaUrl::from_env(),
        }
    }

    pub fn with_base_url(access_token: impl Into<String>, base_url: StravaUrl) -> Self {
        Self {
            access_token: access_token.into(),
            base_url,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, StravaFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| StravaFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(StravaFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(StravaFetchError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            StravaFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// One page of `GET /athlete/activities`, filtered to the window.
    pub async fn fetch_activities_page(
        &self,
        window: &ActivityWindow,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<Activity>, StravaFetchError> {
        let url = self
            .base_url
            .append_path("/athlete/activities")
            .with_query("after", window.after_epoch())
            .with_query("before", window.before_epoch())
            .with_query("per_page", per_page)
            .with_query("page", page);

        self.fetch(url).await
    }

    /// Every activity in the window, requested page by page until the first
    /// empty page (or the `MAX_ACTIVITY_PAGES` cap). A failed page aborts the
    /// whole fetch; no partial list is returned. Upstream order is preserved.
    pub async fn fetch_activities(
        &self,
        window: &ActivityWindow,
    ) -> Result<Vec<Activity>, StravaFetchError> {
        let mut all_activities = Vec::new();

        for page in 1..=MAX_ACTIVITY_PAGES {
            let batch = self
                .fetch_activities_page(window, page, ACTIVITIES_PER_PAGE)
                .await?;

            if batch.is_empty() {
                break;
            }

            tracing::debug!("fetched {} activities from page {}", batch.len(), page);
            all_activities.extend(batch);
        }

        Ok(all_activities)
    }
}

#[derive(Error, Debug)]
pub enum StravaFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
