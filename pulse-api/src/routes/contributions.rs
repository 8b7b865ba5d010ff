use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Days, Months, NaiveDate, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsQuery {
    github_username: Option<String>,
}

/// `GET /api/githubContributions?githubUsername=<login>`
///
/// Returns the user's trailing-year contribution calendar as a flat
/// `date -> count` JSON object.
#[instrument(name = "GET /api/githubContributions", skip(app_state))]
pub async fn github_contributions(
    State(app_state): State<AppState>,
    Query(query): Query<ContributionsQuery>,
) -> Result<Json<BTreeMap<NaiveDate, u32>>, ApiError> {
    let username = query
        .github_username
        .as_deref()
        .map(str::trim)
        .filter(|username| !username.is_empty())
        .ok_or_else(|| ApiError::bad_request("GitHub username is required"))?;

    let client = app_state.github_client()?;

    let to = Utc::now();
    let from = to
        .checked_sub_months(Months::new(12))
        .unwrap_or(to - Days::new(365));
    let calendar = client
        .fetch_contribution_calendar(username, from, to)
        .await?;

    Ok(Json(calendar.into_daily_counts()))
}
