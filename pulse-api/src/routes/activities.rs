use std::collections::BTreeMap;

use axum::Json;
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{NaiveDate, Utc};
use tracing::instrument;

use strava::{domain::ActivityWindow, StravaClient};

use crate::{domain::heatmap::bucket_activity_hours, routes::ApiError};

/// `GET /api/activities` with `Authorization: Bearer <strava token>`.
///
/// Returns the trailing year of Strava activity as a flat `date -> hours`
/// JSON object.
#[instrument(name = "GET /api/activities", skip(bearer))]
pub async fn activity_hours(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<BTreeMap<NaiveDate, f64>>, ApiError> {
    let TypedHeader(auth) = bearer
        .ok_or_else(|| ApiError::unauthorized("Strava access token is required"))?;

    let window = ActivityWindow::trailing_year(Utc::now());
    let activities = StravaClient::new(auth.token())
        .fetch_activities(&window)
        .await?;

    Ok(Json(bucket_activity_hours(&activities)))
}
