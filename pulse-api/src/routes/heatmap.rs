use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use strava::{domain::ActivityWindow, StravaClient};

use crate::{
    app_state::AppState,
    domain::heatmap::{
        bucket_activity_hours, cell_color, tooltip, CellTooltip, HeatmapGrid, NEUTRAL_COLOR,
    },
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapQuery {
    github_username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// `null` for padding cells in partial edge weeks.
    pub date: Option<NaiveDate>,
    pub hours: f64,
    pub contributions: u32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<CellTooltip>,
}

#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub weeks: usize,
    pub cells: Vec<HeatmapCell>,
}

/// `GET /api/heatmap?githubUsername=<login>` with an optional
/// `Authorization: Bearer <strava token>` header.
///
/// Always renders a full grid: a missing bearer token, missing username, or
/// a failed upstream fetch degrades that source to zeros instead of failing
/// the request. Each call owns its own accumulators; nothing is cached
/// between fetch cycles.
#[instrument(name = "GET /api/heatmap", skip(app_state, bearer))]
pub async fn get_heatmap(
    State(app_state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Query(query): Query<HeatmapQuery>,
) -> Json<HeatmapResponse> {
    let now = Utc::now();
    let window = ActivityWindow::trailing_year(now);

    let hours_by_day = match &bearer {
        Some(TypedHeader(auth)) => {
            let client = StravaClient::new(auth.token());
            match client.fetch_activities(&window).await {
                Ok(activities) => bucket_activity_hours(&activities),
                Err(err) => {
                    tracing::error!("Strava activity fetch failed: {}", err);
                    Default::default()
                }
            }
        }
        None => Default::default(),
    };

    let username = query
        .github_username
        .as_deref()
        .map(str::trim)
        .filter(|username| !username.is_empty());
    let contributions_by_day = match (username, app_state.github_client()) {
        (Some(username), Ok(client)) => {
            match client
                .fetch_contribution_calendar(username, window.after, window.before)
                .await
            {
                Ok(calendar) => calendar.into_daily_counts(),
                Err(err) => {
                    tracing::error!("GitHub contributions fetch failed: {}", err);
                    Default::default()
                }
            }
        }
        (Some(_), Err(err)) => {
            tracing::warn!("skipping GitHub contributions: {}", err);
            Default::default()
        }
        (None, _) => Default::default(),
    };

    let grid = HeatmapGrid::build(now.date_naive(), &hours_by_day, &contributions_by_day);
    let cells = grid
        .cells()
        .iter()
        .map(|cell| HeatmapCell {
            date: cell.date,
            hours: cell.hours,
            contributions: cell.contributions,
            // Padding is never data-bearing, whatever the maps contain.
            color: if cell.is_absent() {
                NEUTRAL_COLOR.to_string()
            } else {
                cell_color(cell.hours, cell.contributions)
            },
            tooltip: tooltip(cell),
        })
        .collect();

    Json(HeatmapResponse {
        weeks: grid.week_count(),
        cells,
    })
}
