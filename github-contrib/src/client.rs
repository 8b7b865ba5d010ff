use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::{ContributionCalendar, RawContributionCalendar};

const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

// The GitHub API rejects requests without a User-Agent.
const USER_AGENT: &str = "pulse-heatmap";

const CONTRIBUTIONS_QUERY: &str = r#"
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}
"#;

pub struct GithubClient {
    token: String,
    graphql_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            graphql_url: GITHUB_GRAPHQL_URL.to_string(),
        }
    }

    pub fn with_graphql_url(token: impl Into<String>, graphql_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            graphql_url: graphql_url.into(),
        }
    }

    /// The user's contribution calendar for the given window, flattened to
    /// one count per day. The username travels as a GraphQL variable, never
    /// interpolated into the query text.
    pub async fn fetch_contribution_calendar(
        &self,
        username: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<ContributionCalendar, GithubFetchError> {
        let body = json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": {
                "login": username,
                "from": from.to_rfc3339_opts(SecondsFormat::Secs, true),
                "to": to.to_rfc3339_opts(SecondsFormat::Secs, true),
            }
        });

        let client = reqwest::Client::new();

        let resp = client
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&body)
            .send()
            .await
            .map_err(|e| GithubFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(GithubFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(GithubFetchError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        let resp_data = resp.json::<GraphQlResponse>().await.map_err(|e| {
            GithubFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        let calendar = resp_data.into_calendar().map(ContributionCalendar::from)?;
        tracing::debug!(
            "fetched contribution calendar with {} days for {}",
            calendar.daily_counts().len(),
            username
        );

        Ok(calendar)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    fn into_calendar(self) -> Result<RawContributionCalendar, GithubFetchError> {
        if !self.errors.is_empty() {
            let messages = self
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GithubFetchError::GraphQl(messages));
        }

        self.data
            .and_then(|data| data.user)
            .map(|user| user.contributions_collection.contribution_calendar)
            .ok_or_else(|| {
                GithubFetchError::ParsingError("response contains no user data".to_string())
            })
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    user: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    contributions_collection: RawContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContributionsCollection {
    contribution_calendar: RawContributionCalendar,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Error, Debug)]
pub enum GithubFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("GraphQlError: {0}")]
    GraphQl(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_contribution_response() {
        let json = r#"
        {
            "data": {
                "user": {
                    "contributionsCollection": {
                        "contributionCalendar": {
                            "weeks": [
                                {
                                    "contributionDays": [
                                        { "date": "2024-06-01", "contributionCount": 3 },
                                        { "date": "2024-06-02", "contributionCount": 0 }
                                    ]
                                }
                            ]
                        }
                    }
                }
            }
        }"#;

        let resp: GraphQlResponse = serde_json::from_str(json).unwrap();
        let calendar = ContributionCalendar::from(resp.into_calendar().unwrap());

        assert_eq!(
            calendar
                .daily_counts()
                .get(&"2024-06-01".parse::<NaiveDate>().unwrap()),
            Some(&3)
        );
    }

    #[test]
    fn graphql_errors_surface() {
        let json = r#"
        {
            "data": { "user": null },
            "errors": [
                { "message": "Could not resolve to a User with the login of 'nobody'." }
            ]
        }"#;

        let resp: GraphQlResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_calendar().unwrap_err();

        assert!(matches!(err, GithubFetchError::GraphQl(_)));
    }

    #[test]
    fn missing_user_is_a_parsing_error() {
        let json = r#"{ "data": { "user": null } }"#;

        let resp: GraphQlResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_calendar().unwrap_err();

        assert!(matches!(err, GithubFetchError::ParsingError(_)));
    }
}
