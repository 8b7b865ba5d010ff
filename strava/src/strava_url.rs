use std::env;
use std::fmt::Display;

const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";

#[derive(Debug, Clone)]
pub struct StravaUrl(String);

impl AsRef<str> for StravaUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StravaUrl {
    /// Creates a new StravaUrl from the environment variable `STRAVA_API_URL`,
    /// falling back to the public API.
    pub fn from_env() -> Self {
        Self(env::var("STRAVA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_query(&self, key: &str, value: impl Display) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&{}={}", self.0, key, value))
        } else {
            Self(format!("{}?{}={}", self.0, key, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_trims_slashes() {
        let url = StravaUrl::new("https://example.com/api/");
        assert_eq!(
            url.append_path("/athlete/activities").as_ref(),
            "https://example.com/api/athlete/activities"
        );
    }

    #[test]
    fn query_params_chain() {
        let url = StravaUrl::new("https://example.com/api")
            .append_path("athlete/activities")
            .with_query("page", 2)
            .with_query("per_page", 100);
        assert_eq!(
            url.as_ref(),
            "https://example.com/api/athlete/activities?page=2&per_page=100"
        );
    }
}
