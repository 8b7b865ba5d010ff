use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// Flattened contribution calendar: one count per day present in the queried
/// window. Days absent from the response are implicitly zero for consumers.
#[derive(Debug, Default)]
pub struct ContributionCalendar {
    days: BTreeMap<NaiveDate, u32>,
}

impl ContributionCalendar {
    pub fn daily_counts(&self) -> &BTreeMap<NaiveDate, u32> {
        &self.days
    }

    pub fn into_daily_counts(self) -> BTreeMap<NaiveDate, u32> {
        self.days
    }

    pub fn total_contributions(&self) -> u64 {
        self.days.values().map(|&count| count as u64).sum()
    }
}

impl From<RawContributionCalendar> for ContributionCalendar {
    fn from(raw: RawContributionCalendar) -> Self {
        let days = raw
            .weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .map(|day| (day.date, day.contribution_count))
            .collect();

        Self { days }
    }
}

// Raw types, these are the types that are returned by the GitHub GraphQL API
#[derive(Debug, Deserialize)]
pub struct RawContributionCalendar {
    pub weeks: Vec<RawWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWeek {
    pub contribution_days: Vec<RawContributionDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
}
