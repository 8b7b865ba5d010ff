use std::collections::BTreeMap;

use chrono::NaiveDate;
use strava::domain::Activity;

/// Accumulates moving time into hours per UTC calendar day.
///
/// Activities sharing a date sum into one entry; an empty slice yields an
/// empty map. Dates never seen stay absent and default to zero downstream.
pub fn bucket_activity_hours(activities: &[Activity]) -> BTreeMap<NaiveDate, f64> {
    let mut hours_by_day = BTreeMap::new();

    for activity in activities {
        let date = activity.start_date.date_naive();
        *hours_by_day.entry(date).or_insert(0.0) += activity.moving_time as f64 / 3600.0;
    }

    hours_by_day
}
