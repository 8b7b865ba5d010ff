use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One logged activity as returned by `GET /athlete/activities` (a Strava
/// `SummaryActivity`, trimmed to the fields we consume).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub sport_type: String,
    /// Meters.
    pub distance: f64,
    /// Seconds in motion, excluding pauses.
    pub moving_time: i64,
    /// Seconds from start to finish.
    pub elapsed_time: i64,
    pub start_date: DateTime<Utc>,
    pub start_date_local: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_summary_activity() {
        let json = r#"
        {
            "id": 12345678987654321,
            "name": "Happy Friday",
            "sport_type": "Ride",
            "distance": 28099.0,
            "moving_time": 4207,
            "elapsed_time": 4410,
            "total_elevation_gain": 516.0,
            "start_date": "2018-05-02T12:15:09Z",
            "start_date_local": "2018-05-02T05:15:09Z",
            "achievement_count": 0
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.name, "Happy Friday");
        assert_eq!(activity.moving_time, 4207);
        assert_eq!(activity.start_date.date_naive().to_string(), "2018-05-02");
    }
}
