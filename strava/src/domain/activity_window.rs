use chrono::{DateTime, Days, Months, Utc};

/// Time window for activity listing, rendered as the Unix-epoch-seconds
/// `after`/`before` query parameters Strava expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub after: DateTime<Utc>,
    pub before: DateTime<Utc>,
}

impl ActivityWindow {
    pub fn new(after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        Self { after, before }
    }

    /// The trailing year ending at `now` (same month and day in the prior
    /// year; around leap days the start clamps to the nearest valid date).
    pub fn trailing_year(now: DateTime<Utc>) -> Self {
        let after = now
            .checked_sub_months(Months::new(12))
            .unwrap_or(now - Days::new(365));

        Self { after, before: now }
    }

    pub fn after_epoch(&self) -> i64 {
        self.after.timestamp()
    }

    pub fn before_epoch(&self) -> i64 {
        self.before.timestamp()
    }
}
