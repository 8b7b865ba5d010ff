use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

/// One day in the rendered calendar.
///
/// `date: None` marks a padding cell in a partial leading or trailing week.
/// Padding never carries data and is excluded from coloring and tooltips; it
/// is not the same thing as a zero-activity day.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub date: Option<NaiveDate>,
    /// Strava moving time, in hours.
    pub hours: f64,
    /// GitHub contribution count.
    pub contributions: u32,
}

impl GridCell {
    fn day(date: NaiveDate, hours: f64, contributions: u32) -> Self {
        Self {
            date: Some(date),
            hours,
            contributions,
        }
    }

    fn absent() -> Self {
        Self {
            date: None,
            hours: 0.0,
            contributions: 0,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.date.is_none()
    }
}

/// The trailing-year calendar grid: one cell per day, grouped into
/// Sunday-to-Saturday weeks, edge weeks padded to exactly seven cells.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    cells: Vec<GridCell>,
}

impl HeatmapGrid {
    /// Builds the grid for the year ending at `today` (inclusive).
    ///
    /// Every date in the window becomes a cell carrying the hours and
    /// contribution count looked up in the two maps (zero when absent). A new
    /// week starts on each Sunday; the first and last weeks are padded with
    /// absent cells so the result is always a whole number of weeks.
    pub fn build(
        today: NaiveDate,
        hours_by_day: &BTreeMap<NaiveDate, f64>,
        contributions_by_day: &BTreeMap<NaiveDate, u32>,
    ) -> Self {
        let start = today
            .checked_sub_months(Months::new(12))
            .unwrap_or(today - Days::new(365));

        let mut weeks: Vec<Vec<GridCell>> = Vec::new();
        let mut week: Vec<GridCell> = Vec::new();

        let mut current = start;
        while current <= today {
            if current.weekday() == Weekday::Sun && !week.is_empty() {
                weeks.push(std::mem::take(&mut week));
            }
            week.push(GridCell::day(
                current,
                hours_by_day.get(&current).copied().unwrap_or(0.0),
                contributions_by_day.get(&current).copied().unwrap_or(0),
            ));
            current = current + Days::new(1);
        }
        if !week.is_empty() {
            weeks.push(week);
        }

        if let Some(first_week) = weeks.first_mut() {
            while first_week.len() < DAYS_PER_WEEK {
                first_week.insert(0, GridCell::absent());
            }
        }
        if let Some(last_week) = weeks.last_mut() {
            while last_week.len() < DAYS_PER_WEEK {
                last_week.push(GridCell::absent());
            }
        }

        Self {
            cells: weeks.into_iter().flatten().collect(),
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Cell at (week, weekday), Sunday = 0.
    pub fn cell(&self, week: usize, day: usize) -> Option<&GridCell> {
        if day >= DAYS_PER_WEEK {
            return None;
        }
        self.cells.get(week * DAYS_PER_WEEK + day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn empty_grid(today: &str) -> HeatmapGrid {
        HeatmapGrid::build(date(today), &BTreeMap::new(), &BTreeMap::new())
    }

    #[test]
    fn length_is_a_multiple_of_seven() {
        for today in ["2024-06-15", "2024-12-31", "2024-02-29", "2023-01-01"] {
            let grid = empty_grid(today);
            assert_eq!(
                grid.cells().len() % DAYS_PER_WEEK,
                0,
                "window ending {today}"
            );
            assert_eq!(grid.cells().len(), grid.week_count() * DAYS_PER_WEEK);
        }
    }

    #[test]
    fn weeks_start_on_sunday() {
        let grid = empty_grid("2024-06-15");

        for (index, cell) in grid.cells().iter().enumerate() {
            if let Some(d) = cell.date {
                let day_of_week = index % DAYS_PER_WEEK;
                assert_eq!(
                    d.weekday().num_days_from_sunday() as usize,
                    day_of_week,
                    "{d} sits at row {day_of_week}"
                );
            }
        }
    }

    #[test]
    fn window_spans_trailing_year() {
        let grid = empty_grid("2024-06-15");
        let dates: Vec<NaiveDate> = grid.cells().iter().filter_map(|c| c.date).collect();

        assert_eq!(dates.first(), Some(&date("2023-06-15")));
        assert_eq!(dates.last(), Some(&date("2024-06-15")));
        assert_eq!(dates.len(), 367); // leap year window, inclusive ends
    }

    #[test]
    fn edge_weeks_are_padded_with_absent_cells() {
        // 2023-06-15 is a Thursday, 2024-06-15 a Saturday: four leading
        // placeholders, zero trailing ones.
        let grid = empty_grid("2024-06-15");
        let cells = grid.cells();

        assert!(cells[..4].iter().all(GridCell::is_absent));
        assert!(!cells[4].is_absent());
        assert!(!cells[cells.len() - 1].is_absent());
    }

    #[test]
    fn trailing_partial_week_is_padded_forward() {
        // 2024-06-12 is a Wednesday, so the last week misses Thu..Sat.
        let grid = empty_grid("2024-06-12");
        let cells = grid.cells();

        assert!(cells[cells.len() - 3..].iter().all(GridCell::is_absent));
        assert_eq!(cells[cells.len() - 4].date, Some(date("2024-06-12")));
    }

    #[test]
    fn empty_inputs_yield_all_zero_cells() {
        let grid = empty_grid("2024-06-15");

        for cell in grid.cells() {
            assert_eq!(cell.hours, 0.0);
            assert_eq!(cell.contributions, 0);
        }
    }

    #[test]
    fn metrics_land_on_their_date_only() {
        let hours = BTreeMap::from([(date("2024-06-01"), 1.0)]);
        let contributions = BTreeMap::from([(date("2024-06-03"), 7)]);

        let grid = HeatmapGrid::build(date("2024-06-15"), &hours, &contributions);

        let with_hours: Vec<&GridCell> =
            grid.cells().iter().filter(|c| c.hours > 0.0).collect();
        assert_eq!(with_hours.len(), 1);
        assert_eq!(with_hours[0].date, Some(date("2024-06-01")));
        assert_eq!(with_hours[0].hours, 1.0);

        let with_contributions: Vec<&GridCell> = grid
            .cells()
            .iter()
            .filter(|c| c.contributions > 0)
            .collect();
        assert_eq!(with_contributions.len(), 1);
        assert_eq!(with_contributions[0].date, Some(date("2024-06-03")));
        assert_eq!(with_contributions[0].contributions, 7);
    }

    #[test]
    fn build_is_deterministic() {
        let hours = BTreeMap::from([(date("2024-06-01"), 1.5)]);
        let contributions = BTreeMap::from([(date("2024-06-01"), 3)]);

        let first = HeatmapGrid::build(date("2024-06-15"), &hours, &contributions);
        let second = HeatmapGrid::build(date("2024-06-15"), &hours, &contributions);

        assert_eq!(first, second);
    }

    #[test]
    fn cell_addressing_matches_flat_order() {
        let grid = empty_grid("2024-06-15");

        assert_eq!(grid.cell(0, 0), Some(&grid.cells()[0]));
        assert_eq!(grid.cell(1, 3), Some(&grid.cells()[DAYS_PER_WEEK + 3]));
        assert_eq!(grid.cell(0, DAYS_PER_WEEK), None);
        assert_eq!(grid.cell(grid.week_count(), 0), None);
    }

    #[test]
    fn leap_day_anchor_clamps_window_start() {
        let grid = empty_grid("2024-02-29");
        let first_date = grid.cells().iter().find_map(|c| c.date).unwrap();

        assert_eq!(first_date, date("2023-02-28"));
    }
}
