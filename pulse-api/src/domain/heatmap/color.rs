use serde::Serialize;

use super::GridCell;

/// GitHub's light-gray "no data" background; also used for absent cells.
pub const NEUTRAL_COLOR: &str = "#ebedf0";

const GITHUB_GREEN: &str = "#6cc644";
const STRAVA_ORANGE: &str = "#ff5a1f";

const GREENS: [&str; 4] = ["#9be9a8", "#40c463", "#30a14e", "#216e39"];
const ORANGES: [&str; 4] = ["#ffdcc2", "#ffb687", "#ff8e50", STRAVA_ORANGE];

/// CSS background for a (hours, contributions) pair.
///
/// Mixed days blend green into orange with the split at
/// `contributions / (contributions + hours)`; single-source days bucket at
/// the contribution thresholds 5/10/20 and the hour thresholds 1/3/5. Any
/// non-negative pair resolves to a defined color.
pub fn cell_color(hours: f64, contributions: u32) -> String {
    if hours == 0.0 && contributions == 0 {
        return NEUTRAL_COLOR.to_string();
    }

    if hours > 0.0 && contributions > 0 {
        let split = contributions as f64 / (contributions as f64 + hours) * 100.0;
        return format!(
            "linear-gradient(to bottom right, {} {}%, {})",
            GITHUB_GREEN, split, STRAVA_ORANGE
        );
    }

    if contributions > 0 {
        let bucket = if contributions < 5 {
            0
        } else if contributions < 10 {
            1
        } else if contributions < 20 {
            2
        } else {
            3
        };
        return GREENS[bucket].to_string();
    }

    let bucket = if hours < 1.0 {
        0
    } else if hours < 3.0 {
        1
    } else if hours < 5.0 {
        2
    } else {
        3
    };
    ORANGES[bucket].to_string()
}

/// Hover detail for one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellTooltip {
    /// Long date label, e.g. "Sat Jun 01 2024".
    pub day: String,
    /// Rounded to one decimal place.
    pub strava_hours: f64,
    pub github_contributions: u32,
}

/// Tooltip payload for a cell; padding cells are never interactive and get
/// `None`.
pub fn tooltip(cell: &GridCell) -> Option<CellTooltip> {
    let date = cell.date?;

    Some(CellTooltip {
        day: date.format("%a %b %d %Y").to_string(),
        strava_hours: (cell.hours * 10.0).round() / 10.0,
        github_contributions: cell.contributions,
    })
}
