mod bucket;
mod color;
mod grid;

pub use bucket::bucket_activity_hours;
pub use color::{cell_color, tooltip, CellTooltip, NEUTRAL_COLOR};
pub use grid::{GridCell, HeatmapGrid, DAYS_PER_WEEK};
