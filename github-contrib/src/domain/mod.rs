mod contribution_calendar;

pub use contribution_calendar::*;
