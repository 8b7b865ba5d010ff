mod activity;
mod activity_window;

pub use activity::*;
pub use activity_window::*;
