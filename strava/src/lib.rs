mod client;
mod strava_url;

pub mod domain;

pub use client::*;
pub use strava_url::*;
