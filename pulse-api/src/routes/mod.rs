pub(crate) mod activities;
pub(crate) mod contributions;
pub(crate) mod error;
pub(crate) mod heatmap;
pub(crate) mod page;

pub(crate) use error::ApiError;
