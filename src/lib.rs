//! Static catalog of dashboard time-range presets.
//!
//! This crate exposes a fixed, ordered list of relative "Past N" presets, a
//! designated default ("Past 1h"), and the marker template used when a user
//! supplies an absolute range. It is pure data: no I/O, no mutation after
//! initialization, safe for unsynchronized concurrent reads from any thread.
//!
//! Selection UIs render [`selectable_time_ranges`] in order and start from
//! [`default_time_range`]; query builders read the `lower` expressions
//! verbatim and hand them to the query engine.

pub mod catalog;
pub mod duration;
pub mod error;
pub mod models;

pub use catalog::{
    CUSTOM_TIME_RANGE_LABEL, TIME_RANGE_FORMAT, custom_time_range, default_time_range,
    find_by_duration, find_by_seconds, past_fifteen_min_time_range, past_hour_time_range,
    past_thirty_days_time_range, selectable_time_ranges, validate,
};
pub use duration::duration_to_seconds;
pub use error::{CatalogError, Result};
pub use models::{CustomTimeRange, SelectableDurationTimeRange, TimeRange};
