//! The preset catalog: a fixed, ordered registry of time-range presets and a
//! designated default.
//!
//! All data is built once behind `LazyLock` statics and never mutated, so it
//! is safe for unsynchronized concurrent reads. Order is significant: it
//! drives UI list rendering and must be preserved exactly.

use std::sync::LazyLock;

use crate::duration::duration_to_seconds;
use crate::error::{CatalogError, Result};
use crate::models::{CustomTimeRange, SelectableDurationTimeRange};

/// Display/parse format for absolute timestamps in custom ranges.
///
/// Published for downstream formatting code; not enforced by this crate.
pub const TIME_RANGE_FORMAT: &str = "YYYY-MM-DD HH:mm";

/// Label carried by the custom-range marker.
pub const CUSTOM_TIME_RANGE_LABEL: &str = "Custom Time Range";

fn past(duration: &str, seconds: u64) -> SelectableDurationTimeRange {
    SelectableDurationTimeRange {
        seconds,
        lower: format!("now() - {duration}"),
        upper: None,
        label: format!("Past {duration}"),
        duration: duration.to_string(),
    }
}

// Presets referenced elsewhere by identity are single shared statics; the
// catalog below holds clones of them, structurally identical.
static PAST_FIFTEEN_MIN: LazyLock<SelectableDurationTimeRange> =
    LazyLock::new(|| past("15m", 900));
static PAST_HOUR: LazyLock<SelectableDurationTimeRange> = LazyLock::new(|| past("1h", 3_600));
static PAST_THIRTY_DAYS: LazyLock<SelectableDurationTimeRange> =
    LazyLock::new(|| past("30d", 2_592_000));

static SELECTABLE_TIME_RANGES: LazyLock<Vec<SelectableDurationTimeRange>> = LazyLock::new(|| {
    let ranges = vec![
        past("5m", 300),
        PAST_FIFTEEN_MIN.clone(),
        PAST_HOUR.clone(),
        past("6h", 21_600),
        past("12h", 43_200),
        past("24h", 86_400),
        past("2d", 172_800),
        past("7d", 604_800),
        PAST_THIRTY_DAYS.clone(),
    ];
    tracing::debug!(presets = ranges.len(), "time-range catalog initialized");
    ranges
});

static CUSTOM_TIME_RANGE: LazyLock<CustomTimeRange> = LazyLock::new(|| CustomTimeRange {
    label: CUSTOM_TIME_RANGE_LABEL.to_string(),
    lower: None,
    upper: None,
});

/// The selectable presets in fixed display order:
/// 5m, 15m, 1h, 6h, 12h, 24h, 2d, 7d, 30d.
pub fn selectable_time_ranges() -> &'static [SelectableDurationTimeRange] {
    &SELECTABLE_TIME_RANGES
}

/// The preset a picker starts from when the user has made no selection.
///
/// Returns the same shared instance as [`past_hour_time_range`].
pub fn default_time_range() -> &'static SelectableDurationTimeRange {
    past_hour_time_range()
}

/// The "Past 15m" preset.
pub fn past_fifteen_min_time_range() -> &'static SelectableDurationTimeRange {
    &PAST_FIFTEEN_MIN
}

/// The "Past 1h" preset.
pub fn past_hour_time_range() -> &'static SelectableDurationTimeRange {
    &PAST_HOUR
}

/// The "Past 30d" preset.
pub fn past_thirty_days_time_range() -> &'static SelectableDurationTimeRange {
    &PAST_THIRTY_DAYS
}

/// The marker template representing "user will supply an absolute range".
pub fn custom_time_range() -> &'static CustomTimeRange {
    &CUSTOM_TIME_RANGE
}

/// Looks up a preset by its duration token, e.g. `"6h"`.
pub fn find_by_duration(duration: &str) -> Option<&'static SelectableDurationTimeRange> {
    selectable_time_ranges()
        .iter()
        .find(|range| range.duration == duration)
}

/// Looks up a preset by its window width in seconds.
pub fn find_by_seconds(seconds: u64) -> Option<&'static SelectableDurationTimeRange> {
    selectable_time_ranges()
        .iter()
        .find(|range| range.seconds == seconds)
}

/// Checks the catalog invariants over the shipped data.
///
/// Catches data-entry mistakes (label/seconds/duration disagreement, broken
/// ordering) that have no runtime error path otherwise. Callers may run this
/// once at startup; the shipped data always passes.
pub fn validate() -> Result<()> {
    validate_entries(selectable_time_ranges()).inspect_err(|err| {
        tracing::error!(%err, "time-range catalog failed validation");
    })
}

fn validate_entries(ranges: &[SelectableDurationTimeRange]) -> Result<()> {
    let mut previous: Option<&SelectableDurationTimeRange> = None;
    for range in ranges {
        if range.seconds == 0 {
            return Err(CatalogError::EmptyWindow(range.label.clone()));
        }
        let actual = duration_to_seconds(&range.duration)?;
        if actual != range.seconds {
            return Err(CatalogError::SecondsMismatch {
                label: range.label.clone(),
                duration: range.duration.clone(),
                declared: range.seconds,
                actual,
            });
        }
        let expected_lower = format!("now() - {}", range.duration);
        if range.lower != expected_lower {
            return Err(CatalogError::LowerBoundMismatch {
                label: range.label.clone(),
                lower: range.lower.clone(),
                duration: range.duration.clone(),
            });
        }
        if let Some(previous) = previous
            && previous.seconds >= range.seconds
        {
            return Err(CatalogError::OutOfOrder {
                prev: previous.label.clone(),
                next: range.label.clone(),
            });
        }
        previous = Some(range);
    }
    for (index, range) in ranges.iter().enumerate() {
        if ranges
            .iter()
            .skip(index + 1)
            .any(|other| other.label == range.label)
        {
            return Err(CatalogError::DuplicateLabel(range.label.clone()));
        }
    }
    Ok(())
}
