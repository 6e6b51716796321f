//! Dashboard chart helpers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Bar width in percent of the largest value in the series.
///
/// Returns 0 for non-positive values or an all-zero series.
pub fn bar_percent(value: i64, max: i64) -> u32 {
    if value <= 0 || max <= 0 {
        return 0;
    }
    let pct = (value.min(max) * 100) / max;
    u32::try_from(pct).unwrap_or(0)
}

/// Largest value in a series, or 0 when empty.
pub fn series_max(values: impl IntoIterator<Item = i64>) -> i64 {
    values.into_iter().max().unwrap_or(0).max(0)
}
