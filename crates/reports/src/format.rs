//! Cell formatting for report rows.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use core_types::GroupRecord;
use rust_decimal::prelude::*;
use std::fmt::Write;

/// Currency shown for groups the server doesn't know.
pub const UNKNOWN_CURRENCY: &str = "N/A";

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Formats epoch seconds shifted by `utc_offset_secs` with a `chrono` pattern.
///
/// Timestamps chrono can't represent are emitted as the raw number; a pattern
/// chrono can't render falls back to [`DEFAULT_TIMESTAMP_FORMAT`].
pub fn format_timestamp(epoch_secs: i64, utc_offset_secs: i32, pattern: &str) -> String {
    let Some(utc) = DateTime::from_timestamp(epoch_secs, 0) else {
        return epoch_secs.to_string();
    };
    let offset = FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| Utc.fix());
    let local = utc.with_timezone(&offset);

    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_err() {
        out.clear();
        // The default pattern is known to be valid.
        let _ = write!(out, "{}", local.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

/// Truncates `value` toward zero to `digits` decimal places.
///
/// Truncation happens in decimal, so `1.15` stays `1.15` rather than becoming
/// `1.14` through binary rounding. Values outside the decimal range are
/// truncated in floating point instead.
pub fn truncate(value: f64, digits: u32) -> f64 {
    Decimal::from_f64(value)
        .and_then(|d| d.trunc_with_scale(digits).to_f64())
        .unwrap_or_else(|| {
            let factor = 10f64.powi(digits as i32);
            (value * factor).trunc() / factor
        })
}

/// Currency of the group named `group_name`, or [`UNKNOWN_CURRENCY`].
pub fn group_currency<'a>(groups: &'a [GroupRecord], group_name: &str) -> &'a str {
    groups
        .iter()
        .find(|group| group.group == group_name)
        .map_or(UNKNOWN_CURRENCY, |group| group.currency.as_str())
}
