use chrono::{DateTime, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_30_MIN: i64 = Self::MS_IN_S * 60 * 30;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Calendar date (UTC) of an epoch-millisecond timestamp.
/// Returns None for timestamps chrono cannot represent.
pub fn epoch_ms_to_date(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Display form of an epoch-ms timestamp, date part only.
pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    match epoch_ms_to_date(epoch_ms) {
        Some(date) => format_date(date),
        None => String::new(),
    }
}

/// Display form with the intraday time kept, for the raw-bar preview.
pub fn epoch_ms_to_utc_minutes(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}
