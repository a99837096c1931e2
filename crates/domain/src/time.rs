//! Time and timestamp helpers.

use chrono::{DateTime, Local, NaiveTime, Timelike, Utc};

/// UTC timestamp used for status update times.
pub type Timestamp = DateTime<Utc>;

/// Label shown before the first successful refresh.
pub const NEVER_REFRESHED_LABEL: &str = "00:00";

/// Return the current local wall-clock time.
#[must_use]
pub fn local_now() -> DateTime<Local> {
    Local::now()
}

/// Convert epoch milliseconds into a UTC timestamp.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn from_epoch_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

/// Format a time of day as zero-padded 24-hour `HH:MM:SS`.
#[must_use]
pub fn format_time_of_day(time: NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}
