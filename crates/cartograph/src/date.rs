use chrono::{NaiveDateTime, NaiveTime};

/// Formats a timestamp for storage: `YYYY-MM-DD HH:MM:SS`, or just
/// `YYYY-MM-DD` when the time is midnight.
pub fn convert_date_time(value: &NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
