//! Human-readable scheduling labels.

use chrono::NaiveDate;

/// Whole days from `today` until `date` (negative if the date has passed).
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// "Today", "Tomorrow", "In N days" for N in 2..=7, otherwise an absolute
/// date like "Sep 12, 2026".
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    match days_until(date, today) {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n @ 2..=7 => format!("In {n} days"),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

/// "Thu, Sep 4 at 10:00"
pub fn format_booking_date(date: NaiveDate, time: &str) -> String {
    format!("{} at {}", date.format("%a, %b %-d"), time)
}
