// Date utility functions
// Whole-calendar-day arithmetic and label formatting for the date strip

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Calendar day a zoned timestamp falls on, in its own timezone.
///
/// Time of day and offset are dropped, so two instants on the same local day
/// always normalise to the same value regardless of DST transitions.
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Signed number of calendar days from `from` to `to`.
///
/// Computed on calendar days rather than elapsed milliseconds: a 23 or 25 hour
/// day around a DST change still counts as exactly one day.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Shift a date by a signed number of days, `None` if the result leaves chrono's range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(chrono::Duration::try_days(days)?)
}

pub fn is_same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    local_day(a) == local_day(b)
}

/// Header label, e.g. `5 March 2025`.
pub fn format_header(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Short weekday label for a day cell (`Mon`, `Tue`, ...).
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}
