// Test fixtures - reusable test data
// Provides consistent dates and a calendar wired to a headless strip

#![allow(dead_code)]

use chrono::NaiveDate;
use horizontal_calendar::services::headless::HeadlessStrip;
use horizontal_calendar::{CalendarSettings, HorizontalCalendar};

pub const CELL_WIDTH: f32 = 50.0;
pub const VIEWPORT_WIDTH: f32 = 350.0;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Mar 12, 2025
    pub fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Sunday, Mar 9, 2025: US clocks spring forward
    pub fn us_dst_start_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

pub fn settings(visible_range: usize) -> CalendarSettings {
    CalendarSettings::default().with_visible_range(visible_range)
}

/// Calendar around `base` whose initial centring has already settled, with events drained.
pub fn settled_calendar(
    visible_range: usize,
    base: NaiveDate,
) -> (HorizontalCalendar, HeadlessStrip) {
    let mut calendar = HorizontalCalendar::with_initial_date(settings(visible_range), base).unwrap();
    let mut strip = HeadlessStrip::new(CELL_WIDTH, VIEWPORT_WIDTH);
    strip.run_until_settled(&mut calendar);
    calendar.take_events();
    (calendar, strip)
}
