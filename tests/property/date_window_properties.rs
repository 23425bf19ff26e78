// Property: position <-> date mapping is exact and never clamps

use chrono::{Datelike, Duration, NaiveDate};
use horizontal_calendar::services::week_boundary::is_week_boundary;
use horizontal_calendar::{CalendarError, DateWindow, WeekConvention};
use proptest::prelude::*;

fn base_date() -> impl Strategy<Value = NaiveDate> {
    // Roughly 1900..2100, leap years included
    (0i64..73_000).prop_map(|days| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days))
}

proptest! {
    /// Every position maps to a date that maps back to the same position
    #[test]
    fn prop_position_round_trip(base in base_date(), range in 0usize..400, seed in any::<usize>()) {
        let window = DateWindow::new(base, range).unwrap();
        let position = seed % window.total_count();

        let date = window.date_of(position).unwrap();
        prop_assert_eq!(window.position_of(date).unwrap(), position);
        prop_assert_eq!(date - base, Duration::days(position as i64 - range as i64));
    }

    /// Positions past the end are rejected, never clamped
    #[test]
    fn prop_position_out_of_range(base in base_date(), range in 0usize..400, beyond in 0usize..1000) {
        let window = DateWindow::new(base, range).unwrap();
        let position = window.total_count() + beyond;

        prop_assert_eq!(
            window.date_of(position),
            Err(CalendarError::IndexOutOfRange { position, total: 2 * range + 1 })
        );
    }

    /// Dates outside the span are rejected on both sides
    #[test]
    fn prop_date_out_of_range(base in base_date(), range in 0usize..400, beyond in 1i64..1000) {
        let window = DateWindow::new(base, range).unwrap();
        let after = base + Duration::days(range as i64 + beyond);
        let before = base - Duration::days(range as i64 + beyond);

        let after_is_out_of_range = matches!(window.position_of(after), Err(CalendarError::OutOfRange { .. }));
        let before_is_out_of_range = matches!(window.position_of(before), Err(CalendarError::OutOfRange { .. }));
        prop_assert!(after_is_out_of_range);
        prop_assert!(before_is_out_of_range);
    }

    /// Consecutive positions are consecutive days
    #[test]
    fn prop_positions_are_contiguous(base in base_date(), range in 1usize..200) {
        let window = DateWindow::new(base, range).unwrap();
        for position in 1..window.total_count() {
            let gap = window.date_of(position).unwrap() - window.date_of(position - 1).unwrap();
            prop_assert_eq!(gap, Duration::days(1));
        }
    }

    /// Dividers land on exactly one weekday, once per seven days
    #[test]
    fn prop_week_boundaries_match_terminal_day(base in base_date(), range in 11usize..60, monday in any::<bool>()) {
        let window = DateWindow::new(base, range).unwrap();
        let convention = WeekConvention::from_monday_flag(monday);

        let mut count = 0;
        for position in 0..window.total_count() {
            let date = window.date_of(position).unwrap();
            let boundary = is_week_boundary(&window, position, convention).unwrap();
            prop_assert_eq!(boundary, date.weekday() == convention.terminal_day());
            if boundary {
                count += 1;
            }
        }
        let total = window.total_count();
        prop_assert!(count >= total / 7 && count <= total / 7 + 1);
    }
}
