// Unit tests for week conventions and divider placement

#[cfg(test)]
mod tests {
    use crate::fixtures::dates;
    use chrono::{Datelike, Weekday};
    use horizontal_calendar::services::week_boundary::{is_week_boundary, is_week_terminal};
    use horizontal_calendar::{DateWindow, WeekConvention};
    use test_case::test_case;

    #[test_case(WeekConvention::MondayStart, Weekday::Mon, Weekday::Sun; "monday start")]
    #[test_case(WeekConvention::SundayStart, Weekday::Sun, Weekday::Sat; "sunday start")]
    fn test_convention_days(convention: WeekConvention, first: Weekday, terminal: Weekday) {
        assert_eq!(convention.first_day(), first);
        assert_eq!(convention.terminal_day(), terminal);
        assert!(is_week_terminal(terminal, convention));
        assert!(!is_week_terminal(first, convention));
    }

    #[test_case(WeekConvention::MondayStart, Weekday::Sun; "dividers after sundays")]
    #[test_case(WeekConvention::SundayStart, Weekday::Sat; "dividers after saturdays")]
    fn test_three_week_window(convention: WeekConvention, expected: Weekday) {
        // 21 days either side covers six full weeks
        let window = DateWindow::new(dates::base(), 21).unwrap();

        for position in 0..window.total_count() {
            let date = window.date_of(position).unwrap();
            assert_eq!(
                is_week_boundary(&window, position, convention).unwrap(),
                date.weekday() == expected,
                "position {} ({})",
                position,
                date
            );
        }
    }

    #[test_case(true, WeekConvention::MondayStart; "flag set")]
    #[test_case(false, WeekConvention::SundayStart; "flag clear")]
    fn test_convention_from_flag(flag: bool, expected: WeekConvention) {
        assert_eq!(WeekConvention::from_monday_flag(flag), expected);
        assert_eq!(expected.starts_on_monday(), flag);
    }

    #[test]
    fn test_leap_day_is_not_special() {
        // Thursday, Feb 29, 2024
        let window = DateWindow::new(dates::leap_day_2024(), 3).unwrap();
        let boundaries: Vec<_> = (0..window.total_count())
            .filter(|p| is_week_boundary(&window, *p, WeekConvention::MondayStart).unwrap())
            .map(|p| window.date_of(p).unwrap())
            .collect();
        assert_eq!(boundaries, vec![dates::ymd(2024, 3, 3)]);
    }
}
