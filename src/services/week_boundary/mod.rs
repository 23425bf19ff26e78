// Week boundary calculation
// Decides which cells close a calendar week and get a trailing divider

use chrono::{Datelike, Weekday};

use crate::error::CalendarResult;
use crate::models::date_window::{DateWindow, Position};
use crate::models::week::WeekConvention;

/// True if `weekday` is the last day of the week under `convention`.
pub fn is_week_terminal(weekday: Weekday, convention: WeekConvention) -> bool {
    weekday == convention.terminal_day()
}

/// True if the day at `position` ends a week: Sunday for Monday-start weeks,
/// Saturday for Sunday-start weeks.
///
/// Stateless and cheap; evaluated per visible cell on every render pass so a
/// convention change applies to already-rendered cells immediately.
pub fn is_week_boundary(
    window: &DateWindow,
    position: Position,
    convention: WeekConvention,
) -> CalendarResult<bool> {
    let date = window.date_of(position)?;
    Ok(is_week_terminal(date.weekday(), convention))
}

/// Positions in `range` that close a week. Positions outside the window are skipped.
pub fn boundaries_in(
    window: &DateWindow,
    range: std::ops::RangeInclusive<Position>,
    convention: WeekConvention,
) -> Vec<Position> {
    range
        .filter(|&position| is_week_boundary(window, position, convention).unwrap_or(false))
        .collect()
}
