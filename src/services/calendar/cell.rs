use chrono::NaiveDate;
use serde::Serialize;

use crate::models::date_window::Position;
use crate::utils::date::{day_of_month, weekday_short};

/// Everything a renderer needs to draw one day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub position: Position,
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub weekday: String,
    /// Draw the selection frame on this cell
    pub selected: bool,
    /// Draw a week divider on the trailing edge
    pub divider_after: bool,
}

impl DayCell {
    pub fn new(position: Position, date: NaiveDate, selected: bool, divider_after: bool) -> Self {
        Self {
            position,
            date,
            day_of_month: day_of_month(date),
            weekday: weekday_short(date),
            selected,
            divider_after,
        }
    }
}
