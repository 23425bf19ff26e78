// Error taxonomy for the date strip core

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::date_window::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A date maps outside the window. Never clamped: clamping would silently
    /// move the caller's target.
    #[error("date {date} is outside the window {first}..={last}")]
    OutOfRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    #[error("position {position} is outside the window of {total} days")]
    IndexOutOfRange { position: Position, total: usize },

    /// No laid-out child at the expected position after a layout pass.
    #[error("no laid-out item at position {position}")]
    MissingGeometry { position: Position },

    #[error("a window of +/-{visible_range} days around {base} is not representable")]
    DateOverflow {
        base: NaiveDate,
        visible_range: usize,
    },

    #[error("the calendar has no initial date yet")]
    NotInitialized,
}

pub type CalendarResult<T> = Result<T, CalendarError>;
