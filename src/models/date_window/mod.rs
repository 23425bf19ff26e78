// Date window model
// Bidirectional mapping between strip positions and calendar days

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::utils::date::{add_days, days_between};

/// Zero-based index into the virtual date strip.
pub type Position = usize;

/// Fixed window of `2R + 1` consecutive days centred on a base date.
///
/// Position `R` is the base date, position `0` is `R` days earlier and
/// position `2R` is `R` days later. The window is immutable: choosing a new
/// base date means building a new window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    base: NaiveDate,
    visible_range: usize,
    first: NaiveDate,
    last: NaiveDate,
}

impl DateWindow {
    /// Build a window of `visible_range` days either side of `base`.
    ///
    /// Fails with [`CalendarError::DateOverflow`] if either edge of the window
    /// falls outside the representable date range.
    pub fn new(base: NaiveDate, visible_range: usize) -> CalendarResult<Self> {
        let overflow = CalendarError::DateOverflow {
            base,
            visible_range,
        };
        let half = i64::try_from(visible_range).map_err(|_| overflow.clone())?;
        let first = add_days(base, -half).ok_or_else(|| overflow.clone())?;
        let last = add_days(base, half).ok_or(overflow)?;

        Ok(Self {
            base,
            visible_range,
            first,
            last,
        })
    }

    pub fn base_date(&self) -> NaiveDate {
        self.base
    }

    pub fn visible_range(&self) -> usize {
        self.visible_range
    }

    /// Position of the base date, always `R`.
    pub fn start_position(&self) -> Position {
        self.visible_range
    }

    /// Number of positions in the window, `2R + 1`.
    pub fn total_count(&self) -> usize {
        self.visible_range * 2 + 1
    }

    pub fn last_position(&self) -> Position {
        self.visible_range * 2
    }

    pub fn first_date(&self) -> NaiveDate {
        self.first
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last
    }

    pub fn contains_position(&self, position: Position) -> bool {
        position <= self.last_position()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Position of `date`: `R + days_between(base, date)`.
    pub fn position_of(&self, date: NaiveDate) -> CalendarResult<Position> {
        if !self.contains_date(date) {
            return Err(CalendarError::OutOfRange {
                date,
                first: self.first,
                last: self.last,
            });
        }

        // Inside the window the offset from the first day is in 0..=2R.
        Ok(days_between(self.first, date) as Position)
    }

    /// Date at `position`: `base + (position - R)` days.
    pub fn date_of(&self, position: Position) -> CalendarResult<NaiveDate> {
        if !self.contains_position(position) {
            return Err(CalendarError::IndexOutOfRange {
                position,
                total: self.total_count(),
            });
        }

        add_days(self.first, position as i64).ok_or(CalendarError::IndexOutOfRange {
            position,
            total: self.total_count(),
        })
    }

    /// Signed day offset of `position` from the base date.
    pub fn offset_of(&self, position: Position) -> CalendarResult<i64> {
        self.date_of(position)
            .map(|date| days_between(self.base, date))
    }
}
