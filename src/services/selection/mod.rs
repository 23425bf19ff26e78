// Selection state
// Committed selection plus the transient header preview shown while scrolling

use chrono::NaiveDate;

use crate::error::CalendarResult;
use crate::models::date_window::{DateWindow, Position};
use crate::models::event::CalendarEvent;

/// Result of committing a selection. Carries only the two cells that need redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<Position>,
    pub position: Position,
    pub date: NaiveDate,
}

impl From<SelectionChange> for CalendarEvent {
    fn from(change: SelectionChange) -> Self {
        CalendarEvent::SelectionChanged {
            previous: change.previous,
            position: change.position,
            date: change.date,
        }
    }
}

/// Two-tier selection.
///
/// `current` is authoritative and drives the highlighted cell; it only moves
/// on an explicit commit. `preview` follows the centred cell on every scroll
/// tick so the header stays responsive without the highlight flickering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<Position>,
    preview: Option<Position>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state for a rebuilt window, selecting `position`.
    pub fn reset_to(position: Position) -> Self {
        Self {
            current: Some(position),
            preview: Some(position),
        }
    }

    pub fn current(&self) -> Option<Position> {
        self.current
    }

    pub fn preview(&self) -> Option<Position> {
        self.preview
    }

    pub fn is_selected(&self, position: Position) -> bool {
        self.current == Some(position)
    }

    /// Position the header should show: the live preview if there is one,
    /// otherwise the committed selection.
    pub fn header_position(&self) -> Option<Position> {
        self.preview.or(self.current)
    }

    /// Commit `position` as the selection.
    ///
    /// Validated against `window`; an out-of-window position leaves the state
    /// untouched. Always reports the change, even when re-committing the same
    /// position, so a header that drifted with the preview is resynchronised.
    pub fn set_selected(
        &mut self,
        position: Position,
        window: &DateWindow,
    ) -> CalendarResult<SelectionChange> {
        let date = window.date_of(position)?;
        let previous = self.current.replace(position);
        self.preview = Some(position);

        Ok(SelectionChange {
            previous,
            position,
            date,
        })
    }

    /// Track the centred cell during motion without committing.
    ///
    /// Returns the date to show only when the previewed cell changed.
    pub fn update_preview(
        &mut self,
        position: Position,
        window: &DateWindow,
    ) -> CalendarResult<Option<NaiveDate>> {
        let date = window.date_of(position)?;
        if self.preview == Some(position) {
            return Ok(None);
        }

        self.preview = Some(position);
        Ok(Some(date))
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.preview = None;
    }
}
