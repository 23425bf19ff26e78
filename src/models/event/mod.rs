// Event module
// Notifications emitted to the rendering layer and scroll commands issued to the host

use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::date_window::Position;

/// Identifies one programmatic navigation. A newer request supersedes all
/// older ones; callbacks tagged with a superseded id are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

/// How an animated scroll aligns its target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapPreference {
    /// Centre the cell in the viewport, approaching from whichever side it is on.
    #[default]
    Any,
}

/// Work the host rendering surface must carry out on the core's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrollCommand {
    /// Animate until `position` is centred, then report scroll idle.
    SmoothScrollTo {
        request: RequestId,
        position: Position,
        millis_per_pixel: f32,
        snap: SnapPreference,
    },
    /// Jump without animation so `position` is laid out, then report the
    /// post-layout geometry tagged with `request`.
    JumpTo {
        request: RequestId,
        position: Position,
    },
    /// Shift content by `dx` pixels; positive moves cells towards the left.
    ScrollBy { dx: f32 },
}

/// Notifications for the rendering layer. Consumers re-render on these
/// instead of polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarEvent {
    /// Committed selection moved. Only `previous` and `position` need redrawing.
    SelectionChanged {
        previous: Option<Position>,
        position: Position,
        date: NaiveDate,
    },
    /// Live header readout while the strip is moving; not a commit.
    HeaderPreview { position: Position, date: NaiveDate },
    DateClicked { position: Position, date: NaiveDate },
    /// Divider placement changed; redraw the visible cells' decorations.
    DecorationsInvalidated,
    /// The window was rebuilt around a new base date; every cell is stale.
    WindowRebuilt {
        base_date: NaiveDate,
        total_count: usize,
    },
}

impl CalendarEvent {
    /// Date carried by the event, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::SelectionChanged { date, .. }
            | Self::HeaderPreview { date, .. }
            | Self::DateClicked { date, .. } => Some(*date),
            Self::WindowRebuilt { base_date, .. } => Some(*base_date),
            Self::DecorationsInvalidated => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Pending notifications and commands, drained by the host's single dispatch point.
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<CalendarEvent>,
    commands: VecDeque<ScrollCommand>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn issue(&mut self, command: ScrollCommand) {
        self.commands.push_back(command);
    }

    pub fn take_events(&mut self) -> Vec<CalendarEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn next_command(&mut self) -> Option<ScrollCommand> {
        self.commands.pop_front()
    }

    pub fn take_commands(&mut self) -> Vec<ScrollCommand> {
        self.commands.drain(..).collect()
    }

    pub fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}
