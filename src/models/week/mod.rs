// Week convention model

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Which weekday opens a week. Determines where week dividers are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekConvention {
    #[default]
    MondayStart,
    SundayStart,
}

impl WeekConvention {
    pub fn from_monday_flag(week_starts_on_monday: bool) -> Self {
        if week_starts_on_monday {
            Self::MondayStart
        } else {
            Self::SundayStart
        }
    }

    pub fn first_day(&self) -> Weekday {
        match self {
            Self::MondayStart => Weekday::Mon,
            Self::SundayStart => Weekday::Sun,
        }
    }

    /// Last day of the week; a divider is drawn after it.
    pub fn terminal_day(&self) -> Weekday {
        self.first_day().pred()
    }

    pub fn starts_on_monday(&self) -> bool {
        matches!(self, Self::MondayStart)
    }
}
