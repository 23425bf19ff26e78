// Settings module
// Widget configuration for the date strip

use serde::{Deserialize, Serialize};

use crate::models::week::WeekConvention;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Days shown either side of the base date (window holds `2R + 1` days).
    pub visible_range: usize,
    pub show_week_dividers: bool,
    pub week_starts_on_monday: bool,
    /// Smooth-scroll speed: milliseconds spent per inch of travel.
    pub scroll_millis_per_inch: f32,
    /// Display density used to turn the per-inch speed into a per-pixel one.
    pub density_dpi: f32,
    /// Centre a tapped cell with a smooth scroll, as well as reporting the click.
    pub center_on_click: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            visible_range: 180,
            show_week_dividers: true,
            week_starts_on_monday: true,
            scroll_millis_per_inch: 100.0,
            density_dpi: 160.0,
            center_on_click: true,
        }
    }
}

impl CalendarSettings {
    pub fn week_convention(&self) -> WeekConvention {
        WeekConvention::from_monday_flag(self.week_starts_on_monday)
    }

    pub fn with_visible_range(mut self, visible_range: usize) -> Self {
        self.visible_range = visible_range;
        self
    }
}
