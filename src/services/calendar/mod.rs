//! Horizontal date strip facade.
//!
//! Owns the date window, the selection and the scroll controller, and is the
//! only surface the host shell talks to. Inputs arrive through the `on_*`
//! hooks and never return errors; outputs are queued as [`CalendarEvent`]s
//! and [`ScrollCommand`]s for the host to drain.

mod cell;

pub use cell::DayCell;

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::{CalendarError, CalendarResult};
use crate::models::date_window::{DateWindow, Position};
use crate::models::event::{CalendarEvent, Outbox, RequestId, ScrollCommand};
use crate::models::geometry::ItemGeometry;
use crate::models::settings::CalendarSettings;
use crate::models::week::WeekConvention;
use crate::services::scroll_sync::{ScrollSpeed, ScrollSyncController, SyncContext, SyncState};
use crate::services::selection::SelectionState;
use crate::services::week_boundary::is_week_boundary;
use crate::utils::date::{format_header, local_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    Smooth,
    Instant,
}

pub struct HorizontalCalendar {
    settings: CalendarSettings,
    window: Option<DateWindow>,
    selection: SelectionState,
    sync: ScrollSyncController,
    outbox: Outbox,
}

impl Default for HorizontalCalendar {
    fn default() -> Self {
        Self::new(CalendarSettings::default())
    }
}

impl HorizontalCalendar {
    /// A calendar with no window yet. Navigation is ignored until
    /// [`set_initial_date`](Self::set_initial_date) is called.
    pub fn new(settings: CalendarSettings) -> Self {
        let sync = ScrollSyncController::new(ScrollSpeed::from_settings(&settings));
        Self {
            settings,
            window: None,
            selection: SelectionState::new(),
            sync,
            outbox: Outbox::new(),
        }
    }

    pub fn with_initial_date(settings: CalendarSettings, date: NaiveDate) -> CalendarResult<Self> {
        let mut calendar = Self::new(settings);
        calendar.try_set_initial_date(date)?;
        Ok(calendar)
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    pub fn window(&self) -> Option<&DateWindow> {
        self.window.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync.state()
    }

    pub fn base_date(&self) -> Option<NaiveDate> {
        self.window.map(|window| window.base_date())
    }

    pub fn total_count(&self) -> usize {
        self.window.map_or(0, |window| window.total_count())
    }

    pub fn start_position(&self) -> Option<Position> {
        self.window.map(|window| window.start_position())
    }

    // --- outputs ---

    pub fn take_events(&mut self) -> Vec<CalendarEvent> {
        self.outbox.take_events()
    }

    pub fn take_commands(&mut self) -> Vec<ScrollCommand> {
        self.outbox.take_commands()
    }

    pub fn next_command(&mut self) -> Option<ScrollCommand> {
        self.outbox.next_command()
    }

    // --- lifecycle ---

    /// Rebuild the window around `date` and centre it. Failures are logged.
    pub fn set_initial_date(&mut self, date: NaiveDate) {
        if let Err(err) = self.try_set_initial_date(date) {
            log::warn!("Keeping previous window: {}", err);
        }
    }

    /// Rebuild the window around the calendar day `instant` falls on in its own timezone.
    pub fn set_initial_datetime<Tz: TimeZone>(&mut self, instant: &DateTime<Tz>) {
        self.set_initial_date(local_day(instant));
    }

    /// Replace the window with a new one based on `date`, reset the selection
    /// to its start position and request an instant centring.
    pub fn try_set_initial_date(&mut self, date: NaiveDate) -> CalendarResult<()> {
        let window = DateWindow::new(date, self.settings.visible_range)?;

        self.sync.reset();
        self.outbox.clear_commands();
        self.selection = SelectionState::reset_to(window.start_position());
        self.window = Some(window);
        log::debug!(
            "Window rebuilt around {} ({} days)",
            date,
            window.total_count()
        );

        self.outbox.emit(CalendarEvent::WindowRebuilt {
            base_date: date,
            total_count: window.total_count(),
        });
        self.try_scroll_to_date_instant(date)?;
        Ok(())
    }

    // --- navigation ---

    fn context(&mut self) -> CalendarResult<(SyncContext<'_>, &mut ScrollSyncController)> {
        let window = self.window.as_ref().ok_or(CalendarError::NotInitialized)?;
        Ok((
            SyncContext {
                window,
                selection: &mut self.selection,
                outbox: &mut self.outbox,
            },
            &mut self.sync,
        ))
    }

    pub fn try_scroll_to_date_smooth(&mut self, date: NaiveDate) -> CalendarResult<RequestId> {
        let (ctx, sync) = self.context()?;
        sync.scroll_to_date_smooth(ctx, date)
    }

    pub fn try_scroll_to_date_instant(&mut self, date: NaiveDate) -> CalendarResult<RequestId> {
        let (ctx, sync) = self.context()?;
        sync.scroll_to_date_instant(ctx, date)
    }

    /// Animate to `date`. Dates outside the window are rejected with a warning.
    pub fn scroll_to_date_smooth(&mut self, date: NaiveDate) {
        if let Err(err) = self.try_scroll_to_date_smooth(date) {
            log::warn!("Smooth navigation to {} ignored: {}", date, err);
        }
    }

    /// Jump to `date`, centring it after the next layout pass.
    pub fn scroll_to_date_instant(&mut self, date: NaiveDate) {
        if let Err(err) = self.try_scroll_to_date_instant(date) {
            log::warn!("Instant navigation to {} ignored: {}", date, err);
        }
    }

    /// Navigate to an optional target; `None` is ignored.
    pub fn navigate_to(&mut self, date: Option<NaiveDate>, mode: NavigationMode) {
        let Some(date) = date else {
            log::debug!("Navigation without a target ignored");
            return;
        };
        match mode {
            NavigationMode::Smooth => self.scroll_to_date_smooth(date),
            NavigationMode::Instant => self.scroll_to_date_instant(date),
        }
    }

    /// Animate back to the base date.
    pub fn reset_to_initial_date(&mut self) {
        if let Some(base) = self.base_date() {
            self.scroll_to_date_smooth(base);
        }
    }

    // --- host callbacks ---

    pub fn on_user_scroll_started(&mut self) {
        self.sync.on_user_scroll_started(&mut self.outbox);
    }

    pub fn on_scroll_progress(&mut self, geometries: &[ItemGeometry], viewport_width: f32) {
        if let Ok((ctx, sync)) = self.context() {
            sync.on_scroll_progress(ctx, geometries, viewport_width);
        }
    }

    pub fn on_scroll_idle(&mut self) {
        if let Ok((ctx, sync)) = self.context() {
            sync.on_scroll_idle(ctx);
        }
    }

    /// The animation issued for `request` reached its target.
    pub fn on_smooth_scroll_finished(&mut self, request: RequestId) {
        if let Ok((ctx, sync)) = self.context() {
            sync.on_smooth_scroll_finished(ctx, request);
        }
    }

    pub fn on_layout_complete(
        &mut self,
        request: RequestId,
        geometries: &[ItemGeometry],
        viewport_width: f32,
    ) {
        if let Ok((ctx, sync)) = self.context() {
            sync.on_layout_complete(ctx, request, geometries, viewport_width);
        }
    }

    /// A cell was tapped: report it, and centre it when `center_on_click` is set.
    pub fn on_date_item_clicked(&mut self, position: Position) {
        let Some(window) = self.window else {
            return;
        };
        let date = match window.date_of(position) {
            Ok(date) => date,
            Err(err) => {
                log::warn!("Click ignored: {}", err);
                return;
            }
        };

        self.outbox
            .emit(CalendarEvent::DateClicked { position, date });
        if self.settings.center_on_click {
            self.scroll_to_date_smooth(date);
        }
    }

    // --- configuration ---

    pub fn set_show_week_dividers(&mut self, enabled: bool) {
        if self.settings.show_week_dividers == enabled {
            return;
        }
        self.settings.show_week_dividers = enabled;
        self.outbox.emit(CalendarEvent::DecorationsInvalidated);
    }

    /// Switch week convention. Already-rendered cells get new dividers; the
    /// window is left as it is.
    pub fn set_week_starts_on_monday(&mut self, starts_on_monday: bool) {
        if self.settings.week_starts_on_monday == starts_on_monday {
            return;
        }
        self.settings.week_starts_on_monday = starts_on_monday;
        if self.settings.show_week_dividers {
            self.outbox.emit(CalendarEvent::DecorationsInvalidated);
        }
    }

    pub fn set_scroll_speed(&mut self, millis_per_inch: f32, density_dpi: f32) {
        self.settings.scroll_millis_per_inch = millis_per_inch;
        self.settings.density_dpi = density_dpi;
        self.sync.set_speed(ScrollSpeed::from_settings(&self.settings));
    }

    pub fn set_center_on_click(&mut self, enabled: bool) {
        self.settings.center_on_click = enabled;
    }

    pub fn week_convention(&self) -> WeekConvention {
        self.settings.week_convention()
    }

    // --- rendering queries ---

    /// Whether a divider follows the cell at `position`.
    pub fn has_divider_after(&self, position: Position) -> bool {
        let Some(window) = self.window.as_ref() else {
            return false;
        };
        self.settings.show_week_dividers
            && is_week_boundary(window, position, self.week_convention()).unwrap_or(false)
    }

    pub fn date_of(&self, position: Position) -> CalendarResult<NaiveDate> {
        self.window
            .as_ref()
            .ok_or(CalendarError::NotInitialized)?
            .date_of(position)
    }

    pub fn position_of(&self, date: NaiveDate) -> CalendarResult<Position> {
        self.window
            .as_ref()
            .ok_or(CalendarError::NotInitialized)?
            .position_of(date)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection
            .current()
            .and_then(|position| self.date_of(position).ok())
    }

    /// Date the header shows: the live preview while moving, else the selection.
    pub fn header_date(&self) -> Option<NaiveDate> {
        self.selection
            .header_position()
            .and_then(|position| self.date_of(position).ok())
    }

    pub fn header_text(&self) -> Option<String> {
        self.header_date().map(format_header)
    }

    /// View data for one cell.
    pub fn cell(&self, position: Position) -> CalendarResult<DayCell> {
        let date = self.date_of(position)?;
        Ok(DayCell::new(
            position,
            date,
            self.selection.is_selected(position),
            self.has_divider_after(position),
        ))
    }

    /// View data for every in-window position in `range`.
    pub fn cells(&self, range: std::ops::RangeInclusive<Position>) -> Vec<DayCell> {
        range.filter_map(|position| self.cell(position).ok()).collect()
    }
}
