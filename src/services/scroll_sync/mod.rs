//! Scroll synchronisation.
//!
//! Reconciles scroll callbacks from the host with programmatic navigation.
//! Everything runs on the UI thread: navigation calls return at once and the
//! controller picks the work back up from later progress, idle and
//! post-layout callbacks, delivered in the order the host produced them.
//!
//! A new navigation request supersedes any request still in flight. Each
//! request carries a [`RequestId`]; callbacks for a superseded request are
//! dropped so a stale position is never committed.

mod speed;

pub use speed::{ScrollSpeed, BASELINE_DPI};

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::models::date_window::{DateWindow, Position};
use crate::models::event::{CalendarEvent, Outbox, RequestId, ScrollCommand, SnapPreference};
use crate::models::geometry::ItemGeometry;
use crate::services::center_tracker::{find_geometry, nearest_position, snap_distance};
use crate::services::selection::SelectionState;

/// Residual offsets smaller than this are treated as already centred.
const SNAP_TOLERANCE_PX: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    /// Drag or fling driven by the user.
    ScrollingUser,
    /// Animated navigation in flight.
    ScrollingProgrammatic { request: RequestId, target: Position },
    /// Jump issued; waiting for the next layout pass to centre and commit.
    SnappingInstant { request: RequestId, target: Position },
}

impl SyncState {
    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            Self::ScrollingProgrammatic { request, .. } | Self::SnappingInstant { request, .. } => {
                Some(*request)
            }
            Self::Idle | Self::ScrollingUser => None,
        }
    }

    pub fn pending_target(&self) -> Option<Position> {
        match self {
            Self::ScrollingProgrammatic { target, .. } | Self::SnappingInstant { target, .. } => {
                Some(*target)
            }
            Self::Idle | Self::ScrollingUser => None,
        }
    }
}

/// Everything a controller step may read or update.
pub struct SyncContext<'a> {
    pub window: &'a DateWindow,
    pub selection: &'a mut SelectionState,
    pub outbox: &'a mut Outbox,
}

#[derive(Debug, Default)]
pub struct ScrollSyncController {
    state: SyncState,
    last_request: u64,
    speed: ScrollSpeed,
    /// Centred position from the most recent progress tick.
    last_centered: Option<Position>,
}

impl ScrollSyncController {
    pub fn new(speed: ScrollSpeed) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SyncState::Idle
    }

    pub fn speed(&self) -> ScrollSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: ScrollSpeed) {
        self.speed = speed;
    }

    /// Drop all in-flight work, e.g. when the window is rebuilt.
    pub fn reset(&mut self) {
        if let Some(request) = self.state.pending_request() {
            log::debug!("Discarding navigation {:?} on reset", request);
        }
        self.state = SyncState::Idle;
        self.last_centered = None;
    }

    fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    fn supersede(&mut self, outbox: &mut Outbox) {
        if let Some(request) = self.state.pending_request() {
            log::debug!("Navigation {:?} superseded", request);
        }
        // Commands the host has not picked up yet belong to the old request
        outbox.clear_commands();
        self.last_centered = None;
    }

    /// Start an animated scroll that centres `date`.
    pub fn scroll_to_date_smooth(
        &mut self,
        ctx: SyncContext<'_>,
        date: NaiveDate,
    ) -> CalendarResult<RequestId> {
        let target = ctx.window.position_of(date)?;
        self.scroll_to_position_smooth(ctx, target)
    }

    pub fn scroll_to_position_smooth(
        &mut self,
        ctx: SyncContext<'_>,
        target: Position,
    ) -> CalendarResult<RequestId> {
        ensure_in_window(ctx.window, target)?;
        self.supersede(ctx.outbox);

        let request = self.next_request();
        ctx.outbox.issue(ScrollCommand::SmoothScrollTo {
            request,
            position: target,
            millis_per_pixel: self.speed.millis_per_pixel(),
            snap: SnapPreference::Any,
        });
        self.state = SyncState::ScrollingProgrammatic { request, target };
        log::debug!("Smooth navigation {:?} to position {}", request, target);
        Ok(request)
    }

    /// Jump to `date` without animation; centring and commit happen on the
    /// next [`on_layout_complete`](Self::on_layout_complete).
    pub fn scroll_to_date_instant(
        &mut self,
        ctx: SyncContext<'_>,
        date: NaiveDate,
    ) -> CalendarResult<RequestId> {
        let target = ctx.window.position_of(date)?;
        self.scroll_to_position_instant(ctx, target)
    }

    pub fn scroll_to_position_instant(
        &mut self,
        ctx: SyncContext<'_>,
        target: Position,
    ) -> CalendarResult<RequestId> {
        ensure_in_window(ctx.window, target)?;
        self.supersede(ctx.outbox);

        let request = self.next_request();
        ctx.outbox.issue(ScrollCommand::JumpTo {
            request,
            position: target,
        });
        self.state = SyncState::SnappingInstant { request, target };
        log::debug!("Instant navigation {:?} to position {}", request, target);
        Ok(request)
    }

    /// The user put a finger on the strip. Touch wins over any navigation in flight.
    pub fn on_user_scroll_started(&mut self, outbox: &mut Outbox) {
        if self.state.pending_request().is_some() {
            self.supersede(outbox);
        }
        self.state = SyncState::ScrollingUser;
    }

    /// Per-frame hook while content moves. Updates the header preview only;
    /// the committed selection never changes here.
    pub fn on_scroll_progress(
        &mut self,
        ctx: SyncContext<'_>,
        geometries: &[ItemGeometry],
        viewport_width: f32,
    ) {
        let Some(position) = nearest_position(geometries, viewport_width) else {
            return;
        };
        // Only a user scroll commits what ends up centred; programmatic and
        // settling motion just moves the header.
        if self.state == SyncState::ScrollingUser {
            self.last_centered = Some(position);
        }

        match ctx.selection.update_preview(position, ctx.window) {
            Ok(Some(date)) => ctx
                .outbox
                .emit(CalendarEvent::HeaderPreview { position, date }),
            Ok(None) => {}
            Err(err) => log::debug!("Ignoring progress for unknown cell: {}", err),
        }
    }

    /// Motion stopped. Commits the cell a user scroll left centred.
    ///
    /// Programmatic navigation is settled by its own tagged callbacks, so an
    /// idle that arrives while one is pending cannot tell whose motion ended
    /// and is ignored.
    pub fn on_scroll_idle(&mut self, ctx: SyncContext<'_>) {
        match self.state {
            SyncState::ScrollingProgrammatic { request, .. } => {
                log::debug!("Ignoring idle while {:?} is animating", request);
            }
            SyncState::SnappingInstant { request, .. } => {
                log::debug!("Ignoring stale idle while {:?} awaits layout", request);
            }
            SyncState::ScrollingUser | SyncState::Idle => {
                self.state = SyncState::Idle;
                if let Some(position) = self.last_centered.take() {
                    commit(ctx, position);
                }
            }
        }
    }

    /// The host finished the animation started by `request`.
    pub fn on_smooth_scroll_finished(&mut self, ctx: SyncContext<'_>, request: RequestId) {
        let SyncState::ScrollingProgrammatic {
            request: pending,
            target,
        } = self.state
        else {
            log::debug!("Ignoring completion of {:?}: no animation pending", request);
            return;
        };
        if pending != request {
            log::debug!("Ignoring completion of superseded {:?}", request);
            return;
        }

        // Commit the requested position itself rather than re-deriving it
        // from geometry, which may be a pixel off.
        log::debug!("Navigation {:?} settled on {}", request, target);
        self.finish(ctx, target);
    }

    /// Post-layout hook for an instant jump. Centres the target exactly and
    /// commits it. If the target was not laid out the jump is abandoned
    /// without committing; the caller may retry.
    pub fn on_layout_complete(
        &mut self,
        ctx: SyncContext<'_>,
        request: RequestId,
        geometries: &[ItemGeometry],
        viewport_width: f32,
    ) {
        let SyncState::SnappingInstant {
            request: pending,
            target,
        } = self.state
        else {
            log::debug!("Ignoring layout for {:?}: no jump pending", request);
            return;
        };
        if pending != request {
            log::debug!("Ignoring layout for superseded {:?}", request);
            return;
        }

        let Some(geometry) = find_geometry(geometries, target) else {
            log::debug!(
                "Abandoning {:?}: {}",
                request,
                CalendarError::MissingGeometry { position: target }
            );
            self.state = SyncState::Idle;
            self.last_centered = None;
            return;
        };

        let dx = snap_distance(geometry, viewport_width);
        if dx.abs() >= SNAP_TOLERANCE_PX {
            ctx.outbox.issue(ScrollCommand::ScrollBy { dx });
        }
        self.finish(ctx, target);
    }

    fn finish(&mut self, ctx: SyncContext<'_>, target: Position) {
        self.state = SyncState::Idle;
        self.last_centered = None;
        commit(ctx, target);
    }
}

fn ensure_in_window(window: &DateWindow, position: Position) -> CalendarResult<()> {
    if window.contains_position(position) {
        Ok(())
    } else {
        Err(CalendarError::IndexOutOfRange {
            position,
            total: window.total_count(),
        })
    }
}

fn commit(ctx: SyncContext<'_>, position: Position) {
    match ctx.selection.set_selected(position, ctx.window) {
        Ok(change) => ctx.outbox.emit(change.into()),
        Err(err) => log::warn!("Selection not committed: {}", err),
    }
}
