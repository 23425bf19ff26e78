//! Headless host for the date strip.
//!
//! Lays out fixed-width cells along a single scroll offset, carries out the
//! [`ScrollCommand`]s the calendar issues and feeds the resulting progress,
//! idle and post-layout callbacks back, one simulated frame at a time. Gives
//! the demo binary and the integration tests a deterministic rendering surface.
//!
//! The strip behaves as if padded by half a viewport on each side, so the
//! first and last cells can be centred.

use crate::models::date_window::Position;
use crate::models::event::{RequestId, ScrollCommand};
use crate::models::geometry::ItemGeometry;
use crate::services::calendar::HorizontalCalendar;
use crate::services::center_tracker::{nearest_geometry, snap_distance};

/// Simulated frame length.
pub const FRAME_MILLIS: f32 = 16.0;

/// Upper bound on frames per [`HeadlessStrip::run_until_settled`] call.
const MAX_FRAMES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    request: RequestId,
    from: f32,
    to: f32,
    elapsed_ms: f32,
    duration_ms: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessStrip {
    item_width: f32,
    viewport_width: f32,
    total: usize,
    /// Content x-coordinate at the viewport's left edge.
    offset: f32,
    animation: Option<Animation>,
}

impl HeadlessStrip {
    pub fn new(item_width: f32, viewport_width: f32) -> Self {
        Self {
            item_width,
            viewport_width,
            total: 0,
            offset: 0.0,
            animation: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset at which `position` sits exactly in the middle of the viewport.
    pub fn centered_offset(&self, position: Position) -> f32 {
        position as f32 * self.item_width + self.item_width / 2.0 - self.viewport_width / 2.0
    }

    /// Geometry of every cell at least partly inside the viewport.
    pub fn layout(&self) -> Vec<ItemGeometry> {
        if self.total == 0 || self.item_width <= 0.0 {
            return Vec::new();
        }

        let first = (self.offset / self.item_width).floor().max(0.0) as usize;
        let last = ((self.offset + self.viewport_width) / self.item_width).ceil();
        let last = (last.max(0.0) as usize).min(self.total);

        (first..last)
            .map(|position| {
                let left = position as f32 * self.item_width - self.offset;
                ItemGeometry::new(position, left, left + self.item_width)
            })
            .filter(|geometry| geometry.right_edge > 0.0 && geometry.left_edge < self.viewport_width)
            .collect()
    }

    /// Position currently under the viewport centre.
    pub fn centered_position(&self) -> Option<Position> {
        nearest_geometry(&self.layout(), self.viewport_width).map(|geometry| geometry.position)
    }

    /// Execute queued commands and animate until nothing is left to do.
    /// Returns the number of animation frames produced.
    pub fn run_until_settled(&mut self, calendar: &mut HorizontalCalendar) -> usize {
        let mut frames = 0;
        loop {
            self.total = calendar.total_count();

            if let Some(command) = calendar.next_command() {
                self.execute(calendar, command);
                continue;
            }

            if self.animation.is_some() && frames < MAX_FRAMES {
                self.step(calendar);
                frames += 1;
                continue;
            }

            break;
        }
        frames
    }

    /// Execute queued commands and advance at most `frames` animation frames.
    pub fn run_frames(&mut self, calendar: &mut HorizontalCalendar, frames: usize) {
        self.total = calendar.total_count();
        while let Some(command) = calendar.next_command() {
            self.execute(calendar, command);
        }
        for _ in 0..frames {
            if self.animation.is_none() {
                break;
            }
            self.step(calendar);
        }
    }

    /// Simulate a finger dragging the content `dx` pixels to the left over `steps` frames.
    pub fn drag(&mut self, calendar: &mut HorizontalCalendar, dx: f32, steps: usize) {
        self.total = calendar.total_count();
        self.animation = None;
        calendar.on_user_scroll_started();

        let steps = steps.max(1);
        for _ in 0..steps {
            self.offset += dx / steps as f32;
            self.report_progress(calendar);
        }
    }

    /// Lift the finger: snap the nearest cell to the centre, then report idle.
    pub fn release(&mut self, calendar: &mut HorizontalCalendar) {
        let layout = self.layout();
        if let Some(geometry) = nearest_geometry(&layout, self.viewport_width) {
            let dx = snap_distance(geometry, self.viewport_width);
            if dx != 0.0 {
                self.offset += dx;
                self.report_progress(calendar);
            }
        }
        calendar.on_scroll_idle();
    }

    /// Tap at viewport x-coordinate `x`. Returns the tapped position, if any.
    pub fn tap(&mut self, calendar: &mut HorizontalCalendar, x: f32) -> Option<Position> {
        let position = self
            .layout()
            .into_iter()
            .find(|geometry| geometry.contains_x(x))
            .map(|geometry| geometry.position)?;
        calendar.on_date_item_clicked(position);
        Some(position)
    }

    fn execute(&mut self, calendar: &mut HorizontalCalendar, command: ScrollCommand) {
        match command {
            ScrollCommand::JumpTo { request, position } => {
                // A jump cancels any running animation and lays the target out at the leading edge
                self.animation = None;
                self.offset = position as f32 * self.item_width;
                calendar.on_layout_complete(request, &self.layout(), self.viewport_width);
            }
            ScrollCommand::ScrollBy { dx } => {
                self.offset += dx;
                self.report_progress(calendar);
            }
            ScrollCommand::SmoothScrollTo {
                request,
                position,
                millis_per_pixel,
                ..
            } => {
                let to = self.centered_offset(position);
                self.animation = Some(Animation {
                    request,
                    from: self.offset,
                    to,
                    elapsed_ms: 0.0,
                    duration_ms: (to - self.offset).abs() * millis_per_pixel,
                });
            }
        }
    }

    fn step(&mut self, calendar: &mut HorizontalCalendar) {
        let Some(mut animation) = self.animation else {
            return;
        };

        animation.elapsed_ms += FRAME_MILLIS;
        let progress = if animation.duration_ms <= 0.0 {
            1.0
        } else {
            (animation.elapsed_ms / animation.duration_ms).min(1.0)
        };
        self.offset = animation.from + (animation.to - animation.from) * progress;
        self.report_progress(calendar);

        if progress >= 1.0 {
            self.offset = animation.to;
            self.animation = None;
            calendar.on_smooth_scroll_finished(animation.request);
            calendar.on_scroll_idle();
        } else {
            self.animation = Some(animation);
        }
    }

    fn report_progress(&self, calendar: &mut HorizontalCalendar) {
        let layout = self.layout();
        calendar.on_scroll_progress(&layout, self.viewport_width);
    }
}
