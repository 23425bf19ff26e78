// Horizontal Calendar demo
// Drives the date strip through a headless host and prints what a renderer would receive

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Duration, Local};
use horizontal_calendar::services::headless::HeadlessStrip;
use horizontal_calendar::services::settings::{default_settings_path, load_settings};
use horizontal_calendar::HorizontalCalendar;

const CELL_WIDTH: f32 = 48.0;
const VIEWPORT_WIDTH: f32 = 360.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_settings_path);
    let settings = load_settings(&settings_path)?;
    log::info!(
        "Starting Horizontal Calendar demo (visible_range={}, settings={})",
        settings.visible_range,
        settings_path.display()
    );

    let today = Local::now().date_naive();
    let mut calendar = HorizontalCalendar::new(settings);
    let mut strip = HeadlessStrip::new(CELL_WIDTH, VIEWPORT_WIDTH);

    calendar.set_initial_datetime(&Local::now());
    strip.run_until_settled(&mut calendar);
    flush(&mut calendar, "initial centring")?;

    strip.drag(&mut calendar, CELL_WIDTH * 3.4, 8);
    strip.release(&mut calendar);
    flush(&mut calendar, "drag three days forward")?;

    strip.tap(&mut calendar, VIEWPORT_WIDTH / 2.0 - CELL_WIDTH);
    strip.run_until_settled(&mut calendar);
    flush(&mut calendar, "tap the previous day")?;

    calendar.scroll_to_date_smooth(today + Duration::days(10));
    strip.run_frames(&mut calendar, 2);
    calendar.scroll_to_date_instant(today - Duration::days(5));
    strip.run_until_settled(&mut calendar);
    flush(&mut calendar, "smooth navigation superseded by a jump")?;

    calendar.reset_to_initial_date();
    strip.run_until_settled(&mut calendar);
    flush(&mut calendar, "back to today")?;

    if let Some(header) = calendar.header_text() {
        println!("header: {}", header);
    }
    Ok(())
}

fn flush(calendar: &mut HorizontalCalendar, step: &str) -> Result<()> {
    println!("# {}", step);
    for event in calendar.take_events() {
        println!("{}", event.to_json()?);
    }
    Ok(())
}
