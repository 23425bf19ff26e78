// Service module exports

pub mod calendar;
pub mod center_tracker;
pub mod headless;
pub mod scroll_sync;
pub mod selection;
pub mod settings;
pub mod week_boundary;
