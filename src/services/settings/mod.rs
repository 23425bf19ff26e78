// Settings persistence
// TOML-backed storage for CalendarSettings

mod service;

pub use service::{default_settings_path, load_settings, parse_settings, save_settings};
