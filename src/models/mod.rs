// Module exports for models

pub mod date_window;
pub mod event;
pub mod geometry;
pub mod settings;
pub mod week;
