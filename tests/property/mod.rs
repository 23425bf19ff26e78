mod center_tracker_properties;
mod date_window_properties;
