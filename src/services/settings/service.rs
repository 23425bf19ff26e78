use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CalendarSettings;

const SETTINGS_FILE: &str = "horizontal-calendar.toml";

/// Default location of the settings file in the platform config directory.
pub fn default_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "HorizontalCalendar", "HorizontalCalendar") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}

/// Load settings from `path`. A missing file yields the defaults; keys
/// absent from the file keep their default values.
pub fn load_settings(path: &Path) -> Result<CalendarSettings> {
    if !path.exists() {
        log::debug!("No settings at {}; using defaults", path.display());
        return Ok(CalendarSettings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings = parse_settings(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    Ok(settings)
}

pub fn parse_settings(data: &str) -> Result<CalendarSettings> {
    let settings: CalendarSettings = toml::from_str(data)?;
    validate(&settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &CalendarSettings) -> Result<()> {
    validate(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}

fn validate(settings: &CalendarSettings) -> Result<()> {
    if !(settings.scroll_millis_per_inch.is_finite() && settings.scroll_millis_per_inch > 0.0) {
        bail!(
            "scroll_millis_per_inch must be positive, got {}",
            settings.scroll_millis_per_inch
        );
    }
    if !(settings.density_dpi.is_finite() && settings.density_dpi > 0.0) {
        bail!("density_dpi must be positive, got {}", settings.density_dpi);
    }
    Ok(())
}
