// Smooth-scroll speed
// Density-independent speed: a fixed time per inch, converted to time per pixel

use std::time::Duration;

use crate::models::settings::CalendarSettings;

/// Baseline display density (one density-independent pixel per physical pixel).
pub const BASELINE_DPI: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpeed {
    millis_per_inch: f32,
    density_dpi: f32,
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self::new(100.0, BASELINE_DPI)
    }
}

impl ScrollSpeed {
    /// Non-positive or non-finite inputs fall back to the defaults.
    pub fn new(millis_per_inch: f32, density_dpi: f32) -> Self {
        let millis_per_inch = if millis_per_inch.is_finite() && millis_per_inch > 0.0 {
            millis_per_inch
        } else {
            log::warn!("Ignoring invalid scroll speed {} ms/inch", millis_per_inch);
            100.0
        };
        let density_dpi = if density_dpi.is_finite() && density_dpi > 0.0 {
            density_dpi
        } else {
            log::warn!("Ignoring invalid display density {} dpi", density_dpi);
            BASELINE_DPI
        };

        Self {
            millis_per_inch,
            density_dpi,
        }
    }

    pub fn from_settings(settings: &CalendarSettings) -> Self {
        Self::new(settings.scroll_millis_per_inch, settings.density_dpi)
    }

    pub fn millis_per_inch(&self) -> f32 {
        self.millis_per_inch
    }

    pub fn density_dpi(&self) -> f32 {
        self.density_dpi
    }

    /// Milliseconds per physical pixel. Denser screens travel more pixels per
    /// inch, so each pixel takes less time and the animation lasts the same.
    pub fn millis_per_pixel(&self) -> f32 {
        self.millis_per_inch / self.density_dpi
    }

    /// Expected animation length for a travel of `distance_px` pixels.
    pub fn duration_for(&self, distance_px: f32) -> Duration {
        let millis = (distance_px.abs() * self.millis_per_pixel()).round();
        Duration::from_millis(millis as u64)
    }
}
