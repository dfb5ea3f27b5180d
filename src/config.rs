use serde::Deserialize;

use crate::types::gradient::{GradientMode, TrafficPalette};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Perpendicular distance beyond which a position no longer counts as
    /// on-route.
    pub off_route_threshold_meters: f64,
    /// Number of indexed points preceding the cursor used for the off-route
    /// projection window.
    pub off_route_window_size: usize,
    pub gradient_mode: GradientMode,
    /// Fading distance for soft-mode color transitions.
    pub fade_distance_meters: f64,
    /// Movement below this many screen pixels of ground distance at the
    /// current zoom is ignored.
    pub jitter_pixel_threshold: f64,
    pub palette: TrafficPalette,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            off_route_threshold_meters: 15.0,
            off_route_window_size: 10,
            gradient_mode: GradientMode::Hard,
            fade_distance_meters: 30.0,
            jitter_pixel_threshold: 1.0,
            palette: TrafficPalette::default(),
        }
    }
}
