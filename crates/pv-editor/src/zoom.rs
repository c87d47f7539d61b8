//! Stepped, clamped zoom.

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
pub const ZOOM_STEP: f64 = 1.5;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// One step in, capped at [`MAX_ZOOM`].
pub fn zoom_in(current: f64) -> f64 {
    (current * ZOOM_STEP).min(MAX_ZOOM)
}

/// One step out, floored at [`MIN_ZOOM`].
pub fn zoom_out(current: f64) -> f64 {
    (current / ZOOM_STEP).max(MIN_ZOOM)
}

/// One step per wheel notch: scrolling up zooms in.
pub fn zoom_for_wheel(current: f64, dy: f64) -> f64 {
    if dy < 0.0 {
        zoom_in(current)
    } else if dy > 0.0 {
        zoom_out(current)
    } else {
        current
    }
}
