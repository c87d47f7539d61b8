//! Hover tooltip for vertices and the custom point.

use pv_core::Point;
use serde::Serialize;

/// Offset from the pointer to the tooltip's anchor, in pixels.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);

/// Tooltip as the host should display it. Position is relative to the
/// drawing surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub content: String,
}

/// Show a tooltip for `point`, labelled with where it came from.
pub fn hover(point: Point, label: &str, pointer_x: f64, pointer_y: f64) -> TooltipState {
    TooltipState {
        visible: true,
        x: pointer_x + TOOLTIP_OFFSET.0,
        y: pointer_y + TOOLTIP_OFFSET.1,
        content: format!("{label}\nx: {:.3}, z: {:.3}", point.x, point.z),
    }
}

pub fn leave() -> TooltipState {
    TooltipState::default()
}
