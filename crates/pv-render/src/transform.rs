//! View space ↔ surface pixels.
//!
//! The effective view is stretched over the whole drawing surface, one
//! scale per axis. This is the same per-axis scaling the drag gesture uses
//! to turn pixel deltas into view-space pan, so a dragged point stays
//! exactly under the pointer.

use kurbo::{Affine, Point as ScreenPoint};
use pv_core::{EffectiveView, ViewPoint};

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Surface {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no usable area cannot map pixels to view units.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Affine map from view space to surface pixels for one effective view.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    to_screen: Affine,
    to_view: Affine,
}

impl ViewTransform {
    /// `None` when either the view or the surface has no area.
    pub fn new(view: &EffectiveView, surface: Surface) -> Option<Self> {
        if !surface.is_usable() || !(view.width > 0.0 && view.height > 0.0) {
            return None;
        }
        let to_screen = Affine::scale_non_uniform(
            surface.width / view.width,
            surface.height / view.height,
        ) * Affine::translate((-view.min_x, -view.min_y));
        Some(Self {
            to_screen,
            to_view: to_screen.inverse(),
        })
    }

    pub fn to_screen(&self, p: ViewPoint) -> ScreenPoint {
        self.to_screen * ScreenPoint::new(p.x, p.y)
    }

    pub fn to_view(&self, p: ScreenPoint) -> ViewPoint {
        let v = self.to_view * p;
        ViewPoint::new(v.x, v.y)
    }

    /// The view → screen affine, for renderers that set it on a context.
    pub fn affine(&self) -> Affine {
        self.to_screen
    }
}
