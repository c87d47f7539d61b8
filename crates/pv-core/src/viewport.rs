//! Viewport model: fit rectangle, view box, and the effective view.
//!
//! All rectangles here live in view space (see [`Point::to_view`]). The
//! pipeline is
//!
//! ```text
//! PolygonSet ∪ {custom point} ──compute_bounds──▶ BoundingRect
//!                              ──compute_view_box──▶ ViewBox
//! ViewBox + zoom + pan ──compute_effective_view──▶ EffectiveView
//! ```
//!
//! Only the `EffectiveView` is ever handed to a renderer.

use crate::model::{Point, PolygonSet};
use serde::{Deserialize, Serialize};

/// Bounds used when there is no geometry at all.
pub const DEFAULT_BOUNDS: BoundingRect = BoundingRect {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 100.0,
    max_y: 100.0,
};

/// Margin added on every side when all geometry collapses to one point.
pub const DEGENERATE_MARGIN: f64 = 5.0;

/// Padding as a fraction of the larger bounds dimension.
pub const PADDING_RATIO: f64 = 0.1;

/// Axis-aligned rectangle in view space, stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingRect {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Grow by `amount` on every side.
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }
}

/// Running min/max accumulator.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Extent {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(mut self, p: Point) -> Self {
        let v = p.to_view();
        self.min_x = self.min_x.min(v.x);
        self.min_y = self.min_y.min(v.y);
        self.max_x = self.max_x.max(v.x);
        self.max_y = self.max_y.max(v.y);
        self
    }

    fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }
}

/// Fit a padded rectangle around every polygon point and the custom point.
///
/// Pure and deterministic. With no geometry at all the result is
/// [`DEFAULT_BOUNDS`]. When everything sits on a single location the box is
/// first widened by [`DEGENERATE_MARGIN`]; padding of
/// `max(width, height) * PADDING_RATIO` is then added on every side. An
/// extent too large or too far out to measure in `f64` also falls back to
/// [`DEFAULT_BOUNDS`].
pub fn compute_bounds(polygons: &PolygonSet, custom_point: Option<Point>) -> BoundingRect {
    let extent = polygons
        .points()
        .map(|p| p.value)
        .chain(custom_point)
        .fold(Extent::empty(), Extent::include);

    if extent.is_empty() {
        return DEFAULT_BOUNDS;
    }

    let mut rect = BoundingRect {
        min_x: extent.min_x,
        min_y: extent.min_y,
        max_x: extent.max_x,
        max_y: extent.max_y,
    };

    if rect.width() == 0.0 && rect.height() == 0.0 {
        rect = rect.inflate(DEGENERATE_MARGIN);
    }

    let padding = rect.width().max(rect.height()) * PADDING_RATIO;
    let padded = rect.inflate(padding);

    // Coordinates near the f64 limits overflow the extent or absorb the margin.
    if !(padded.width().is_finite() && padded.height().is_finite())
        || padded.width() <= 0.0
        || padded.height() <= 0.0
    {
        log::warn!("bounds {padded:?} are not representable, using defaults");
        return DEFAULT_BOUNDS;
    }
    padded
}

/// The fitted rectangle mapped onto the full drawing surface before zoom
/// and pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        compute_view_box(DEFAULT_BOUNDS)
    }
}

/// Derive the view box from fitted bounds.
///
/// Callers that hold a pan offset must reset it whenever the view box is
/// recomputed; a pan measured against a stale box is meaningless.
pub fn compute_view_box(bounds: BoundingRect) -> ViewBox {
    ViewBox {
        min_x: bounds.min_x,
        min_y: bounds.min_y,
        width: bounds.width(),
        height: bounds.height(),
    }
}

/// Accumulated drag translation in view-space units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

/// The view box after zoom scaling and pan translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveView {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl EffectiveView {
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}

/// Compose view box, zoom, and pan.
///
/// `zoom` is expected to be positive (the interaction layer clamps it);
/// a non-positive or non-finite zoom is treated as `1`.
pub fn compute_effective_view(view_box: ViewBox, zoom: f64, pan: PanOffset) -> EffectiveView {
    let zoom = if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        log::warn!("unusable zoom {zoom}, falling back to 1");
        1.0
    };

    EffectiveView {
        min_x: view_box.min_x + pan.x,
        min_y: view_box.min_y + pan.y,
        width: view_box.width / zoom,
        height: view_box.height / zoom,
    }
}
