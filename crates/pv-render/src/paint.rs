//! Polygon set → screen-space draw list.
//!
//! Backends (Canvas2D, SVG) never touch view-space geometry directly: they
//! walk a `DrawList` whose paths and markers are already in surface pixels.

use crate::hit::HitTarget;
use crate::palette::{Color, custom_point_color, polygon_color};
use crate::transform::ViewTransform;
use kurbo::{BezPath, Point as ScreenPoint};
use pv_core::{Point, PolygonSet};

/// Vertex marker radius in pixels.
pub const VERTEX_RADIUS: f64 = 3.5;
/// Marker radius while hovered.
pub const HOVER_RADIUS: f64 = 5.5;
/// Custom point marker radius in pixels.
pub const CUSTOM_POINT_RADIUS: f64 = 5.0;
/// Fill opacity of closed polygons.
pub const FILL_ALPHA: f32 = 0.18;

/// One polygon outline.
#[derive(Debug, Clone)]
pub struct PolygonPaint {
    pub index: usize,
    pub path: BezPath,
    /// Fewer than three points draws as an open polyline with no fill.
    pub closed: bool,
    pub stroke: Color,
    pub fill: Option<Color>,
}

/// A vertex or custom-point disc.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub target: HitTarget,
    pub center: ScreenPoint,
    pub radius: f64,
    pub color: Color,
    pub hovered: bool,
}

/// Legend row, one per polygon in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub points: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub polygons: Vec<PolygonPaint>,
    /// Vertex markers in draw order, custom point last.
    pub markers: Vec<Marker>,
    pub legend: Vec<LegendEntry>,
}

/// Build the draw list for one frame.
pub fn build_draw_list(
    polygons: &PolygonSet,
    custom: Option<Point>,
    transform: &ViewTransform,
    hovered: Option<HitTarget>,
) -> DrawList {
    let mut list = DrawList::default();

    for (pi, poly) in polygons.iter().enumerate() {
        let color = polygon_color(pi);
        list.legend.push(LegendEntry {
            label: format!("Polygon {}", pi + 1),
            color,
            points: poly.len(),
        });

        if poly.is_empty() {
            continue;
        }

        let mut path = BezPath::new();
        for (i, p) in poly.iter().enumerate() {
            let s = transform.to_screen(p.to_view());
            if i == 0 {
                path.move_to(s);
            } else {
                path.line_to(s);
            }

            let target = HitTarget::Vertex {
                polygon: pi,
                point: i,
            };
            let is_hovered = hovered == Some(target);
            list.markers.push(Marker {
                target,
                center: s,
                radius: if is_hovered { HOVER_RADIUS } else { VERTEX_RADIUS },
                color,
                hovered: is_hovered,
            });
        }

        let closed = poly.is_closed_shape();
        if closed {
            path.close_path();
        }
        list.polygons.push(PolygonPaint {
            index: pi,
            path,
            closed,
            stroke: color,
            fill: closed.then(|| color.with_alpha(FILL_ALPHA)),
        });
    }

    if let Some(p) = custom {
        let is_hovered = hovered == Some(HitTarget::CustomPoint);
        list.markers.push(Marker {
            target: HitTarget::CustomPoint,
            center: transform.to_screen(p.to_view()),
            radius: if is_hovered {
                HOVER_RADIUS + 1.5
            } else {
                CUSTOM_POINT_RADIUS
            },
            color: custom_point_color(),
            hovered: is_hovered,
        });
    }

    log::trace!(
        "draw list: {} polygons, {} markers",
        list.polygons.len(),
        list.markers.len()
    );
    list
}
