//! Hit testing: screen position → vertex or custom point.
//!
//! Walks markers front-to-back (reverse draw order) and returns the first
//! one whose on-screen disc contains the pointer. The custom point is
//! drawn last, so it is checked first.

use crate::transform::ViewTransform;
use kurbo::Point as ScreenPoint;
use pv_core::{Point, PolygonSet};
use serde::Serialize;
use std::fmt;

/// Pointer tolerance around a vertex, in CSS pixels.
pub const VERTEX_HIT_RADIUS: f64 = 6.0;

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HitTarget {
    Vertex { polygon: usize, point: usize },
    CustomPoint,
}

impl fmt::Display for HitTarget {
    /// One-based label, as shown in tooltips.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex { polygon, point } => {
                write!(f, "Polygon {}, Point {}", polygon + 1, point + 1)
            }
            Self::CustomPoint => write!(f, "Custom Point"),
        }
    }
}

impl HitTarget {
    /// The data-space location of this target, if it still exists.
    pub fn resolve(&self, polygons: &PolygonSet, custom: Option<Point>) -> Option<Point> {
        match *self {
            Self::Vertex { polygon, point } => polygons
                .polygons
                .get(polygon)
                .and_then(|poly| poly.points.get(point))
                .copied(),
            Self::CustomPoint => custom,
        }
    }
}

/// Find the topmost marker within `radius` pixels of `pointer`.
pub fn hit_test(
    polygons: &PolygonSet,
    custom: Option<Point>,
    transform: &ViewTransform,
    pointer: ScreenPoint,
    radius: f64,
) -> Option<HitTarget> {
    let near = |p: Point| transform.to_screen(p.to_view()).distance(pointer) <= radius;

    if custom.is_some_and(|p| near(p)) {
        return Some(HitTarget::CustomPoint);
    }

    for (pi, poly) in polygons.polygons.iter().enumerate().rev() {
        for (i, p) in poly.points.iter().enumerate().rev() {
            if near(*p) {
                log::trace!("hit polygon {pi} point {i}");
                return Some(HitTarget::Vertex {
                    polygon: pi,
                    point: i,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Surface;
    use pv_core::{EffectiveView, parse_polygons};

    /// 1 view unit == 2 pixels, origin at the surface's top-left.
    fn transform() -> ViewTransform {
        let view = EffectiveView {
            min_x: 0.0,
            min_y: 0.0,
            width: 100.0,
            height: 100.0,
        };
        ViewTransform::new(&view, Surface::new(200.0, 200.0)).unwrap()
    }

    #[test]
    fn hit_vertex_within_radius() {
        let set = parse_polygons(r#"[[{"x": 10, "z": 20}, {"x": 50, "z": 50}]]"#).unwrap();
        let hit = hit_test(
            &set,
            None,
            &transform(),
            ScreenPoint::new(23.0, 41.0),
            VERTEX_HIT_RADIUS,
        );
        assert_eq!(
            hit,
            Some(HitTarget::Vertex {
                polygon: 0,
                point: 0
            })
        );
    }

    #[test]
    fn miss_outside_radius() {
        let set = parse_polygons(r#"[[{"x": 10, "z": 20}]]"#).unwrap();
        let hit = hit_test(
            &set,
            None,
            &transform(),
            ScreenPoint::new(40.0, 40.0),
            VERTEX_HIT_RADIUS,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn topmost_wins() {
        // Both polygons share a vertex; the later one is drawn on top.
        let set = parse_polygons(r#"[[{"x": 10, "z": 10}], [{"x": 10, "z": 10}]]"#).unwrap();
        let pointer = ScreenPoint::new(20.0, 20.0);
        assert_eq!(
            hit_test(&set, None, &transform(), pointer, VERTEX_HIT_RADIUS),
            Some(HitTarget::Vertex {
                polygon: 1,
                point: 0
            })
        );
        assert_eq!(
            hit_test(
                &set,
                Some(Point::new(10.0, 10.0)),
                &transform(),
                pointer,
                VERTEX_HIT_RADIUS
            ),
            Some(HitTarget::CustomPoint)
        );
    }

    #[test]
    fn labels_are_one_based() {
        let t = HitTarget::Vertex {
            polygon: 0,
            point: 2,
        };
        assert_eq!(t.to_string(), "Polygon 1, Point 3");
        assert_eq!(HitTarget::CustomPoint.to_string(), "Custom Point");
    }

    #[test]
    fn resolve_stale_target() {
        let set = parse_polygons(r#"[[{"x": 1, "z": 2}]]"#).unwrap();
        let t = HitTarget::Vertex {
            polygon: 0,
            point: 0,
        };
        assert_eq!(t.resolve(&set, None), Some(Point::new(1.0, 2.0)));
        let gone = HitTarget::Vertex {
            polygon: 3,
            point: 0,
        };
        assert_eq!(gone.resolve(&set, None), None);
        assert_eq!(HitTarget::CustomPoint.resolve(&set, None), None);
    }
}
