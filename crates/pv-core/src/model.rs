//! Core data model for polygon documents.
//!
//! A document is an ordered list of polygons, each an ordered list of
//! `{x, z}` points. Order is meaningful: polygon order drives colour
//! assignment and legend order, point order is the connect order.
//!
//! `z` is a world/depth coordinate, not a screen axis. The single place
//! that decides how `z` maps onto the vertical view axis is
//! [`Point::to_view`]; every other component goes through it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Points ──────────────────────────────────────────────────────────────

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Map into view space. `z` grows downward: `view.y == z`.
    pub const fn to_view(self) -> ViewPoint {
        ViewPoint {
            x: self.x,
            y: self.z,
        }
    }
}

/// A point in view space (after the axis mapping).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Inverse of [`Point::to_view`].
    pub const fn to_data(self) -> Point {
        Point {
            x: self.x,
            z: self.y,
        }
    }
}

// ─── Polygons ────────────────────────────────────────────────────────────

/// An ordered sequence of points. Fewer than three points is degenerate:
/// kept as-is, but not drawn as a closed shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub points: SmallVec<[Point; 8]>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon has enough points to be drawn as a closed shape.
    pub fn is_closed_shape(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// The full parsed document. Replaced wholesale on every successful parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

/// A point together with its position in the set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    pub polygon: usize,
    pub point: usize,
    pub value: Point,
}

impl PolygonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }

    /// Every point of every polygon, in draw order.
    pub fn points(&self) -> impl Iterator<Item = IndexedPoint> + '_ {
        self.polygons.iter().enumerate().flat_map(|(pi, poly)| {
            poly.points
                .iter()
                .enumerate()
                .map(move |(i, p)| IndexedPoint {
                    polygon: pi,
                    point: i,
                    value: *p,
                })
        })
    }

    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}

// ─── Custom point input ──────────────────────────────────────────────────

/// One numeric text field: the raw text as typed, plus its parsed value
/// when the text is a finite number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordField {
    pub raw: String,
    pub parsed: Option<f64>,
}

impl CoordField {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_coord(&raw);
        Self { raw, parsed }
    }
}

/// Parse a coordinate entry. Empty, non-numeric, and non-finite text
/// (`inf`, `NaN`) all yield `None`.
pub fn parse_coord(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Which coordinate field an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// The pair of coordinate fields backing the optional custom point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomPointInput {
    pub x: CoordField,
    pub z: CoordField,
}

impl CustomPointInput {
    pub fn new(x: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: CoordField::new(x),
            z: CoordField::new(z),
        }
    }

    /// Replace one field's raw text.
    pub fn set(&mut self, axis: Axis, raw: impl Into<String>) {
        match axis {
            Axis::X => self.x = CoordField::new(raw),
            Axis::Z => self.z = CoordField::new(raw),
        }
    }

    /// The custom point, present only when both fields hold finite numbers.
    pub fn point(&self) -> Option<Point> {
        Some(Point::new(self.x.parsed?, self.z.parsed?))
    }
}
