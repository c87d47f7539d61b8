//! Parser/validator for the polygon text format → `PolygonSet`.
//!
//! Input is a JSON array of arrays of `{ "x": number, "z": number }`
//! objects. Syntax is handled by `serde_json`; the structural and field
//! checks run over the resulting `Value` tree so that every failure can
//! name the offending polygon and point. Nothing partial is ever
//! returned: either the whole set validates or the caller gets an error.

use crate::model::{Point, Polygon, PolygonSet};
use serde_json::Value;
use thiserror::Error;

/// Why a document failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not valid JSON. Carries the underlying parser's message.
    #[error("Invalid JSON: {0}")]
    Syntax(String),

    /// Valid JSON, but the top-level value is not an array.
    #[error("Input must be an array of polygons")]
    NotAnArray,

    /// A top-level element is not an array of points.
    #[error("Polygon {index} must be an array of points")]
    PolygonNotArray { index: usize },

    /// A point lacks `x` or `z`, or one of them is not a finite number.
    #[error("Point {point} of polygon {polygon} must have numeric \"x\" and \"z\" fields")]
    MissingOrNonNumericField { polygon: usize, point: usize },
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Structural,
    Field,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::NotAnArray | Self::PolygonNotArray { .. } => ErrorKind::Structural,
            Self::MissingOrNonNumericField { .. } => ErrorKind::Field,
        }
    }
}

/// Parse a polygon document.
///
/// Empty or whitespace-only text is an empty set, not an error.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first check that failed.
#[must_use = "parsing result should be used"]
pub fn parse_polygons(input: &str) -> Result<PolygonSet, ParseError> {
    if input.trim().is_empty() {
        return Ok(PolygonSet::new());
    }

    let value: Value =
        serde_json::from_str(input).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseError::NotAnArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_polygon(index, item))
        .collect()
}

fn parse_polygon(index: usize, value: &Value) -> Result<Polygon, ParseError> {
    let Value::Array(points) = value else {
        return Err(ParseError::PolygonNotArray { index });
    };

    points
        .iter()
        .enumerate()
        .map(|(point, item)| {
            parse_point(item).ok_or(ParseError::MissingOrNonNumericField {
                polygon: index,
                point,
            })
        })
        .collect()
}

/// `None` when either field is absent or not a finite number.
/// Non-object values have no fields, so they fail here too.
fn parse_point(value: &Value) -> Option<Point> {
    let x = finite_number(value.get("x")?)?;
    let z = finite_number(value.get("z")?)?;
    Some(Point::new(x, z))
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}
