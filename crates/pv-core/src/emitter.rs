//! Emitter: `PolygonSet` → polygon text, plus the built-in sample document.
//!
//! Output is pretty-printed JSON in exactly the shape the parser accepts,
//! one point object per line.

use crate::model::PolygonSet;

/// The two-polygon sample loaded by the "load sample" action.
///
/// Kept as literal text so the sample is reproducible byte-for-byte.
pub const SAMPLE_POLYGONS: &str = r#"[
  [
    { "x": 0, "z": 0 },
    { "x": 100, "z": 0 },
    { "x": 50, "z": 80 }
  ],
  [
    { "x": 120, "z": 20 },
    { "x": 200, "z": 20 },
    { "x": 200, "z": 100 },
    { "x": 120, "z": 100 }
  ]
]"#;

/// Emit a polygon set as polygon text.
#[must_use]
pub fn emit_polygons(set: &PolygonSet) -> String {
    if set.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::from("[\n");
    for (pi, polygon) in set.iter().enumerate() {
        if polygon.is_empty() {
            out.push_str("  []");
        } else {
            out.push_str("  [\n");
            for (i, p) in polygon.iter().enumerate() {
                out.push_str(&format!(
                    "    {{ \"x\": {}, \"z\": {} }}",
                    format_num(p.x),
                    format_num(p.z)
                ));
                if i + 1 < polygon.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str("  ]");
        }
        if pi + 1 < set.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(']');
    out
}

/// Integers print without a fraction, everything else uses the shortest
/// representation that round-trips.
fn format_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
