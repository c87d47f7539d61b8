//! Rendering support shared by every backend.
//!
//! Maps the effective view onto surface pixels, finds the vertex under the
//! pointer, and lowers a polygon set into a screen-space draw list.

pub mod hit;
pub mod paint;
pub mod palette;
pub mod transform;

pub use hit::{HitTarget, VERTEX_HIT_RADIUS, hit_test};
pub use paint::{DrawList, LegendEntry, Marker, PolygonPaint, build_draw_list};
pub use palette::Color;
pub use transform::{Surface, ViewTransform};
